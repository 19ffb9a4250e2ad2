use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response wrapper returned by every endpoint
///
/// `data` and `error` are omitted from the serialized body when not
/// provided; consumers must treat a missing key as "not provided". Data
/// that serializes to JSON `null` counts as not provided.
/// `timestamp` is a UTC instant serialized without an offset suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    pub message: String,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Build an envelope, capturing the current UTC time
    ///
    /// An empty `error` string is treated the same as no error.
    pub fn build(
        success: bool,
        data: Option<T>,
        message: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            timestamp: chrono::Utc::now().naive_utc(),
            data,
            error: error.filter(|e| !e.is_empty()),
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::build(true, Some(data), message, None)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::build(false, None, message, None)
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        let error = error.into();
        self.error = if error.is_empty() { None } else { Some(error) };
        self
    }
}

fn is_absent<T: Serialize>(data: &Option<T>) -> bool {
    match data {
        None => true,
        Some(value) => serde_json::to_value(value).map_or(false, |v| v.is_null()),
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self::build(true, None, "", None)
    }
}
