use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::error::ContractError;

/// Untyped request body as received from the caller
pub type Payload = Map<String, Value>;

/// Structured failure returned when a payload does not satisfy its contract
///
/// Serializes as `{"error": "<message>", "success": false}` so it can be
/// returned directly as a 400 body.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    reason: ContractError,
}

impl ValidationFailure {
    fn new(reason: ContractError) -> Self {
        Self { reason }
    }

    pub fn message(&self) -> String {
        self.reason.to_string()
    }

    /// Always false; a failure never carries partial success
    pub fn success(&self) -> bool {
        false
    }

    pub fn reason(&self) -> &ContractError {
        &self.reason
    }

    /// Missing field names in declared order (empty for a missing payload)
    pub fn missing_fields(&self) -> &[String] {
        match &self.reason {
            ContractError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ValidationFailure {}

impl From<ValidationFailure> for ContractError {
    fn from(failure: ValidationFailure) -> Self {
        failure.reason
    }
}

impl Serialize for ValidationFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationFailure", 2)?;
        state.serialize_field("error", &self.message())?;
        state.serialize_field("success", &false)?;
        state.end()
    }
}

/// Check that a payload is present and carries every required key
///
/// Only key absence counts as missing: a key mapped to `null` satisfies the
/// contract. Missing fields are reported in the order they were declared.
pub fn validate_request(
    payload: Option<&Payload>,
    required_fields: &[&str],
) -> Result<(), ValidationFailure> {
    let payload = match payload {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ValidationFailure::new(ContractError::MissingPayload)),
    };

    let missing: Vec<String> = required_fields
        .iter()
        .filter(|field| !payload.contains_key(**field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(ContractError::MissingFields(missing)))
    }
}
