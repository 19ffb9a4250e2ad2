use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// Box dimensions in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Dimensions {
    #[validate(range(exclusive_min = 0.0))]
    pub length: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub width: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
}

impl Dimensions {
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }
}

/// A package to be loaded onto a truck
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Package {
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub length: Option<f64>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub width: Option<f64>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f64>,
}

impl Package {
    /// Volume when all three dimensions were supplied
    pub fn volume(&self) -> Option<f64> {
        match (self.length, self.width, self.height) {
            (Some(l), Some(w), Some(h)) => Some(l * w * h),
            _ => None,
        }
    }
}

/// A stock-keeping unit held in a warehouse
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InventoryItem {
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "string_or_number")]
    pub sku: String,
    #[serde(default)]
    pub quantity: u64,
    /// Picks per period; higher means faster-moving
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub turnover_rate: f64,
}

/// Demand period used to scale a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    PeakHours,
    Weekend,
    Holiday,
    Regular,
}

impl TimePeriod {
    /// Unknown labels fall back to a regular period
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "peak_hours" => TimePeriod::PeakHours,
            "weekend" => TimePeriod::Weekend,
            "holiday" => TimePeriod::Holiday,
            _ => TimePeriod::Regular,
        }
    }

    pub fn demand_multiplier(&self) -> f64 {
        match self {
            TimePeriod::PeakHours => 1.5,
            TimePeriod::Weekend => 1.2,
            TimePeriod::Holiday => 2.0,
            TimePeriod::Regular => 1.0,
        }
    }
}

/// Accept identifiers written either as JSON strings or numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number identifier, got {}",
            other
        ))),
    }
}
