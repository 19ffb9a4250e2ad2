use thiserror::Error;

/// Errors produced by the request contract layer
///
/// These never carry HTTP semantics; the route layer decides which status
/// code each kind maps to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("No data provided")]
    MissingPayload,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ContractError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        ContractError::InvalidInput(detail.into())
    }

    /// Stable machine-readable tag for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ContractError::MissingPayload => "missing_payload",
            ContractError::MissingFields(_) => "missing_fields",
            ContractError::InvalidInput(_) => "invalid_input",
        }
    }
}
