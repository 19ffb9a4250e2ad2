use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::{ContractError, Envelope, ValidationFailure};
use crate::models::ErrorResponse;

/// Failures a handler can return; each kind maps to one status code
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not JSON, or not a JSON object
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Payload absent or missing required keys
    #[error("{0}")]
    Validation(ValidationFailure),

    /// Payload has the keys but values of the wrong shape
    #[error("{operation} failed: {source}")]
    Contract {
        operation: &'static str,
        source: ContractError,
    },

    #[error("{operation} failed: {detail}")]
    Internal {
        operation: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn contract(operation: &'static str, source: ContractError) -> Self {
        ApiError::Contract { operation, source }
    }

    pub fn internal(operation: &'static str, detail: impl ToString) -> Self {
        ApiError::Internal {
            operation,
            detail: detail.to_string(),
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::Validation(failure)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::info!("Rejected request: {}", self);
        }

        let mut response = HttpResponse::build(status);
        match self {
            ApiError::InvalidJson(_) => response.json(ErrorResponse {
                error: "invalid_json".to_string(),
                message: self.to_string(),
                status_code: status.as_u16(),
            }),
            // The validation outcome is the body as-is
            ApiError::Validation(failure) => response.json(failure),
            ApiError::Contract { source, .. } => response.json(
                Envelope::<()>::failure(self.to_string()).with_error(source.kind()),
            ),
            ApiError::Internal { .. } => response.json(Envelope::<()>::failure(self.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate_request;

    #[test]
    fn test_status_mapping() {
        let failure = validate_request(None, &["a"]).unwrap_err();
        assert_eq!(ApiError::from(failure).status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::contract("Route optimization", ContractError::invalid("bad point"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Route optimization failed: Invalid input: bad point");

        let err = ApiError::internal("Demand forecast", "serializer gave up");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
