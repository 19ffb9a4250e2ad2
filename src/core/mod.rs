// Request/response contract exports
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod validation;

pub use envelope::Envelope;
pub use error::ContractError;
pub use geometry::{
    coerce_number, distance, estimate_time, format_coordinates, round_to, Coordinates, Point,
    DEFAULT_AVG_SPEED_KMH,
};
pub use validation::{validate_request, Payload, ValidationFailure};

/// Generate a unique identifier for tracking a single result
pub fn generate_unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
