//! SwarmFill AI Services - logistics planning endpoints
//!
//! Every endpoint shares one request/response contract: a payload is
//! checked against its required fields, narrowed to a typed request, and the
//! result is wrapped in a standard envelope.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance, estimate_time, format_coordinates, validate_request, ContractError, Coordinates,
    Envelope, Payload, Point, ValidationFailure,
};
pub use routes::{configure_routes, AppState};
