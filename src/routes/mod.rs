// Route exports
pub mod demand;
pub mod error;
pub mod health;
pub mod route;
pub mod truck;
pub mod warehouse;

pub use error::ApiError;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;

use crate::config::PlanningSettings;
use crate::core::{validate_request, Envelope, Payload};

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub planning: PlanningSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .service(web::scope("/api/warehouse").configure(warehouse::configure))
        .service(web::scope("/api/truck").configure(truck::configure))
        .service(web::scope("/api/route").configure(route::configure))
        .service(web::scope("/api/demand").configure(demand::configure));
}

/// Parse a raw request body into an untyped payload
///
/// An empty body or an empty JSON value (`null`, `false`, `0`, `""`, `[]`)
/// is an absent payload. Any other non-object value is rejected.
pub fn read_payload(body: &[u8]) -> Result<Option<Payload>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(value) if is_empty_value(&value) => Ok(None),
        Ok(other) => Err(ApiError::InvalidJson(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ApiError::InvalidJson(e.to_string())),
    }
}

/// Run the request contract and hand back the confirmed payload
pub fn require_fields(payload: Option<Payload>, fields: &[&str]) -> Result<Payload, ApiError> {
    validate_request(payload.as_ref(), fields)?;
    Ok(payload.unwrap_or_default())
}

/// Wrap a handler result in a success envelope
pub fn respond<T: Serialize>(
    operation: &'static str,
    result: &T,
    message: &str,
) -> Result<HttpResponse, ApiError> {
    let data = serde_json::to_value(result).map_err(|e| ApiError::internal(operation, e))?;
    Ok(HttpResponse::Ok().json(Envelope::ok(data, message)))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_payload_absent() {
        assert!(read_payload(b"").unwrap().is_none());
        assert!(read_payload(b"  \n").unwrap().is_none());
        assert!(read_payload(b"null").unwrap().is_none());
    }

    #[test]
    fn test_read_payload_empty_values_are_absent() {
        for body in [&b"[]"[..], b"false", b"0", b"0.0", br#""""#] {
            assert!(read_payload(body).unwrap().is_none());
        }
    }

    #[test]
    fn test_read_payload_object() {
        let payload = read_payload(br#"{"a": 1}"#).unwrap().unwrap();
        assert!(payload.contains_key("a"));
    }

    #[test]
    fn test_read_payload_rejects_non_objects() {
        assert!(matches!(read_payload(b"[1, 2]"), Err(ApiError::InvalidJson(_))));
        assert!(matches!(read_payload(b"true"), Err(ApiError::InvalidJson(_))));
        assert!(matches!(read_payload(b"7"), Err(ApiError::InvalidJson(_))));
        assert!(matches!(read_payload(b"{oops"), Err(ApiError::InvalidJson(_))));
    }

    #[test]
    fn test_require_fields_returns_payload() {
        let payload = read_payload(br#"{"a": null}"#).unwrap();
        let confirmed = require_fields(payload, &["a"]).unwrap();
        assert_eq!(confirmed.get("a"), Some(&Value::Null));
    }
}
