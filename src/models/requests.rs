use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::core::{ContractError, Payload, Point};
use crate::models::domain::{Dimensions, InventoryItem, Package};

/// Required keys per endpoint, checked before a payload is narrowed
pub const WAREHOUSE_OPTIMIZE_FIELDS: &[&str] =
    &["warehouse_dimensions", "inventory_data", "access_points"];
pub const LAYOUT_ANALYZE_FIELDS: &[&str] = &["warehouse_dimensions", "inventory_data"];
pub const TRUCK_LOADING_FIELDS: &[&str] = &["truck_dimensions", "packages", "weight_limit"];
pub const ROUTE_OPTIMIZE_FIELDS: &[&str] =
    &["start_location", "end_location", "delivery_points", "vehicle_capacity"];
pub const DEMAND_PREDICT_FIELDS: &[&str] = &["time_period", "location", "historical_data"];

/// Narrow an untyped payload into a typed request record
///
/// Call only after the required keys have been confirmed present. Type
/// mismatches and rule violations both surface as `InvalidInput`.
pub fn from_payload<T>(payload: Payload) -> Result<T, ContractError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_value(Value::Object(payload))
        .map_err(|e| ContractError::invalid(e.to_string()))?;
    request
        .validate()
        .map_err(|e| ContractError::invalid(e.to_string()))?;
    Ok(request)
}

/// Request to optimize a warehouse layout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WarehouseOptimizationRequest {
    #[validate(nested)]
    pub warehouse_dimensions: Dimensions,
    #[validate(nested)]
    pub inventory_data: Vec<InventoryItem>,
    pub access_points: Vec<Point>,
}

/// Request to review an existing warehouse layout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LayoutAnalysisRequest {
    #[validate(nested)]
    pub warehouse_dimensions: Dimensions,
    #[validate(nested)]
    pub inventory_data: Vec<InventoryItem>,
    #[serde(default)]
    pub access_points: Vec<Point>,
    /// Floor area currently occupied by storage, in m2
    #[validate(range(min = 0.0))]
    pub occupied_area: Option<f64>,
}

/// Request to plan or validate a truck load
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TruckLoadingRequest {
    #[validate(nested)]
    pub truck_dimensions: Dimensions,
    #[validate(length(min = 1), nested)]
    pub packages: Vec<Package>,
    #[validate(range(exclusive_min = 0.0))]
    pub weight_limit: f64,
}

/// Request to plan a delivery route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RouteOptimizationRequest {
    pub start_location: Point,
    pub end_location: Point,
    pub delivery_points: Vec<Point>,
    #[validate(range(min = 0.0))]
    pub vehicle_capacity: f64,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub avg_speed_kmh: Option<f64>,
}

/// Request to refresh the ETA of a route in progress
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RealTimeUpdateRequest {
    #[serde(default)]
    pub remaining_distance_km: Option<f64>,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub avg_speed_kmh: Option<f64>,
}

/// Request to predict demand for a location and period
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DemandPredictionRequest {
    #[validate(length(min = 1))]
    pub time_period: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub historical_data: Vec<f64>,
}

/// Request for a daily demand forecast
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DemandForecastRequest {
    #[serde(default)]
    #[validate(range(min = 1, max = 365))]
    pub forecast_periods: Option<u32>,
    #[serde(default)]
    pub historical_data: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_narrow_route_request() {
        let p = payload(json!({
            "start_location": [0, 0],
            "end_location": { "x": 10, "y": 0 },
            "delivery_points": [[3, 4]],
            "vehicle_capacity": 1200
        }));
        let req: RouteOptimizationRequest = from_payload(p).unwrap();
        assert_eq!(req.delivery_points.len(), 1);
        assert_eq!(req.avg_speed_kmh, None);
    }

    #[test]
    fn test_null_required_value_is_rejected_when_narrowing() {
        let p = payload(json!({
            "truck_dimensions": null,
            "packages": [],
            "weight_limit": 100
        }));
        let err = from_payload::<TruckLoadingRequest>(p).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn test_rule_violation_is_invalid_input() {
        let p = payload(json!({
            "truck_dimensions": { "length": 5, "width": 2, "height": 2 },
            "packages": [],
            "weight_limit": 100
        }));
        assert!(from_payload::<TruckLoadingRequest>(p).is_err());
    }

    #[test]
    fn test_forecast_defaults() {
        let req: DemandForecastRequest = from_payload(payload(json!({ "note": "x" }))).unwrap();
        assert_eq!(req.forecast_periods, None);
        assert!(req.historical_data.is_none());
    }
}
