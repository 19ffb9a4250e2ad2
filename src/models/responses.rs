use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::Point;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub dependencies: BTreeMap<String, bool>,
}

/// Service description served from the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Error response for bodies that are not valid JSON objects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One stop on a delivery route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    pub sequence: usize,
    pub location: Point,
    pub leg_distance: f64,
    pub cumulative_distance: f64,
    /// Minutes from departure, driving time only
    pub estimated_arrival_minutes: f64,
    pub is_delivery: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptimizationResult {
    pub request_id: String,
    pub optimized_route: Vec<RouteStop>,
    pub total_distance: f64,
    pub estimated_time: f64,
    pub fuel_consumption: f64,
    pub co2_emissions: f64,
    pub vehicle_capacity: f64,
    pub avg_speed_kmh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealTimeUpdate {
    pub route_updated: bool,
    pub remaining_distance_km: f64,
    pub new_eta: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingStep {
    pub step: usize,
    pub package_id: String,
    pub weight: f64,
    pub cumulative_weight: f64,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingPlan {
    pub request_id: String,
    pub loading_sequence: Vec<LoadingStep>,
    pub deferred_packages: Vec<String>,
    pub total_weight: f64,
    pub weight_utilization: f64,
    /// `None` when some loaded package has no dimensions
    pub space_utilization: Option<f64>,
    pub truck_volume: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadValidation {
    pub is_valid: bool,
    pub total_weight: f64,
    pub weight_utilization: f64,
    pub space_utilization: Option<f64>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// A storage zone holding items of similar turnover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub area_share: f64,
    pub area: f64,
    pub location: String,
    pub skus: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseLayout {
    pub request_id: String,
    pub floor_area: f64,
    pub storage_volume: f64,
    pub zones: Vec<Zone>,
    pub access_point_count: usize,
    pub total_units: u64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottleneck {
    pub area: String,
    pub issue: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutAnalysis {
    pub request_id: String,
    pub efficiency_score: f64,
    pub floor_area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_rate: Option<f64>,
    pub bottlenecks: Vec<Bottleneck>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPrediction {
    pub request_id: String,
    pub predicted_demand: f64,
    pub baseline_demand: f64,
    pub demand_multiplier: f64,
    pub prediction_range: PredictionRange,
    pub factors_influencing: Vec<String>,
    pub next_update: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: chrono::NaiveDate,
    pub day_of_week: String,
    pub predicted_demand: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    pub request_id: String,
    pub forecast_periods: u32,
    pub baseline_demand: f64,
    pub forecast_data: Vec<ForecastPoint>,
}
