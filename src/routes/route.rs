use actix_web::{web, HttpResponse};

use crate::models::requests::ROUTE_OPTIMIZE_FIELDS;
use crate::models::{from_payload, RealTimeUpdateRequest, RouteOptimizationRequest};
use crate::routes::{read_payload, require_fields, respond, ApiError, AppState};
use crate::services::{plan_route, realtime_update};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/optimize", web::post().to(optimize_route))
        .route("/real-time-update", web::post().to(update_route_realtime));
}

/// Delivery route summary
///
/// POST /api/route/optimize
///
/// Request body:
/// ```json
/// {
///   "start_location": [0, 0],
///   "end_location": [12, 5],
///   "delivery_points": [[3, 4], {"x": 8, "y": 1}],
///   "vehicle_capacity": 1200,
///   "avg_speed_kmh": 40
/// }
/// ```
async fn optimize_route(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Route optimization";

    let payload = require_fields(read_payload(&body)?, ROUTE_OPTIMIZE_FIELDS)?;
    let request: RouteOptimizationRequest =
        from_payload(payload).map_err(|e| ApiError::contract(OPERATION, e))?;

    let result =
        plan_route(&request, &state.planning).map_err(|e| ApiError::contract(OPERATION, e))?;

    tracing::info!(
        "Planned route with {} stops, {} km",
        result.optimized_route.len(),
        result.total_distance
    );

    respond(OPERATION, &result, "Route optimization completed successfully")
}

/// ETA refresh for a route in progress
///
/// POST /api/route/real-time-update
///
/// All fields are optional; an empty body uses the defaults.
async fn update_route_realtime(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Real-time update";

    let request = match read_payload(&body)? {
        Some(payload) => from_payload::<RealTimeUpdateRequest>(payload)
            .map_err(|e| ApiError::contract(OPERATION, e))?,
        None => RealTimeUpdateRequest::default(),
    };

    let update =
        realtime_update(&request, &state.planning).map_err(|e| ApiError::contract(OPERATION, e))?;

    respond(OPERATION, &update, "Route updated with real-time data")
}
