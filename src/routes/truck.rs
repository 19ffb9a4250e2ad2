use actix_web::{web, HttpResponse};

use crate::models::requests::TRUCK_LOADING_FIELDS;
use crate::models::{from_payload, TruckLoadingRequest};
use crate::routes::{read_payload, require_fields, respond, ApiError};
use crate::services::{plan_loading, validate_load};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/optimize-loading", web::post().to(optimize_truck_loading))
        .route("/validate-load", web::post().to(validate_truck_load));
}

fn loading_request(body: &[u8], operation: &'static str) -> Result<TruckLoadingRequest, ApiError> {
    let payload = require_fields(read_payload(body)?, TRUCK_LOADING_FIELDS)?;
    from_payload(payload).map_err(|e| ApiError::contract(operation, e))
}

/// Heaviest-first loading plan
///
/// POST /api/truck/optimize-loading
///
/// Request body:
/// ```json
/// {
///   "truck_dimensions": {"length": 7.2, "width": 2.4, "height": 2.6},
///   "packages": [{"id": "p1", "weight": 12.5, "length": 0.6, "width": 0.4, "height": 0.4}],
///   "weight_limit": 3500
/// }
/// ```
async fn optimize_truck_loading(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Loading optimization";

    let request = loading_request(&body, OPERATION)?;
    let plan = plan_loading(&request);

    tracing::info!(
        "Planned load of {} packages ({} deferred), {}% of weight limit",
        plan.loading_sequence.len(),
        plan.deferred_packages.len(),
        plan.weight_utilization
    );

    respond(OPERATION, &plan, "Truck loading optimization completed successfully")
}

/// Check that a load fits the truck
///
/// POST /api/truck/validate-load
async fn validate_truck_load(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Load validation";

    let request = loading_request(&body, OPERATION)?;
    let report = validate_load(&request);

    if !report.is_valid {
        tracing::debug!("Load rejected: {:?}", report.warnings);
    }

    respond(OPERATION, &report, "Load validation completed")
}
