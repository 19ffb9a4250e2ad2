use actix_web::{web, HttpResponse};

use crate::models::requests::{LAYOUT_ANALYZE_FIELDS, WAREHOUSE_OPTIMIZE_FIELDS};
use crate::models::{from_payload, LayoutAnalysisRequest, WarehouseOptimizationRequest};
use crate::routes::{read_payload, require_fields, respond, ApiError};
use crate::services::{analyze_layout, optimize_layout};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/optimize", web::post().to(optimize_warehouse))
        .route("/layout/analyze", web::post().to(analyze_warehouse_layout));
}

/// Warehouse zoning by turnover
///
/// POST /api/warehouse/optimize
///
/// Request body:
/// ```json
/// {
///   "warehouse_dimensions": {"length": 120, "width": 60, "height": 12},
///   "inventory_data": [{"sku": "A-100", "quantity": 40, "turnover_rate": 8.5}],
///   "access_points": [[0, 0], [120, 0]]
/// }
/// ```
async fn optimize_warehouse(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Optimization";

    let payload = require_fields(read_payload(&body)?, WAREHOUSE_OPTIMIZE_FIELDS)?;
    let request: WarehouseOptimizationRequest =
        from_payload(payload).map_err(|e| ApiError::contract(OPERATION, e))?;

    let layout = optimize_layout(&request).map_err(|e| ApiError::contract(OPERATION, e))?;

    tracing::info!(
        "Zoned {} inventory items over {} m2",
        request.inventory_data.len(),
        layout.floor_area
    );

    respond(OPERATION, &layout, "Warehouse optimization completed successfully")
}

/// Efficiency review of the current layout
///
/// POST /api/warehouse/layout/analyze
///
/// `access_points` and `occupied_area` are optional; utilization is only
/// reported when `occupied_area` is given.
async fn analyze_warehouse_layout(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Analysis";

    let payload = require_fields(read_payload(&body)?, LAYOUT_ANALYZE_FIELDS)?;
    let request: LayoutAnalysisRequest =
        from_payload(payload).map_err(|e| ApiError::contract(OPERATION, e))?;

    let analysis = analyze_layout(&request);

    tracing::info!(
        "Layout scored {} with {} bottlenecks",
        analysis.efficiency_score,
        analysis.bottlenecks.len()
    );

    respond(OPERATION, &analysis, "Layout analysis completed")
}
