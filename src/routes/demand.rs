use actix_web::{web, HttpResponse};

use crate::models::requests::DEMAND_PREDICT_FIELDS;
use crate::models::{from_payload, DemandForecastRequest, DemandPredictionRequest};
use crate::routes::{read_payload, require_fields, respond, ApiError, AppState};
use crate::services::{forecast_demand, predict_demand};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/predict", web::post().to(predict))
        .route("/forecast", web::post().to(forecast));
}

/// Demand prediction for a location and period
///
/// POST /api/demand/predict
///
/// Request body:
/// ```json
/// {
///   "time_period": "weekend",
///   "location": "Downtown",
///   "historical_data": [120, 140, 135]
/// }
/// ```
async fn predict(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Demand prediction";

    let payload = require_fields(read_payload(&body)?, DEMAND_PREDICT_FIELDS)?;
    let request: DemandPredictionRequest =
        from_payload(payload).map_err(|e| ApiError::contract(OPERATION, e))?;

    let prediction = predict_demand(&request).map_err(|e| ApiError::contract(OPERATION, e))?;

    respond(OPERATION, &prediction, "Demand prediction completed successfully")
}

/// Daily demand forecast
///
/// POST /api/demand/forecast
///
/// `forecast_periods` defaults to the configured horizon.
async fn forecast(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    const OPERATION: &str = "Forecasting";

    let request = match read_payload(&body)? {
        Some(payload) => from_payload::<DemandForecastRequest>(payload)
            .map_err(|e| ApiError::contract(OPERATION, e))?,
        None => DemandForecastRequest::default(),
    };

    let forecast =
        forecast_demand(&request, &state.planning).map_err(|e| ApiError::contract(OPERATION, e))?;

    tracing::debug!(
        "Forecast {} periods from baseline {}",
        forecast.forecast_periods,
        forecast.baseline_demand
    );

    respond(OPERATION, &forecast, "Demand forecast generated successfully")
}
