use chrono::{Duration, Utc};

use crate::config::PlanningSettings;
use crate::core::{generate_unique_id, ContractError};
use crate::models::{
    DemandForecast, DemandForecastRequest, DemandPrediction, DemandPredictionRequest,
    ForecastPoint, PredictionRange, TimePeriod,
};

/// Longest forecast horizon accepted, in days
pub const MAX_FORECAST_PERIODS: u32 = 365;

/// Relative width of the prediction range on either side
const PREDICTION_SPREAD: f64 = 0.15;

/// Hours until a prediction should be refreshed
const PREDICTION_REFRESH_HOURS: i64 = 6;

fn mean(values: &[f64]) -> Result<f64, ContractError> {
    if values.is_empty() {
        return Err(ContractError::invalid("historical_data must not be empty"));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(ContractError::invalid(format!(
            "historical_data values must be non-negative numbers, got {}",
            bad
        )));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Scale the historical average by the period multiplier
pub fn predict_demand(
    request: &DemandPredictionRequest,
) -> Result<DemandPrediction, ContractError> {
    let baseline = mean(&request.historical_data)?;
    let period = TimePeriod::parse(&request.time_period);
    let multiplier = period.demand_multiplier();
    let predicted = baseline * multiplier;

    Ok(DemandPrediction {
        request_id: generate_unique_id(),
        predicted_demand: predicted.round(),
        baseline_demand: baseline,
        demand_multiplier: multiplier,
        prediction_range: PredictionRange {
            min: (predicted * (1.0 - PREDICTION_SPREAD)).round(),
            max: (predicted * (1.0 + PREDICTION_SPREAD)).round(),
        },
        factors_influencing: vec![
            format!("Location: {}", request.location),
            format!("Time period: {} ({}x demand)", request.time_period, multiplier),
            format!("Baseline from {} historical observations", request.historical_data.len()),
        ],
        next_update: Utc::now().naive_utc() + Duration::hours(PREDICTION_REFRESH_HOURS),
    })
}

/// Daily forecast starting today with a linear trend over the baseline
///
/// The baseline is the historical average when history is supplied,
/// otherwise the configured default.
pub fn forecast_demand(
    request: &DemandForecastRequest,
    planning: &PlanningSettings,
) -> Result<DemandForecast, ContractError> {
    let periods = request
        .forecast_periods
        .unwrap_or(planning.default_forecast_periods);
    if periods == 0 || periods > MAX_FORECAST_PERIODS {
        return Err(ContractError::invalid(format!(
            "forecast_periods must be between 1 and {}, got {}",
            MAX_FORECAST_PERIODS, periods
        )));
    }

    let baseline = match request.historical_data.as_deref() {
        Some(history) if !history.is_empty() => mean(history)?,
        _ => planning.forecast_baseline,
    };

    let today = Utc::now().date_naive();
    let forecast_data = (0..periods)
        .map(|i| {
            let date = today + Duration::days(i64::from(i));
            let demand = baseline + f64::from(i) * planning.forecast_daily_trend;
            ForecastPoint {
                date,
                day_of_week: date.format("%A").to_string(),
                predicted_demand: demand.max(0.0).round(),
            }
        })
        .collect();

    Ok(DemandForecast {
        request_id: generate_unique_id(),
        forecast_periods: periods,
        baseline_demand: baseline,
        forecast_data,
    })
}
