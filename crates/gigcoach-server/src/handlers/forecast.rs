//! Forecast handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{AppError, AppState};
use gigcoach_core::forecast::{forecast_suggestion, ForecastSuggestion};
use gigcoach_core::models::Forecast;

/// GET /api/forecast/:phone_number - The savings suggestion derived from
/// the latest forecast. Always 200 for a known user; without a forecast
/// the suggestion is zero with the "still learning" fragment.
pub async fn get_forecast_suggestion(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<ForecastSuggestion>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let latest = state.db.latest_forecast(user_id)?;

    Ok(Json(forecast_suggestion(latest.as_ref())))
}

/// GET /api/latest-forecast/:phone_number - Raw latest forecast row
pub async fn get_latest_forecast(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<Forecast>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let forecast = state
        .db
        .latest_forecast(user_id)?
        .ok_or_else(|| AppError::not_found("No forecast found for this user."))?;

    Ok(Json(forecast))
}
