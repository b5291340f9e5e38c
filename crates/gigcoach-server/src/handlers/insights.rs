//! Insights handler

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{AppError, AppState};
use gigcoach_core::metrics::generate_insights;

/// Response for the insights endpoint
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}

/// GET /api/insights/:phone_number - Rule-based insights over the
/// earnings series. A short series yields the fallback message, not an
/// error.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<InsightsResponse>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let amounts = state.db.earnings_amounts(user_id)?;

    Ok(Json(InsightsResponse {
        insights: generate_insights(&amounts),
    }))
}
