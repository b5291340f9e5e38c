//! Earnings handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState};
use gigcoach_core::models::{EarningsRecord, NewEarnings};

/// Request body for adding an earnings entry
#[derive(Debug, Deserialize)]
pub struct AddEarningsRequest {
    pub phone_number: String,
    pub date: NaiveDate,
    pub amount: f64,
}

/// POST /api/earnings - Add one earnings entry for a user
pub async fn add_earnings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddEarningsRequest>,
) -> Result<Json<EarningsRecord>, AppError> {
    if !body.amount.is_finite() || body.amount < 0.0 {
        return Err(AppError::bad_request(
            "amount must be a non-negative number",
        ));
    }

    let user_id = state.db.user_id_for_phone(&body.phone_number)?;
    let record = state.db.insert_earnings(
        user_id,
        &NewEarnings {
            date: body.date,
            amount: body.amount,
        },
    )?;

    Ok(Json(record))
}

/// GET /api/earnings/:phone_number - Full earnings history, date ascending
pub async fn list_earnings(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<EarningsRecord>>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let records = state.db.list_earnings(user_id)?;

    if records.is_empty() {
        return Err(AppError::not_found("No earnings data found for user"));
    }

    Ok(Json(records))
}
