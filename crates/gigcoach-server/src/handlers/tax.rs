//! Tax estimate handler

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{AppError, AppState};
use gigcoach_core::metrics::{estimate_tax, TaxEstimate};

/// GET /api/tax-estimate/:phone_number - Estimate tax over the fiscal
/// window. The window filter happens in the queries; the engine only
/// sees the totals.
pub async fn tax_estimate(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<TaxEstimate>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;

    let since = state.tax.fiscal_year_start;
    let gross_income = state.db.total_earnings_since(user_id, since)?;
    let total_deductions = state.db.total_expenses_since(user_id, since)?;

    let estimate = estimate_tax(gross_income, total_deductions, &state.tax)?;

    Ok(Json(estimate))
}
