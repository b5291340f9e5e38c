//! Dashboard stats handler

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{AppError, AppState};
use gigcoach_core::metrics::{compute_gig_score, score_inputs};

/// Average income with change vs the previous period
#[derive(Debug, Serialize)]
pub struct AvgIncome {
    pub current: i64,
    /// Fractional change of the latest entry vs the one before; 0 when
    /// the previous entry is zero or missing
    pub change: f64,
}

#[derive(Debug, Serialize)]
pub struct AiForecast {
    pub current: f64,
}

#[derive(Debug, Serialize)]
pub struct GigScore {
    pub current: u32,
}

/// Response for the dashboard stats endpoint
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub avg_income: AvgIncome,
    pub ai_forecast: AiForecast,
    pub gig_score: GigScore,
}

/// GET /api/dashboard-stats/:phone_number - Headline numbers for the
/// dashboard: average income and change, latest forecast, GigScore
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<DashboardStats>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let amounts = state.db.earnings_amounts(user_id)?;

    let mut avg_income = AvgIncome {
        current: 0,
        change: 0.0,
    };
    if amounts.len() > 1 {
        let total: f64 = amounts.iter().sum();
        avg_income.current = (total / amounts.len() as f64).round() as i64;

        let last = amounts[amounts.len() - 1];
        let prev = amounts[amounts.len() - 2];
        if prev > 0.0 {
            avg_income.change = (last - prev) / prev;
        }
    }

    let ai_forecast = AiForecast {
        current: state
            .db
            .latest_forecast(user_id)?
            .map(|f| f.predicted_amount)
            .unwrap_or(0.0),
    };

    let inputs = score_inputs(&amounts);
    let gig_score = GigScore {
        current: compute_gig_score(inputs.month_count, inputs.volatility)?,
    };

    Ok(Json(DashboardStats {
        avg_income,
        ai_forecast,
        gig_score,
    }))
}
