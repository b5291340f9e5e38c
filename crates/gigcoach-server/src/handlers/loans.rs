//! Loan handlers: the user's logged loans plus the product catalog with
//! GigScore-based eligibility

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use gigcoach_core::metrics::{compute_gig_score, score_inputs};
use gigcoach_core::models::{Loan, NewLoan};

/// The fixed loan-product catalog
const LOAN_PRODUCTS: &[(&str, u32, &str, &str)] = &[
    ("GigCredit Basic", 400, "Up to ₹10,000", "2% / month"),
    ("GigCredit Plus", 600, "Up to ₹50,000", "1.5% / month"),
    (
        "Platform Advance",
        350,
        "Up to 30% of avg income",
        "0% (Platform fee may apply)",
    ),
];

/// Request body for logging a loan
#[derive(Debug, Deserialize)]
pub struct AddLoanRequest {
    pub phone_number: String,
    pub lender_name: String,
    pub total_amount: f64,
    pub outstanding_amount: f64,
    pub interest_rate: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

/// One catalog entry with eligibility for the requesting user
#[derive(Debug, Serialize)]
pub struct LoanOption {
    pub name: String,
    pub min_score: u32,
    pub amount: String,
    pub interest: String,
    pub eligible: bool,
}

/// Response for the loan options endpoint
#[derive(Debug, Serialize)]
pub struct LoanOptionsResponse {
    pub gig_score: u32,
    pub loan_options: Vec<LoanOption>,
}

/// POST /api/user-loans - Log a loan for a user
pub async fn add_loan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddLoanRequest>,
) -> Result<Json<Loan>, AppError> {
    if !body.total_amount.is_finite() || body.total_amount <= 0.0 {
        return Err(AppError::bad_request("total_amount must be positive"));
    }
    if !body.outstanding_amount.is_finite() || body.outstanding_amount < 0.0 {
        return Err(AppError::bad_request(
            "outstanding_amount must be a non-negative number",
        ));
    }

    let user_id = state.db.user_id_for_phone(&body.phone_number)?;
    let loan = state.db.insert_loan(
        user_id,
        &NewLoan {
            lender_name: body.lender_name,
            total_amount: body.total_amount,
            outstanding_amount: body.outstanding_amount,
            interest_rate: body.interest_rate,
            due_date: body.due_date,
        },
    )?;

    Ok(Json(loan))
}

/// GET /api/user-loans/:phone_number - List a user's logged loans
pub async fn list_loans(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<Loan>>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let loans = state.db.list_loans(user_id)?;

    Ok(Json(loans))
}

/// GET /api/loans/:phone_number - Loan products with per-product
/// eligibility derived from the user's live GigScore
pub async fn loan_options(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<LoanOptionsResponse>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let amounts = state.db.earnings_amounts(user_id)?;

    let inputs = score_inputs(&amounts);
    let gig_score = compute_gig_score(inputs.month_count, inputs.volatility)?;

    let loan_options = LOAN_PRODUCTS
        .iter()
        .map(|&(name, min_score, amount, interest)| LoanOption {
            name: name.to_string(),
            min_score,
            amount: amount.to_string(),
            interest: interest.to_string(),
            eligible: gig_score >= min_score,
        })
        .collect();

    Ok(Json(LoanOptionsResponse {
        gig_score,
        loan_options,
    }))
}
