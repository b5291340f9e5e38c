//! Expense handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState};
use gigcoach_core::models::{ExpenseRecord, NewExpense};

/// Request body for logging an expense
#[derive(Debug, Deserialize)]
pub struct AddExpenseRequest {
    pub phone_number: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
}

/// POST /api/expenses - Log an expense for a user
pub async fn add_expense(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddExpenseRequest>,
) -> Result<Json<ExpenseRecord>, AppError> {
    if !body.amount.is_finite() || body.amount < 0.0 {
        return Err(AppError::bad_request(
            "amount must be a non-negative number",
        ));
    }
    if body.category.trim().is_empty() {
        return Err(AppError::bad_request("category is required"));
    }

    let user_id = state.db.user_id_for_phone(&body.phone_number)?;
    let record = state.db.insert_expense(
        user_id,
        &NewExpense {
            category: body.category,
            amount: body.amount,
            expense_date: body.expense_date,
            description: body.description,
        },
    )?;

    Ok(Json(record))
}

/// GET /api/expenses/:phone_number - List a user's expenses, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<ExpenseRecord>>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let records = state.db.list_expenses(user_id)?;

    Ok(Json(records))
}
