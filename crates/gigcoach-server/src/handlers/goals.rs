//! Savings goal handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{AppError, AppState, SuccessResponse};
use gigcoach_core::models::{Goal, NewGoal};

/// Request body for creating a goal
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub phone_number: String,
    pub goal_name: String,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
}

/// Request body for updating a goal. `amount_to_add` takes precedence;
/// otherwise both `goal_name` and `target_amount` replace the goal's
/// details wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateGoalRequest {
    pub amount_to_add: Option<f64>,
    pub goal_name: Option<String>,
    pub target_amount: Option<f64>,
}

/// POST /api/goals - Create a goal for a user
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    if !body.target_amount.is_finite() || body.target_amount <= 0.0 {
        return Err(AppError::bad_request("target_amount must be positive"));
    }
    if body.goal_name.trim().is_empty() {
        return Err(AppError::bad_request("goal_name is required"));
    }

    let user_id = state.db.user_id_for_phone(&body.phone_number)?;
    let goal = state.db.create_goal(
        user_id,
        &NewGoal {
            goal_name: body.goal_name,
            target_amount: body.target_amount,
            target_date: body.target_date,
        },
    )?;

    Ok(Json(goal))
}

/// GET /api/goals/:phone_number - List a user's goals
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let user_id = state.db.user_id_for_phone(&phone_number)?;
    let goals = state.db.list_goals(user_id)?;

    Ok(Json(goals))
}

/// PUT /api/goals/:id - Add savings to a goal, or edit its details
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    if let Some(delta) = body.amount_to_add {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(AppError::bad_request("amount_to_add must be positive"));
        }
        let goal = state.db.add_goal_savings(id, delta)?;
        return Ok(Json(goal));
    }

    match (body.goal_name, body.target_amount) {
        (Some(name), Some(target)) => {
            if !target.is_finite() || target <= 0.0 {
                return Err(AppError::bad_request("target_amount must be positive"));
            }
            if name.trim().is_empty() {
                return Err(AppError::bad_request("goal_name is required"));
            }
            let goal = state.db.update_goal(id, &name, target)?;
            Ok(Json(goal))
        }
        _ => Err(AppError::bad_request(
            "Provide amount_to_add, or goal_name and target_amount",
        )),
    }
}

/// DELETE /api/goals/:id - Delete a goal permanently
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.db.delete_goal(id)?;
    Ok(Json(SuccessResponse { success: true }))
}
