//! Domain models for GigCoach

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user, identified by their phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

/// One earnings entry. A user's entries ordered by date form their
/// earnings series (loosely monthly; spacing is not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Earnings entry pending insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEarnings {
    pub date: NaiveDate,
    pub amount: f64,
}

/// A logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Expense pending insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub description: Option<String>,
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub goal_name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Goal pending insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub goal_name: String,
    pub target_amount: f64,
    pub target_date: Option<NaiveDate>,
}

/// A loan the user is repaying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub user_id: i64,
    pub lender_name: String,
    pub total_amount: f64,
    pub outstanding_amount: f64,
    pub interest_rate: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Loan pending insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    pub lender_name: String,
    pub total_amount: f64,
    pub outstanding_amount: f64,
    pub interest_rate: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

/// An earnings forecast written by the external prediction job.
/// Only the newest row per user (by `created_at`) is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub id: i64,
    pub user_id: i64,
    pub predicted_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Aggregates over a user's full earnings series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Number of entries in the series
    pub months: usize,
    /// Arithmetic mean, rounded to whole units
    pub average: i64,
    pub highest: f64,
    pub lowest: f64,
}

impl EarningsSummary {
    /// Summarize a non-empty series. Returns `None` for an empty one.
    pub fn from_amounts(amounts: &[f64]) -> Option<Self> {
        if amounts.is_empty() {
            return None;
        }
        let total: f64 = amounts.iter().sum();
        let average = (total / amounts.len() as f64).round() as i64;
        let highest = amounts.iter().cloned().fold(f64::MIN, f64::max);
        let lowest = amounts.iter().cloned().fold(f64::MAX, f64::min);
        Some(Self {
            months: amounts.len(),
            average,
            highest,
            lowest,
        })
    }
}

/// Inputs to the GigScore computation, derived from the earnings series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// How many earnings entries exist
    pub month_count: u32,
    /// Population standard deviation of the amounts; `None` with fewer
    /// than 2 entries
    pub volatility: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let summary = EarningsSummary::from_amounts(&[100.0, 200.0, 300.0]).unwrap();
        assert_eq!(summary.months, 3);
        assert_eq!(summary.average, 200);
        assert_eq!(summary.highest, 300.0);
        assert_eq!(summary.lowest, 100.0);
    }

    #[test]
    fn test_summary_rounds_average() {
        let summary = EarningsSummary::from_amounts(&[100.0, 101.0]).unwrap();
        assert_eq!(summary.average, 101); // 100.5 rounds up
    }

    #[test]
    fn test_summary_empty() {
        assert!(EarningsSummary::from_amounts(&[]).is_none());
    }
}
