//! Request handlers, one module per resource

mod dashboard;
mod earnings;
mod expenses;
mod forecast;
mod goals;
mod insights;
mod loans;
mod tax;
mod webhook;

pub use dashboard::dashboard_stats;
pub use earnings::{add_earnings, list_earnings};
pub use expenses::{add_expense, list_expenses};
pub use forecast::{get_forecast_suggestion, get_latest_forecast};
pub use goals::{create_goal, delete_goal, list_goals, update_goal};
pub use insights::get_insights;
pub use loans::{add_loan, list_loans, loan_options};
pub use tax::tax_estimate;
pub use webhook::{banner, webhook};
