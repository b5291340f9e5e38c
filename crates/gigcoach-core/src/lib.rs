//! GigCoach Core Library
//!
//! Shared functionality for the GigCoach financial coaching backend:
//! - Database access and migrations (users, earnings, expenses, goals,
//!   loans, forecasts)
//! - Metrics engine: GigScore, progressive tax estimate, earnings insights
//! - Forecast adapter for externally produced earnings forecasts
//! - Dialogue router for the menu-driven chat interface

pub mod chat;
pub mod config;
pub mod db;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod models;
pub mod money;

pub use chat::{classify, handle_message, Intent};
pub use config::{TaxBracket, TaxConfig};
pub use db::Database;
pub use error::{Error, Result};
pub use forecast::{forecast_suggestion, ForecastSuggestion};
pub use metrics::{compute_gig_score, estimate_tax, generate_insights, score_inputs, TaxEstimate};
pub use money::format_inr;
