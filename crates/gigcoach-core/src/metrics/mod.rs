//! Metrics engine
//!
//! Pure functions over a user's financial records:
//! - `score` - GigScore, the bounded creditworthiness proxy
//! - `tax` - progressive tax estimate over the configured schedule
//! - `insights` - rule-based textual insights over the earnings series
//!
//! Everything here is deterministic and side-effect free; callers load
//! the data through the database facade and hand in plain values.

mod insights;
mod score;
mod tax;

pub use insights::{generate_insights, INSUFFICIENT_DATA_MESSAGE};
pub use score::{compute_gig_score, score_inputs, volatility, STABILITY_THRESHOLD};
pub use tax::{estimate_tax, TaxEstimate};
