//! Message handling
//!
//! One inbound message, one plain-text reply. Data-access failures
//! degrade to a fixed apologetic message; nothing here propagates an
//! error to the transport.

use tracing::warn;

use super::intent::{classify, Intent};
use super::templates;
use crate::db::Database;
use crate::forecast::forecast_suggestion;
use crate::metrics::{compute_gig_score, score_inputs};
use crate::models::EarningsSummary;

/// Handle one inbound chat message from `from` and produce the reply
pub fn handle_message(db: &Database, from: &str, body: &str) -> String {
    let intent = classify(body);
    tracing::debug!(from, intent = intent.as_str(), "Classified inbound message");

    match intent {
        Intent::Greeting => greeting_reply(db, from),
        Intent::Forecast => forecast_reply(db, from),
        Intent::Credit => credit_reply(db, from),
        Intent::Goals => templates::goals_menu(),
        Intent::Emergency => templates::emergency_menu(),
        Intent::Tips => templates::tips(),
        Intent::MainMenu => templates::main_menu(),
        Intent::Fallback => templates::fallback(),
    }
}

/// Known senders get the returning welcome; unknown ones are registered
/// first
fn greeting_reply(db: &Database, from: &str) -> String {
    match db.find_user_by_phone(from) {
        Ok(Some(_)) => templates::welcome_returning(),
        Ok(None) => match db.create_user(from) {
            Ok(user) => {
                tracing::info!(user_id = user.id, "New user registered via chat");
                templates::welcome_new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to register new chat user");
                templates::trouble()
            }
        },
        Err(e) => {
            warn!(error = %e, "User lookup failed");
            templates::trouble()
        }
    }
}

fn forecast_reply(db: &Database, from: &str) -> String {
    let user = match db.find_user_by_phone(from) {
        Ok(Some(user)) => user,
        Ok(None) => return templates::no_earnings_data(),
        Err(e) => {
            warn!(error = %e, "User lookup failed");
            return templates::trouble();
        }
    };

    let amounts = match db.earnings_amounts(user.id) {
        Ok(amounts) => amounts,
        Err(e) => {
            warn!(error = %e, "Earnings lookup failed");
            return templates::trouble();
        }
    };

    let summary = match EarningsSummary::from_amounts(&amounts) {
        Some(summary) => summary,
        None => return templates::no_earnings_data(),
    };

    // A failed forecast lookup only costs the forecast line, not the
    // whole analysis
    let fragment = match db.latest_forecast(user.id) {
        Ok(latest) => forecast_suggestion(latest.as_ref()).message_fragment,
        Err(e) => {
            warn!(error = %e, "Forecast lookup failed");
            templates::forecast_unavailable_fragment()
        }
    };

    templates::earnings_analysis(&summary, &fragment)
}

fn credit_reply(db: &Database, from: &str) -> String {
    let amounts = match db.find_user_by_phone(from) {
        Ok(Some(user)) => match db.earnings_amounts(user.id) {
            Ok(amounts) => amounts,
            Err(e) => {
                warn!(error = %e, "Earnings lookup failed");
                return templates::credit_unavailable();
            }
        },
        // Unknown senders score as an empty history
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "User lookup failed");
            return templates::credit_unavailable();
        }
    };

    let inputs = score_inputs(&amounts);
    match compute_gig_score(inputs.month_count, inputs.volatility) {
        Ok(score) => templates::credit_report(score, inputs.month_count, inputs.volatility),
        Err(e) => {
            warn!(error = %e, "GigScore computation failed");
            templates::credit_unavailable()
        }
    }
}
