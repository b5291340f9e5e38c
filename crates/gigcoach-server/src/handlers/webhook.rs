//! Inbound chat webhook
//!
//! The messaging provider posts form-encoded `From`/`Body` fields and
//! expects a plain-text reply in the response body. The dialogue router
//! never errors; any data-access failure has already degraded to an
//! apologetic message by the time we get a reply back.

use std::sync::Arc;

use axum::{extract::State, Form};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use gigcoach_core::chat::handle_message;

/// Provider webhook payload (capitalized field names are the provider's)
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Body")]
    pub body: String,
}

/// GET / - Plain-text liveness banner
pub async fn banner() -> &'static str {
    "GigCoach server is running! 🚀"
}

/// POST /webhook - One inbound message, one plain-text reply
pub async fn webhook(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<WebhookPayload>,
) -> String {
    info!(from = %payload.from, "Inbound chat message");
    handle_message(&state.db, &payload.from, &payload.body)
}
