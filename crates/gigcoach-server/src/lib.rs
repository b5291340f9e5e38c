//! GigCoach Web Server
//!
//! Axum-based REST API plus the inbound chat webhook.
//!
//! Authentication is handled upstream (API gateway / messaging
//! provider); this service validates inputs, keeps CORS restrictive by
//! default, and sanitizes error responses. Each request is handled
//! independently: no locking, retries, or background work. Timeout
//! policy belongs to the calling transport.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use gigcoach_core::config::TaxConfig;
use gigcoach_core::db::Database;

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    /// Tax schedule used by the estimate endpoint
    pub tax: TaxConfig,
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    create_router_with_tax(db, config, TaxConfig::default())
}

/// Create the application router with an explicit tax schedule
pub fn create_router_with_tax(db: Database, config: ServerConfig, tax: TaxConfig) -> Router {
    let state = Arc::new(AppState { db, tax });

    let api_routes = Router::new()
        // Earnings
        .route("/earnings", post(handlers::add_earnings))
        .route("/earnings/:phone_number", get(handlers::list_earnings))
        // Forecast
        .route("/forecast/:phone_number", get(handlers::get_forecast_suggestion))
        .route(
            "/latest-forecast/:phone_number",
            get(handlers::get_latest_forecast),
        )
        // Expenses
        .route("/expenses", post(handlers::add_expense))
        .route("/expenses/:phone_number", get(handlers::list_expenses))
        // Goals
        .route("/goals", post(handlers::create_goal))
        .route(
            "/goals/:phone_number",
            get(handlers::list_goals)
                .put(handlers::update_goal)
                .delete(handlers::delete_goal),
        )
        // Loans
        .route("/user-loans", post(handlers::add_loan))
        .route("/user-loans/:phone_number", get(handlers::list_loans))
        .route("/loans/:phone_number", get(handlers::loan_options))
        // Metrics
        .route(
            "/dashboard-stats/:phone_number",
            get(handlers::dashboard_stats),
        )
        .route("/tax-estimate/:phone_number", get(handlers::tax_estimate))
        .route("/insights/:phone_number", get(handlers::get_insights));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(handlers::banner))
        .route("/webhook", post(handlers::webhook))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(db, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let tax = TaxConfig::load()?;
    let app = create_router_with_tax(db, config, tax);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<gigcoach_core::Error> for AppError {
    fn from(err: gigcoach_core::Error) -> Self {
        use gigcoach_core::Error;
        match err {
            Error::NotFound(msg) => Self::not_found(&msg),
            Error::InvalidInput(msg) => Self::bad_request(&msg),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                // Return generic message to client
                message: "An internal error occurred".to_string(),
                // Keep full error for logging
                internal: Some(other.into()),
            },
        }
    }
}
