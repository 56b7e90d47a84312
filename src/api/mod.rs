//! HTTP surface: the receipt workflow exposed as a small REST API.
//!
//! Routes:
//! - `GET  /api/health` - liveness probe
//! - `GET  /api/mentors` - mentor roster for the admin receipt form
//! - `POST /api/receipts/preview` - compute a breakdown without persisting
//! - `POST /api/receipts` - generate and store a receipt
//! - `GET  /api/receipts` - list receipts, filterable by mentor and status
//! - `GET  /api/receipts/{id}` - one receipt with its session snapshot

/// Domain-error to status-code mapping
pub mod error;
/// Mentor roster handler
pub mod mentors;
/// Receipt preview/generate/list/detail handlers
pub mod receipts;

use crate::config::seed::PayoutDefaults;
use axum::routing::{get, post};
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;

/// Shared state handed to every handler
pub struct AppState {
    /// Database connection backing the session repository and receipt store
    pub db: DatabaseConnection,
    /// Fee/tax percentages applied when a request omits them
    pub defaults: PayoutDefaults,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/mentors", get(mentors::list_mentors))
        .route("/api/receipts/preview", post(receipts::preview_receipt))
        .route(
            "/api/receipts",
            post(receipts::generate_receipt).get(receipts::list_receipts),
        )
        .route("/api/receipts/{id}", get(receipts::get_receipt))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
