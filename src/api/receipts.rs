//! Receipt endpoints: preview, generate, list, and detail.
//!
//! Preview and generate share one request shape; omitted fee/tax
//! percentages fall back to the configured defaults, mirroring the admin
//! form's pre-filled values.

use crate::api::{AppState, error::ApiError};
use crate::core::receipt::{PayoutPreview, ReceiptDetails};
use crate::entities::receipt;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/receipts` and `POST /api/receipts/preview`
#[derive(Debug, Deserialize)]
pub struct GenerateReceiptRequest {
    /// Mentor to pay out
    pub mentor_id: i64,
    /// Inclusive range start (ISO-8601 date)
    pub start_date: NaiveDate,
    /// Inclusive range end (ISO-8601 date)
    pub end_date: NaiveDate,
    /// Fee percentage; configured default when omitted
    pub platform_fee_percentage: Option<f64>,
    /// Tax percentage; configured default when omitted
    pub tax_percentage: Option<f64>,
    /// Optional notes stored on the receipt (ignored for previews)
    pub notes: Option<String>,
}

/// Query string of `GET /api/receipts`
#[derive(Debug, Deserialize)]
pub struct ReceiptListQuery {
    /// Restrict to one mentor
    pub mentor_id: Option<i64>,
    /// Restrict to one payout status
    pub status: Option<String>,
}

/// `POST /api/receipts/preview` - compute the breakdown, persist nothing.
pub async fn preview_receipt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateReceiptRequest>,
) -> Result<Json<PayoutPreview>, ApiError> {
    let fee = req
        .platform_fee_percentage
        .unwrap_or(state.defaults.platform_fee_percentage);
    let tax = req.tax_percentage.unwrap_or(state.defaults.tax_percentage);

    let preview = crate::core::receipt::preview_payout(
        &state.db,
        req.mentor_id,
        req.start_date,
        req.end_date,
        fee,
        tax,
    )
    .await?;

    Ok(Json(preview))
}

/// `POST /api/receipts` - generate a receipt and append it to the store.
pub async fn generate_receipt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateReceiptRequest>,
) -> Result<(StatusCode, Json<ReceiptDetails>), ApiError> {
    let fee = req
        .platform_fee_percentage
        .unwrap_or(state.defaults.platform_fee_percentage);
    let tax = req.tax_percentage.unwrap_or(state.defaults.tax_percentage);

    let details = crate::core::receipt::generate_receipt(
        &state.db,
        req.mentor_id,
        req.start_date,
        req.end_date,
        fee,
        tax,
        req.notes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(details)))
}

/// `GET /api/receipts` - newest-first listing with optional filters.
pub async fn list_receipts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReceiptListQuery>,
) -> Result<Json<Vec<receipt::Model>>, ApiError> {
    let receipts = crate::core::receipt::query_receipts(
        &state.db,
        query.mentor_id,
        query.status.as_deref(),
    )
    .await?;
    Ok(Json(receipts))
}

/// `GET /api/receipts/{id}` - one receipt with its snapshot lines.
pub async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ReceiptDetails>, ApiError> {
    crate::core::receipt::get_receipt_details(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Receipt not found: {id}")))
}
