//! Receipt business logic - Preview, generation, and store queries.
//!
//! The receipt workflow has two halves that share the same computation: a
//! preview (query eligible sessions, compute the breakdown, persist nothing)
//! and generation (the same computation followed by an atomic append to the
//! receipt store). A generated receipt snapshots both the session list and
//! the breakdown; neither is recomputed afterwards.

use crate::{
    core::payout::{self, PayoutBreakdown},
    entities::{Receipt, ReceiptSession, receipt, receipt_session, session},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;

/// Payout statuses a receipt can carry
pub const RECEIPT_STATUSES: [&str; 3] = ["pending", "paid", "disputed"];

/// Initial status of every freshly generated receipt
pub const STATUS_PENDING: &str = "pending";

/// A receipt together with its snapshotted session lines and breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptDetails {
    /// The stored receipt row
    pub receipt: receipt::Model,
    /// Session lines frozen at generation time
    pub sessions: Vec<receipt_session::Model>,
    /// The breakdown as computed at generation time
    pub breakdown: PayoutBreakdown,
}

/// The result of a payout preview: the sessions that would be included and
/// the breakdown they produce. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PayoutPreview {
    /// Eligible sessions in the requested range
    pub sessions: Vec<session::Model>,
    /// Breakdown computed from those sessions
    pub breakdown: PayoutBreakdown,
}

/// Reassembles the breakdown snapshot stored flat on a receipt row.
fn breakdown_of(receipt: &receipt::Model) -> PayoutBreakdown {
    PayoutBreakdown {
        base_amount: receipt.base_amount,
        platform_fee_percentage: receipt.platform_fee_percentage,
        platform_fee: receipt.platform_fee,
        tax_percentage: receipt.tax_percentage,
        tax_amount: receipt.tax_amount,
        final_amount: receipt.final_amount,
    }
}

/// Computes a payout preview for a mentor and date range without creating a
/// receipt.
///
/// This is the "generate preview" step of the admin flow: identical
/// validation and computation to [`generate_receipt`], minus persistence.
///
/// # Errors
/// [`Error::InvalidDateRange`] when `start > end` (checked before any
/// query), [`Error::MentorNotFound`] for an unknown mentor,
/// [`Error::NoEligibleSessions`] when no completed sessions fall in range,
/// and the calculator's validation errors for bad percentages.
pub async fn preview_payout(
    db: &DatabaseConnection,
    mentor_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    platform_fee_percentage: f64,
    tax_percentage: f64,
) -> Result<PayoutPreview> {
    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }

    crate::core::mentor::get_mentor_by_id(db, mentor_id)
        .await?
        .ok_or(Error::MentorNotFound { id: mentor_id })?;

    let sessions = crate::core::session::find_eligible_sessions(db, mentor_id, start, end).await?;
    if sessions.is_empty() {
        return Err(Error::NoEligibleSessions {
            mentor_id,
            start,
            end,
        });
    }

    let breakdown = payout::compute_breakdown(&sessions, platform_fee_percentage, tax_percentage)?;

    Ok(PayoutPreview {
        sessions,
        breakdown,
    })
}

/// Generates a payout receipt for a mentor over an inclusive date range and
/// appends it to the receipt store.
///
/// The receipt row and its session snapshot lines are inserted in a single
/// database transaction, so a failure part-way through leaves the store
/// unchanged. The receipt starts in `"pending"` status with
/// `date_generated` set to the current UTC time.
///
/// # Errors
/// Same taxonomy as [`preview_payout`]; on any error no receipt is created.
pub async fn generate_receipt(
    db: &DatabaseConnection,
    mentor_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    platform_fee_percentage: f64,
    tax_percentage: f64,
    notes: Option<String>,
) -> Result<ReceiptDetails> {
    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }

    let mentor = crate::core::mentor::get_mentor_by_id(db, mentor_id)
        .await?
        .ok_or(Error::MentorNotFound { id: mentor_id })?;

    let sessions = crate::core::session::find_eligible_sessions(db, mentor_id, start, end).await?;
    if sessions.is_empty() {
        return Err(Error::NoEligibleSessions {
            mentor_id,
            start,
            end,
        });
    }

    let breakdown = payout::compute_breakdown(&sessions, platform_fee_percentage, tax_percentage)?;

    let notes = notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    // Receipt row and snapshot lines commit together or not at all
    let txn = db.begin().await?;

    let receipt_model = receipt::ActiveModel {
        mentor_id: Set(mentor_id),
        mentor_name: Set(mentor.name),
        date_generated: Set(chrono::Utc::now()),
        range_start: Set(start),
        range_end: Set(end),
        base_amount: Set(breakdown.base_amount),
        platform_fee_percentage: Set(breakdown.platform_fee_percentage),
        platform_fee: Set(breakdown.platform_fee),
        tax_percentage: Set(breakdown.tax_percentage),
        tax_amount: Set(breakdown.tax_amount),
        final_amount: Set(breakdown.final_amount),
        status: Set(STATUS_PENDING.to_string()),
        notes: Set(notes),
        ..Default::default()
    };
    let stored = receipt_model.insert(&txn).await?;

    let mut lines = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let line = receipt_session::ActiveModel {
            receipt_id: Set(stored.id),
            session_id: Set(session.id),
            date: Set(session.date),
            start_time: Set(session.start_time),
            end_time: Set(session.end_time),
            duration_minutes: Set(session.duration_minutes),
            session_type: Set(session.session_type.clone()),
            hourly_rate: Set(session.hourly_rate),
            ..Default::default()
        };
        lines.push(line.insert(&txn).await?);
    }

    txn.commit().await?;

    tracing::info!(
        receipt_id = stored.id,
        mentor_id,
        sessions = lines.len(),
        final_amount = breakdown.final_amount,
        "receipt generated"
    );

    Ok(ReceiptDetails {
        receipt: stored,
        sessions: lines,
        breakdown,
    })
}

/// Queries the receipt store, optionally filtering by mentor and status.
///
/// Results preserve the store's newest-first convention (`date_generated`
/// descending, id descending as tiebreak).
///
/// # Errors
/// An unknown status filter fails with [`Error::InvalidEnumValue`] rather
/// than silently matching nothing.
pub async fn query_receipts(
    db: &DatabaseConnection,
    mentor_id: Option<i64>,
    status: Option<&str>,
) -> Result<Vec<receipt::Model>> {
    if let Some(status) = status {
        if !RECEIPT_STATUSES.contains(&status) {
            return Err(Error::InvalidEnumValue {
                field: "receipt status",
                value: status.to_string(),
                allowed: "pending, paid, disputed",
            });
        }
    }

    let mut query = Receipt::find()
        .order_by_desc(receipt::Column::DateGenerated)
        .order_by_desc(receipt::Column::Id);

    if let Some(mentor_id) = mentor_id {
        query = query.filter(receipt::Column::MentorId.eq(mentor_id));
    }
    if let Some(status) = status {
        query = query.filter(receipt::Column::Status.eq(status));
    }

    query.all(db).await.map_err(Into::into)
}

/// Loads a receipt with its snapshot lines, returning None if it does not
/// exist.
pub async fn get_receipt_details(
    db: &DatabaseConnection,
    receipt_id: i64,
) -> Result<Option<ReceiptDetails>> {
    let Some(stored) = Receipt::find_by_id(receipt_id).one(db).await? else {
        return Ok(None);
    };

    let sessions = ReceiptSession::find()
        .filter(receipt_session::Column::ReceiptId.eq(receipt_id))
        .order_by_asc(receipt_session::Column::Date)
        .order_by_asc(receipt_session::Column::Id)
        .all(db)
        .await?;

    let breakdown = breakdown_of(&stored);

    Ok(Some(ReceiptDetails {
        receipt: stored,
        sessions,
        breakdown,
    }))
}
