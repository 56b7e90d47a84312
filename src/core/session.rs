//! Session business logic - Creation and payout-eligibility queries.
//!
//! Sessions are immutable once logged: the scheduling flow creates them and
//! the payout workflow only ever reads them. The central query here is
//! [`find_eligible_sessions`], the contract the receipt builder consumes:
//! completed sessions for one mentor inside an inclusive date range, in a
//! stable total order.

use crate::{
    entities::{Session, session},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Session statuses accepted by [`create_session`]
pub const SESSION_STATUSES: [&str; 3] = ["completed", "pending", "cancelled"];

/// Session types accepted by [`create_session`]
pub const SESSION_TYPES: [&str; 3] = ["live", "evaluation", "review"];

/// Status a session must have to count towards a payout
pub const STATUS_COMPLETED: &str = "completed";

/// Returns all sessions eligible for payout: `status = "completed"`,
/// belonging to `mentor_id`, with `date` in `[start, end]` inclusive.
///
/// Results are ordered by date then id ascending so repeated queries over
/// unchanged data return the same sequence. An empty result is `Ok(vec![])`,
/// not an error; the caller decides whether that is a problem.
///
/// Callers must reject ranges where `start > end` before querying.
pub async fn find_eligible_sessions(
    db: &DatabaseConnection,
    mentor_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<session::Model>> {
    Session::find()
        .filter(session::Column::MentorId.eq(mentor_id))
        .filter(session::Column::Status.eq(STATUS_COMPLETED))
        .filter(session::Column::Date.gte(start))
        .filter(session::Column::Date.lte(end))
        .order_by_asc(session::Column::Date)
        .order_by_asc(session::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all sessions for a mentor regardless of status, newest first.
///
/// Backs the mentor's "my sessions" dashboard view.
pub async fn get_sessions_for_mentor(
    db: &DatabaseConnection,
    mentor_id: i64,
) -> Result<Vec<session::Model>> {
    Session::find()
        .filter(session::Column::MentorId.eq(mentor_id))
        .order_by_desc(session::Column::Date)
        .order_by_desc(session::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new session record, validating invariants and denormalizing
/// the mentor's display name.
///
/// # Errors
/// Fails with [`Error::MentorNotFound`] when the mentor does not exist,
/// [`Error::InvalidSession`] for a non-positive duration or rate, and
/// [`Error::InvalidEnumValue`] for an unknown status or session type.
#[allow(clippy::too_many_arguments)]
pub async fn create_session(
    db: &DatabaseConnection,
    mentor_id: i64,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    duration_minutes: i32,
    session_type: String,
    hourly_rate: f64,
    status: String,
    notes: Option<String>,
) -> Result<session::Model> {
    if duration_minutes <= 0 {
        return Err(Error::InvalidSession {
            message: format!("duration must be positive, got {duration_minutes}"),
        });
    }

    if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
        return Err(Error::InvalidSession {
            message: format!("hourly rate must be positive, got {hourly_rate}"),
        });
    }

    if !SESSION_STATUSES.contains(&status.as_str()) {
        return Err(Error::InvalidEnumValue {
            field: "session status",
            value: status,
            allowed: "completed, pending, cancelled",
        });
    }

    if !SESSION_TYPES.contains(&session_type.as_str()) {
        return Err(Error::InvalidEnumValue {
            field: "session type",
            value: session_type,
            allowed: "live, evaluation, review",
        });
    }

    let mentor = crate::core::mentor::get_mentor_by_id(db, mentor_id)
        .await?
        .ok_or(Error::MentorNotFound { id: mentor_id })?;

    let session = session::ActiveModel {
        mentor_id: Set(mentor_id),
        mentor_name: Set(mentor.name),
        date: Set(date),
        start_time: Set(start_time),
        end_time: Set(end_time),
        duration_minutes: Set(duration_minutes),
        session_type: Set(session_type),
        hourly_rate: Set(hourly_rate),
        status: Set(status),
        notes: Set(notes),
        ..Default::default()
    };

    let result = session.insert(db).await?;
    Ok(result)
}
