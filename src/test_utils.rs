//! Shared test utilities for `MentorPay`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{mentor, session},
    entities,
    errors::Result,
};
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test mentor with sensible defaults.
///
/// # Defaults
/// * `email`: derived from the name
/// * `hourly_rate`: 4000.0
/// * `pan`/`gst`: None
pub async fn create_test_mentor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::mentor::Model> {
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    );
    mentor::create_mentor(db, name.to_string(), email, 4000.0, None, None).await
}

/// Creates a test session with sensible defaults.
///
/// # Defaults
/// * 60 minutes from 10:00, `"live"`, `"completed"`, rate 4000.0
pub async fn create_test_session(
    db: &DatabaseConnection,
    mentor_id: i64,
    date: NaiveDate,
) -> Result<entities::session::Model> {
    create_test_session_with(db, mentor_id, date, 60, "completed").await
}

/// Creates a test session with a custom duration and status.
/// Use this to exercise eligibility filtering and validation paths.
pub async fn create_test_session_with(
    db: &DatabaseConnection,
    mentor_id: i64,
    date: NaiveDate,
    duration_minutes: i32,
    status: &str,
) -> Result<entities::session::Model> {
    let start_time = NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default();
    let end_time = start_time + Duration::minutes(i64::from(duration_minutes));

    session::create_session(
        db,
        mentor_id,
        date,
        start_time,
        end_time,
        duration_minutes,
        "live".to_string(),
        4000.0,
        status.to_string(),
        None,
    )
    .await
}

/// Sets up a complete test environment with a mentor.
/// Returns (db, mentor) for common test scenarios.
pub async fn setup_with_mentor() -> Result<(DatabaseConnection, entities::mentor::Model)> {
    let db = setup_test_db().await?;
    let mentor = create_test_mentor(&db, "Priya Sharma").await?;
    Ok((db, mentor))
}
