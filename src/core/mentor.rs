//! Mentor business logic - Roster lookups and creation.
//!
//! Provides functions for creating and retrieving mentors. The receipt
//! workflow uses these to validate that a payout target exists and to
//! denormalize the mentor's display name onto sessions and receipts.

use crate::{
    entities::{Mentor, mentor},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all mentors, ordered alphabetically by name.
///
/// Used to populate the mentor selection list in the admin receipt flow.
pub async fn get_all_mentors(db: &DatabaseConnection) -> Result<Vec<mentor::Model>> {
    Mentor::find()
        .order_by_asc(mentor::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a mentor by its unique ID, returning None if not found.
pub async fn get_mentor_by_id(
    db: &DatabaseConnection,
    mentor_id: i64,
) -> Result<Option<mentor::Model>> {
    Mentor::find_by_id(mentor_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new mentor with the specified parameters, performing input validation.
///
/// The name must be non-empty (whitespace is trimmed) and the hourly rate
/// must be a finite positive amount.
pub async fn create_mentor(
    db: &DatabaseConnection,
    name: String,
    email: String,
    hourly_rate: f64,
    pan: Option<String>,
    gst: Option<String>,
) -> Result<mentor::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Mentor name cannot be empty".to_string(),
        });
    }

    if !hourly_rate.is_finite() || hourly_rate <= 0.0 {
        return Err(Error::Config {
            message: format!("Mentor hourly rate must be positive, got {hourly_rate}"),
        });
    }

    let mentor = mentor::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        hourly_rate: Set(hourly_rate),
        pan: Set(pan),
        gst: Set(gst),
        ..Default::default()
    };

    let result = mentor.insert(db).await?;
    Ok(result)
}
