//! Unified error types for `MentorPay`.
//!
//! All fallible operations in the crate return [`Result`], built on a single
//! `thiserror` enum. Validation failures carry enough context to tell the
//! caller which field was rejected; database and I/O failures convert via
//! `#[from]`.

use chrono::NaiveDate;
use thiserror::Error;

/// Crate-wide error enum
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Database-layer failure from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config files, network binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A percentage input was non-finite or outside `[0, 100]`
    #[error("Invalid {field}: {value} (must be between 0 and 100)")]
    InvalidPercentage {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The payout calculator was given an empty session list
    #[error("Cannot compute a payout breakdown for an empty session list")]
    EmptySessionList,

    /// A date range where the start falls after the end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested range start
        start: NaiveDate,
        /// Requested range end
        end: NaiveDate,
    },

    /// Lookup of a mentor that does not exist
    #[error("Mentor not found: {id}")]
    MentorNotFound {
        /// The mentor id that failed to resolve
        id: i64,
    },

    /// No completed sessions for the mentor within the requested range
    #[error("No completed sessions for mentor {mentor_id} between {start} and {end}")]
    NoEligibleSessions {
        /// Mentor the query ran for
        mentor_id: i64,
        /// Requested range start
        start: NaiveDate,
        /// Requested range end
        end: NaiveDate,
    },

    /// A session record violated a data invariant (non-positive duration or
    /// rate). Not user-recoverable; indicates corrupted input data.
    #[error("Invalid session data: {message}")]
    InvalidSession {
        /// Description of the violated invariant
        message: String,
    },

    /// A status or session-type string outside the allowed set
    #[error("Invalid {field}: {value:?} (allowed: {allowed})")]
    InvalidEnumValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: String,
        /// Comma-separated allowed values
        allowed: &'static str,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
