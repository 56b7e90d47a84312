//! Seed fixture loading from config.toml
//!
//! The original platform shipped with randomly generated demo sessions; this
//! module replaces that with explicit fixtures so every run (and every test)
//! sees the same data. config.toml also carries the default platform fee and
//! tax percentages offered to the admin when generating a receipt.

use crate::errors::{Error, Result};
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Default percentages applied when a request omits them
    pub payout: PayoutDefaults,
    /// Mentors (with their sessions) to seed on first run
    #[serde(default)]
    pub mentors: Vec<MentorSeed>,
}

/// Default fee and tax percentages for the receipt workflow
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct PayoutDefaults {
    /// Platform fee percentage in `[0, 100]`
    pub platform_fee_percentage: f64,
    /// Tax percentage in `[0, 100]`
    pub tax_percentage: f64,
}

/// Seed definition for a single mentor
#[derive(Debug, Deserialize, Clone)]
pub struct MentorSeed {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Hourly rate in INR
    pub hourly_rate: f64,
    /// Optional PAN tax identifier
    pub pan: Option<String>,
    /// Optional GST identifier
    pub gst: Option<String>,
    /// Sessions to log for this mentor
    #[serde(default)]
    pub sessions: Vec<SessionSeed>,
}

/// Seed definition for a single session
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSeed {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Start time of day, `HH:MM`
    pub start_time: String,
    /// Length in minutes
    pub duration_minutes: i32,
    /// `"live"`, `"evaluation"`, or `"review"`
    pub session_type: String,
    /// `"completed"`, `"pending"`, or `"cancelled"`
    pub status: String,
    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| Error::Config {
        message: format!("Invalid seed date {value:?}: {e}"),
    })
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| Error::Config {
        message: format!("Invalid seed time {value:?}: {e}"),
    })
}

/// Seeds mentors and sessions from the config, skipping entirely if any
/// mentors already exist.
///
/// Session end times are derived from start time plus duration. The number
/// of seeded mentors and sessions is logged.
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<()> {
    let existing = crate::entities::Mentor::find().count(db).await?;
    if existing > 0 {
        tracing::info!(mentors = existing, "database already seeded, skipping");
        return Ok(());
    }

    let mut session_count = 0usize;
    for mentor_seed in &config.mentors {
        let mentor = crate::core::mentor::create_mentor(
            db,
            mentor_seed.name.clone(),
            mentor_seed.email.clone(),
            mentor_seed.hourly_rate,
            mentor_seed.pan.clone(),
            mentor_seed.gst.clone(),
        )
        .await?;

        for session_seed in &mentor_seed.sessions {
            let date = parse_date(&session_seed.date)?;
            let start_time = parse_time(&session_seed.start_time)?;
            let end_time = start_time + Duration::minutes(i64::from(session_seed.duration_minutes));

            crate::core::session::create_session(
                db,
                mentor.id,
                date,
                start_time,
                end_time,
                session_seed.duration_minutes,
                session_seed.session_type.clone(),
                mentor_seed.hourly_rate,
                session_seed.status.clone(),
                session_seed.notes.clone(),
            )
            .await?;
            session_count += 1;
        }
    }

    tracing::info!(
        mentors = config.mentors.len(),
        sessions = session_count,
        "seeded database from config"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    const SAMPLE: &str = r#"
        [payout]
        platform_fee_percentage = 10.0
        tax_percentage = 18.0

        [[mentors]]
        name = "Priya Sharma"
        email = "priya.sharma@example.com"
        hourly_rate = 4000.0
        pan = "ABCDE1234F"

        [[mentors.sessions]]
        date = "2025-08-04"
        start_time = "10:00"
        duration_minutes = 60
        session_type = "live"
        status = "completed"

        [[mentors.sessions]]
        date = "2025-08-06"
        start_time = "15:30"
        duration_minutes = 45
        session_type = "review"
        status = "pending"

        [[mentors]]
        name = "Rahul Kumar"
        email = "rahul.kumar@example.com"
        hourly_rate = 3500.0
    "#;

    #[test]
    fn test_parse_seed_config() {
        let config: Config = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.payout.platform_fee_percentage, 10.0);
        assert_eq!(config.payout.tax_percentage, 18.0);
        assert_eq!(config.mentors.len(), 2);
        assert_eq!(config.mentors[0].name, "Priya Sharma");
        assert_eq!(config.mentors[0].sessions.len(), 2);
        assert_eq!(config.mentors[0].sessions[1].duration_minutes, 45);
        assert!(config.mentors[1].sessions.is_empty());
    }

    #[tokio::test]
    async fn test_seed_database_creates_fixtures() -> Result<()> {
        let db = setup_test_db().await?;
        let config: Config = toml::from_str(SAMPLE).unwrap();

        seed_database(&db, &config).await?;

        let mentors = crate::core::mentor::get_all_mentors(&db).await?;
        assert_eq!(mentors.len(), 2);

        let priya = mentors
            .iter()
            .find(|m| m.name == "Priya Sharma")
            .unwrap();
        let sessions = crate::core::session::get_sessions_for_mentor(&db, priya.id).await?;
        assert_eq!(sessions.len(), 2);

        // End time derives from start + duration
        let review = sessions
            .iter()
            .find(|s| s.session_type == "review")
            .unwrap();
        assert_eq!(
            review.end_time,
            NaiveTime::from_hms_opt(16, 15, 0).unwrap()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_database_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config: Config = toml::from_str(SAMPLE).unwrap();

        seed_database(&db, &config).await?;
        seed_database(&db, &config).await?;

        let mentors = crate::core::mentor::get_all_mentors(&db).await?;
        assert_eq!(mentors.len(), 2);

        Ok(())
    }

    #[test]
    fn test_seed_rejects_bad_date() {
        let result = parse_date("04-08-2025");
        assert!(matches!(result.unwrap_err(), Error::Config { .. }));
    }
}
