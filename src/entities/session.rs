//! Session entity - Represents one time-boxed mentoring engagement.
//!
//! Each session has a `mentor_id`, calendar date, start/end times, duration
//! in minutes, type (`"live"`, `"evaluation"`, `"review"`), hourly rate, and
//! status (`"completed"`, `"pending"`, `"cancelled"`). Only completed
//! sessions are eligible for payout calculation. `mentor_name` is a
//! denormalized display cache copied from the mentor at creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Session database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Unique identifier for the session
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the mentor who held the session
    pub mentor_id: i64,
    /// Mentor display name, denormalized at creation time
    pub mentor_name: String,
    /// Calendar date the session took place on
    pub date: Date,
    /// Local time-of-day the session started
    pub start_time: Time,
    /// Local time-of-day the session ended
    pub end_time: Time,
    /// Session length in minutes (always > 0)
    pub duration_minutes: i32,
    /// Kind of engagement: `"live"`, `"evaluation"`, or `"review"`
    pub session_type: String,
    /// Hourly rate in INR agreed for this session
    pub hourly_rate: f64,
    /// Lifecycle status: `"completed"`, `"pending"`, or `"cancelled"`
    pub status: String,
    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Defines relationships between Session and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each session belongs to one mentor
    #[sea_orm(
        belongs_to = "super::mentor::Entity",
        from = "Column::MentorId",
        to = "super::mentor::Column::Id"
    )]
    Mentor,
}

impl Related<super::mentor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mentor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
