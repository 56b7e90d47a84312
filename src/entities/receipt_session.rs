//! Receipt session line - A frozen copy of a session included in a receipt.
//!
//! Rows are written once when the receipt is generated and never touched
//! again. They deliberately duplicate the session fields instead of
//! referencing the live `sessions` row, so later edits or deletions of the
//! source session cannot change what a receipt says was paid for.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Snapshotted session line on a receipt
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipt_sessions")]
pub struct Model {
    /// Unique identifier for the snapshot line
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Receipt this line belongs to
    pub receipt_id: i64,
    /// ID of the source session at generation time
    pub session_id: i64,
    /// Date of the snapshotted session
    pub date: Date,
    /// Start time of the snapshotted session
    pub start_time: Time,
    /// End time of the snapshotted session
    pub end_time: Time,
    /// Duration in minutes
    pub duration_minutes: i32,
    /// Session type at generation time
    pub session_type: String,
    /// Hourly rate the amount was computed from
    pub hourly_rate: f64,
}

/// Defines relationships between `ReceiptSession` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each snapshot line belongs to one receipt
    #[sea_orm(
        belongs_to = "super::receipt::Entity",
        from = "Column::ReceiptId",
        to = "super::receipt::Column::Id"
    )]
    Receipt,
}

impl Related<super::receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receipt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
