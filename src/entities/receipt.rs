//! Receipt entity - An auditable payout record for one mentor and date range.
//!
//! The computed breakdown is flattened onto the row (`base_amount` through
//! `final_amount`) and the included sessions are snapshotted into
//! `receipt_sessions`. Neither is ever recalculated after creation: a receipt
//! describes the payout as of its generation time, regardless of what happens
//! to the live session records afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    /// Unique identifier for the receipt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the mentor being paid out
    pub mentor_id: i64,
    /// Mentor display name, denormalized at generation time
    pub mentor_name: String,
    /// When the receipt was generated
    pub date_generated: DateTimeUtc,
    /// Inclusive start of the covered date range
    pub range_start: Date,
    /// Inclusive end of the covered date range
    pub range_end: Date,
    /// Sum of per-session amounts before any deduction
    pub base_amount: f64,
    /// Platform fee percentage applied (0-100)
    pub platform_fee_percentage: f64,
    /// Platform fee deducted from the base amount
    pub platform_fee: f64,
    /// Tax percentage applied to the post-fee amount (0-100)
    pub tax_percentage: f64,
    /// Tax deducted from the post-fee amount
    pub tax_amount: f64,
    /// Final payout: `base_amount - platform_fee - tax_amount`
    pub final_amount: f64,
    /// Payout status: `"pending"`, `"paid"`, or `"disputed"`
    pub status: String,
    /// Optional free-form notes entered at generation
    pub notes: Option<String>,
}

/// Defines relationships between Receipt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each receipt belongs to one mentor
    #[sea_orm(
        belongs_to = "super::mentor::Entity",
        from = "Column::MentorId",
        to = "super::mentor::Column::Id"
    )]
    Mentor,
    /// One receipt has many snapshotted session lines
    #[sea_orm(has_many = "super::receipt_session::Entity")]
    ReceiptSessions,
}

impl Related<super::mentor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mentor.def()
    }
}

impl Related<super::receipt_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReceiptSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
