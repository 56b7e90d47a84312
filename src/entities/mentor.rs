//! Mentor entity - Represents a paid instructor on the platform.
//!
//! Each mentor has a name, contact email, default hourly rate, and optional
//! Indian tax identifiers (PAN/GST) kept as opaque strings for receipt
//! display.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mentor database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mentors")]
pub struct Model {
    /// Unique identifier for the mentor
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the mentor
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Default hourly rate in the platform's base currency (INR)
    pub hourly_rate: f64,
    /// Permanent Account Number, if registered
    pub pan: Option<String>,
    /// GST identification number, if registered
    pub gst: Option<String>,
}

/// Defines relationships between Mentor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One mentor has many sessions
    #[sea_orm(has_many = "super::session::Entity")]
    Sessions,
    /// One mentor has many receipts
    #[sea_orm(has_many = "super::receipt::Entity")]
    Receipts,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl Related<super::receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receipts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
