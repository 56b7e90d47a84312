//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod mentor;
pub mod receipt;
pub mod receipt_session;
pub mod session;

// Re-export specific types to avoid conflicts
pub use mentor::{Column as MentorColumn, Entity as Mentor, Model as MentorModel};
pub use receipt::{Column as ReceiptColumn, Entity as Receipt, Model as ReceiptModel};
pub use receipt_session::{
    Column as ReceiptSessionColumn, Entity as ReceiptSession, Model as ReceiptSessionModel,
};
pub use session::{Column as SessionColumn, Entity as Session, Model as SessionModel};
