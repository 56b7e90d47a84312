//! Database configuration module for `MentorPay`.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.
//! The default database is in-process memory; records live exactly as long
//! as the service.

use crate::entities::{Mentor, Receipt, ReceiptSession, Session};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default database: in-process memory, matching the platform's
/// no-persistence model. Set `DATABASE_URL` to point at a file instead.
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to an in-memory `SQLite` database.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database described by
/// [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all tables from the entity definitions.
///
/// Creates tables for mentors, sessions, receipts, and receipt session
/// snapshots.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mentor_table = schema.create_table_from_entity(Mentor);
    let session_table = schema.create_table_from_entity(Session);
    let receipt_table = schema.create_table_from_entity(Receipt);
    let receipt_session_table = schema.create_table_from_entity(ReceiptSession);

    db.execute(builder.build(&mentor_table)).await?;
    db.execute(builder.build(&session_table)).await?;
    db.execute(builder.build(&receipt_table)).await?;
    db.execute(builder.build(&receipt_session_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        mentor::Model as MentorModel, receipt::Model as ReceiptModel,
        receipt_session::Model as ReceiptSessionModel, session::Model as SessionModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Each table exists and is queryable
        let _: Vec<MentorModel> = Mentor::find().limit(1).all(&db).await?;
        let _: Vec<SessionModel> = Session::find().limit(1).all(&db).await?;
        let _: Vec<ReceiptModel> = Receipt::find().limit(1).all(&db).await?;
        let _: Vec<ReceiptSessionModel> = ReceiptSession::find().limit(1).all(&db).await?;

        Ok(())
    }
}
