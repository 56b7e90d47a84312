//! `MentorPay` service entrypoint.
//!
//! Startup order: tracing, .env, seed configuration, database, fixtures,
//! HTTP server.

use mentorpay::api::{self, AppState};
use mentorpay::config;
use mentorpay::errors::Result;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Load seed fixtures and payout defaults
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let seed_config = config::seed::load_config(&config_path)?;
    info!(path = %config_path, "loaded configuration");

    // 4. Initialize database and schema
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("database initialized");

    // 5. Seed fixture mentors and sessions (skipped if already present)
    config::seed::seed_database(&db, &seed_config).await?;

    // 6. Serve the API
    let state = Arc::new(AppState {
        db,
        defaults: seed_config.payout,
    });
    let addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
