/// Database configuration and connection management
pub mod database;

/// Seed fixtures and payout defaults from config.toml
pub mod seed;
