/// Database configuration and connection management
pub mod database;

/// Pricing defaults and dashboard settings loaded from config.toml
pub mod settings;
