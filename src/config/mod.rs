/// Application configuration loading from leadtrack.toml
pub mod app;

/// Database configuration and connection management
pub mod database;

pub use app::{AppConfig, load_config};
