//! Application configuration.
//!
//! Loaded from a TOML file (default `leadtrack.toml`, overridable via the
//! `LEADTRACK_CONFIG` environment variable). Every key has a default so a
//! missing file is not fatal - the dashboard can run on defaults alone.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{fs, path::Path};

fn default_revenue_target() -> f64 {
    1_000_000.0
}

/// Top-level application configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Monthly revenue goal used for the target-progress metric, in rupees.
    #[serde(default = "default_revenue_target")]
    pub revenue_target: f64,

    /// Whether `assigned_to` scoping also applies to Admin users.
    ///
    /// The default (`false`) gives admins an unscoped view of every lead.
    /// Set to `true` to filter admin queries to their own leads like staff.
    #[serde(default)]
    pub scope_admin_views: bool,

    /// Database URL; the `DATABASE_URL` environment variable takes
    /// precedence over this value.
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            revenue_target: default_revenue_target(),
            scope_admin_views: false,
            database_url: None,
        }
    }
}

/// Loads configuration from the given TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    Ok(app_config)
}

/// Loads configuration from the path in `LEADTRACK_CONFIG` (default
/// `leadtrack.toml`), falling back to defaults when the file is absent.
pub fn load_or_default() -> AppConfig {
    let path =
        std::env::var("LEADTRACK_CONFIG").unwrap_or_else(|_| "leadtrack.toml".to_string());
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::info!("Using default configuration ({e})");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.revenue_target, 1_000_000.0);
        assert!(!config.scope_admin_views);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("revenue_target = 500000.0").unwrap();
        assert_eq!(config.revenue_target, 500_000.0);
        assert!(!config.scope_admin_views);
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            revenue_target = 250000.0
            scope_admin_views = true
            database_url = "sqlite://data/crm.sqlite"
            "#,
        )
        .unwrap();
        assert_eq!(config.revenue_target, 250_000.0);
        assert!(config.scope_admin_views);
        assert_eq!(
            config.database_url.as_deref(),
            Some("sqlite://data/crm.sqlite")
        );
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("definitely/not/a/real/path.toml");
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));
    }
}
