//! Application settings loaded from config.toml
//!
//! The `[pricing]` table overrides the default pricing parameters offered to
//! the user, and `[dashboard]` controls how many entries the charts show.
//! Every key is optional; missing keys fall back to their defaults.

use crate::core::pricing::PricingParams;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default pricing parameters
    pub pricing: PricingParams,
    /// Dashboard display settings
    pub dashboard: DashboardSettings,
}

/// Dashboard display settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Maximum number of recipes and expenses shown in charts
    pub chart_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { chart_limit: 5 }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The pricing defaults contain negative or non-finite values
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_config(&contents)
}

/// Parses settings from TOML text and validates the pricing defaults.
pub fn parse_config(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    settings.pricing.validate()?;
    Ok(settings)
}

/// Loads settings from ./config.toml, using defaults when the file is absent.
pub fn load_default_config() -> Result<Settings> {
    if !Path::new(DEFAULT_CONFIG_PATH).exists() {
        tracing::info!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        return Ok(Settings::default());
    }
    load_config(DEFAULT_CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r"
            [pricing]
            preparation_minutes = 45.0
            taxes_percent = 6.0
            commissions_percent = 12.0
            others_percent = 1.5
            desired_profit_percent = 40.0

            [dashboard]
            chart_limit = 8
        ";

        let settings = parse_config(toml_str).unwrap();
        assert_eq!(settings.pricing.preparation_minutes, 45.0);
        assert_eq!(settings.pricing.taxes_percent, 6.0);
        assert_eq!(settings.pricing.commissions_percent, 12.0);
        assert_eq!(settings.pricing.others_percent, 1.5);
        assert_eq!(settings.pricing.desired_profit_percent, 40.0);
        assert_eq!(settings.dashboard.chart_limit, 8);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let settings = parse_config("[pricing]\ntaxes_percent = 10.0\n").unwrap();
        assert_eq!(settings.pricing.taxes_percent, 10.0);
        assert_eq!(settings.pricing.preparation_minutes, 30.0);
        assert_eq!(settings.pricing.desired_profit_percent, 30.0);
        assert_eq!(settings.dashboard.chart_limit, 5);
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_rejects_negative_defaults() {
        let result = parse_config("[pricing]\nothers_percent = -3.0\n");
        assert!(matches!(
            result,
            Err(Error::InvalidInput {
                field: "others_percent",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let result = parse_config("[pricing\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
