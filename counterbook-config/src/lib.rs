//! Typed settings for the dashboard: opening balance, reference date and
//! advisor connection details, layered from a TOML file and environment.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level configuration. Every field has a sensible default; a missing
/// file or empty environment yields a working demo setup.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Fixed opening cash balance used by the running-balance simulation.
    pub opening_balance: Decimal,
    /// Reference date for "daily" aggregates. Unset means today (UTC).
    pub reference_date: Option<NaiveDate>,
    pub insight: InsightSettings,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InsightSettings {
    /// Advisory is disabled when no key is configured.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            opening_balance: Decimal::new(11_250_000, 2),
            reference_date: None,
            insight: InsightSettings::default(),
        }
    }
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".into(),
            endpoint: "https://generativelanguage.googleapis.com".into(),
            timeout_secs: 10,
        }
    }
}

impl DashboardConfig {
    /// Load settings, layering `COUNTERBOOK_*` environment variables over
    /// an optional TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("counterbook").required(false)),
        };
        let settings = builder
            .add_source(Environment::with_prefix("COUNTERBOOK").separator("__"))
            .build()
            .context("failed to read configuration sources")?;
        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// The reference date to compute daily aggregates against.
    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl InsightSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;

    #[test]
    fn defaults_describe_the_demo_setup() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.opening_balance, dec!(112500.00));
        assert_eq!(cfg.reference_date, None);
        assert!(cfg.insight.api_key.is_none());
        assert_eq!(cfg.insight.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn loads_overrides_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counterbook.toml");
        fs::write(
            &path,
            r#"
opening_balance = "99000.50"
reference_date = "2024-10-26"

[insight]
api_key = "test-key"
timeout_secs = 3
"#,
        )
        .unwrap();

        let cfg = DashboardConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.opening_balance, dec!(99000.50));
        assert_eq!(
            cfg.reference_date,
            Some(NaiveDate::from_ymd_opt(2024, 10, 26).unwrap())
        );
        assert_eq!(cfg.insight.api_key.as_deref(), Some("test-key"));
        assert_eq!(cfg.insight.timeout(), Duration::from_secs(3));
        // Unset fields keep their defaults.
        assert_eq!(cfg.insight.model, "gemini-3-flash-preview");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(DashboardConfig::load(Some(&path)).is_err());
    }
}
