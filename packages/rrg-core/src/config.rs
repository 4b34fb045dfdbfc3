//! Engine configuration and its on-disk TOML form.

use crate::indicators::MinPeriods;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimum aligned samples an instrument needs per timeframe.
pub const DEFAULT_MIN_SAMPLES: usize = 30;

/// RS values beyond this magnitude are reported as undefined.
pub const DEFAULT_MAX_ABS_VALUE: Option<f64> = Some(1000.0);

/// Environment variable naming an explicit config file.
pub const CONFIG_FILE_ENV: &str = "RRG_CONFIG_FILE";

/// What the table builder does with instruments lacking a complete result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPolicy {
    /// Leave them out of the rows (they are still listed as excluded)
    #[default]
    Omit,
    /// Keep them as rows classified `No Data` where values are missing
    MarkNoData,
}

/// Tunable policies of the rotation engine.
///
/// The moving-average windows of the RS formulas are fixed and not part of
/// the configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RrgConfig {
    /// Minimum aligned samples per instrument and timeframe
    pub min_samples: usize,
    /// Warm-up policy for every moving average
    pub min_periods: MinPeriods,
    /// Outlier guard; `None` disables it
    pub max_abs_value: Option<f64>,
    /// Handling of instruments without a complete result
    pub exclusion: ExclusionPolicy,
}

impl Default for RrgConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            min_periods: MinPeriods::default(),
            max_abs_value: DEFAULT_MAX_ABS_VALUE,
            exclusion: ExclusionPolicy::default(),
        }
    }
}

impl RrgConfig {
    /// Load from the default path, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Get the default config file path.
    ///
    /// Default path: `<config dir>/rrg/config.toml`
    /// Can be overridden with `RRG_CONFIG_FILE` environment variable.
    pub fn default_path() -> PathBuf {
        override_path(env::var(CONFIG_FILE_ENV).ok()).unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "rrg")
                .map(|dirs| dirs.config_dir().join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("rrg.toml"))
        })
    }

    /// Load from a specific path. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document. Absent keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RrgConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.min_samples == 0 {
            return Err(Error::InvalidConfig(
                "min_samples must be at least 1".to_string(),
            ));
        }

        if let Some(limit) = self.max_abs_value {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_abs_value must be a positive number, got {limit}"
                )));
            }
        }

        Ok(())
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    pub fn with_min_periods(mut self, min_periods: MinPeriods) -> Self {
        self.min_periods = min_periods;
        self
    }

    pub fn with_max_abs_value(mut self, max_abs_value: Option<f64>) -> Self {
        self.max_abs_value = max_abs_value;
        self
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionPolicy) -> Self {
        self.exclusion = exclusion;
        self
    }
}

/// An override path, unless the value is unset or blank.
fn override_path(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = RrgConfig::default();
        assert_eq!(config.min_samples, 30);
        assert_eq!(config.min_periods, MinPeriods::Partial);
        assert_eq!(config.max_abs_value, Some(1000.0));
        assert_eq!(config.exclusion, ExclusionPolicy::Omit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_path() {
        assert_eq!(
            override_path(Some("/etc/rrg/custom.toml".to_string())),
            Some(PathBuf::from("/etc/rrg/custom.toml"))
        );
        assert_eq!(override_path(Some("   ".to_string())), None);
        assert_eq!(override_path(Some(String::new())), None);
        assert_eq!(override_path(None), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = RrgConfig::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RrgConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_samples = 50\nmin_periods = \"full\"\n").unwrap();

        let config = RrgConfig::load_from_path(&path).unwrap();
        assert_eq!(config.min_samples, 50);
        assert_eq!(config.min_periods, MinPeriods::Full);
        assert_eq!(config.max_abs_value, DEFAULT_MAX_ABS_VALUE);
        assert_eq!(config.exclusion, ExclusionPolicy::Omit);
    }

    #[test]
    fn test_exclusion_policy_from_toml() {
        let config = RrgConfig::from_toml_str("exclusion = \"mark_no_data\"").unwrap();
        assert_eq!(config.exclusion, ExclusionPolicy::MarkNoData);
    }

    #[test]
    fn test_rejects_zero_min_samples() {
        let err = RrgConfig::from_toml_str("min_samples = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_non_positive_guard() {
        let config = RrgConfig::default().with_max_abs_value(Some(-1.0));
        assert!(config.validate().is_err());

        let config = RrgConfig::default().with_max_abs_value(None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = RrgConfig::from_toml_str("min_samples = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = RrgConfig::default()
            .with_min_samples(40)
            .with_exclusion(ExclusionPolicy::MarkNoData);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RrgConfig::from_toml_str(&text).unwrap(), config);
    }
}
