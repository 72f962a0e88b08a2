//! Configuration types and loading.
//!
//! The main entry point is [`CalcConfig`], which represents the contents of
//! `.fincalc/config.yaml`. The effective configuration is loaded with
//! [`load_config`], which layers defaults, the YAML file and `FINCALC_*`
//! environment variables. [`load_file_config`] and [`save_config`] read and
//! write the file alone, for editing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File name of the configuration inside `.fincalc/`.
pub const CONFIG_FILE: &str = "config.yaml";

/// Prefix of environment variables that override file values.
pub const ENV_PREFIX: &str = "FINCALC_";

/// Largest accepted number of decimal places.
pub const MAX_PRECISION: usize = 12;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Layered loading failed (file or environment).
    #[error("failed to load configuration: {0}")]
    LoadError(#[from] Box<figment::Error>),

    /// The `.fincalc/` directory was not found.
    #[error("no .fincalc directory found (run 'fincalc config set' to create one)")]
    ConfigDirNotFound,

    /// The key is not a known configuration key.
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::LoadError(Box::new(err))
    }
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Color mode
// ---------------------------------------------------------------------------

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the terminal and the usual environment conventions.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("expected auto, always or never, got '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The fincalc configuration, corresponding to `.fincalc/config.yaml`.
///
/// Every field has a default so a partial file deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Decimal places used when printing results.
    pub precision: usize,

    /// Colour output mode.
    pub color: ColorMode,

    /// Output JSON instead of human-readable text.
    pub json: bool,

    /// Append `%` to percentage variables.
    #[serde(rename = "percent-suffix")]
    pub percent_suffix: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            color: ColorMode::Auto,
            json: false,
            percent_suffix: true,
        }
    }
}

impl CalcConfig {
    /// Every settable key, in display order.
    pub const KEYS: &'static [&'static str] = &["precision", "color", "json", "percent-suffix"];

    /// Returns the value of `key` as text.
    pub fn get(&self, key: &str) -> Result<String> {
        Ok(match key {
            "precision" => self.precision.to_string(),
            "color" => self.color.to_string(),
            "json" => self.json.to_string(),
            "percent-suffix" => self.percent_suffix.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        })
    }

    /// Parses `value` and stores it under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "precision" => {
                self.precision = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(key, "expected a whole number"))?;
            }
            "color" => self.color = value.parse().map_err(|reason| invalid(key, reason))?,
            "json" => self.json = parse_bool(key, value)?,
            "percent-suffix" => self.percent_suffix = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.validate()
    }

    /// Restores the default value of `key`.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let defaults = Self::default();
        match key {
            "precision" => self.precision = defaults.precision,
            "color" => self.color = defaults.color,
            "json" => self.json = defaults.json,
            "percent-suffix" => self.percent_suffix = defaults.percent_suffix,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All key/value pairs, in [`Self::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|&k| self.get(k).ok().map(|v| (k, v)))
            .collect()
    }

    /// Checks cross-field limits that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(invalid(
                "precision",
                format!("must be at most {MAX_PRECISION}"),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, "expected true or false")),
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Loads the effective configuration: defaults, then `config.yaml` inside
/// `config_dir` (if given and present), then `FINCALC_*` environment
/// variables.
///
/// Environment keys use underscores where file keys use dashes, so
/// `FINCALC_PERCENT_SUFFIX` overrides `percent-suffix`. `FINCALC_DIR` selects
/// the directory and is not a setting.
///
/// # Errors
///
/// Returns [`ConfigError::LoadError`] for malformed YAML or mistyped values,
/// and [`ConfigError::InvalidValue`] when a value is out of range.
pub fn load_config(config_dir: Option<&Path>) -> Result<CalcConfig> {
    let mut figment = Figment::from(Serialized::defaults(CalcConfig::default()));
    if let Some(dir) = config_dir {
        figment = figment.merge(Yaml::file(dir.join(CONFIG_FILE)));
    }
    let figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .ignore(&["DIR"])
            .map(|key| key.as_str().replace('_', "-").into()),
    );

    let config: CalcConfig = figment.extract()?;
    config.validate()?;
    debug!(?config_dir, ?config, "loaded configuration");
    Ok(config)
}

/// Loads only `config.yaml` inside `config_dir`, without environment
/// overrides. A missing or empty file yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_file_config(config_dir: &Path) -> Result<CalcConfig> {
    let config_path = config_dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(CalcConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    if content.trim().is_empty() {
        return Ok(CalcConfig::default());
    }

    Ok(serde_yaml::from_str(&content)?)
}

/// Saves configuration to `config.yaml` inside `config_dir`, creating the
/// directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_config(config_dir: &Path, config: &CalcConfig) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;

    let config_path = config_dir.join(CONFIG_FILE);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&config_path, yaml)?;
    debug!(path = %config_path.display(), "saved configuration");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let cfg = CalcConfig::default();
        assert_eq!(cfg.precision, 2);
        assert_eq!(cfg.color, ColorMode::Auto);
        assert!(!cfg.json);
        assert!(cfg.percent_suffix);
    }

    #[test]
    fn test_roundtrip_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".fincalc");

        let cfg = CalcConfig {
            precision: 4,
            color: ColorMode::Never,
            ..CalcConfig::default()
        };

        save_config(&config_dir, &cfg).unwrap();
        let loaded = load_file_config(&config_dir).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_file_config(&dir.path().join(".fincalc")).unwrap();
        assert_eq!(loaded, CalcConfig::default());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let cfg: CalcConfig = serde_yaml::from_str("precision: 3\npercent-suffix: false\n").unwrap();
        assert_eq!(cfg.precision, 3);
        assert!(!cfg.percent_suffix);
        assert_eq!(cfg.color, ColorMode::Auto);
    }

    #[test]
    fn test_get_set_unset() {
        let mut cfg = CalcConfig::default();
        cfg.set("precision", "5").unwrap();
        cfg.set("color", "ALWAYS").unwrap();
        cfg.set("json", "yes").unwrap();
        assert_eq!(cfg.get("precision").unwrap(), "5");
        assert_eq!(cfg.get("color").unwrap(), "always");
        assert!(cfg.json);

        cfg.unset("color").unwrap();
        assert_eq!(cfg.color, ColorMode::Auto);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut cfg = CalcConfig::default();
        assert!(matches!(
            cfg.set("precision", "two"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("precision", "40"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("color", "sometimes"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("theme", "dark"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.unset("theme"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_entries_in_key_order() {
        let entries = CalcConfig::default().entries();
        let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CalcConfig::KEYS.to_vec());
        assert_eq!(entries[3], ("percent-suffix", "true".to_string()));
    }

    #[test]
    fn test_layered_load() {
        Jail::expect_with(|jail| {
            std::fs::create_dir(".fincalc").unwrap();
            jail.create_file(".fincalc/config.yaml", "precision: 4\ncolor: never\n")?;
            jail.set_env("FINCALC_PRECISION", 6);
            jail.set_env("FINCALC_PERCENT_SUFFIX", false);
            jail.set_env("FINCALC_DIR", "/somewhere/else");

            let cfg = load_config(Some(&jail.directory().join(".fincalc"))).unwrap();
            assert_eq!(cfg.precision, 6);
            assert_eq!(cfg.color, ColorMode::Never);
            assert!(!cfg.percent_suffix);
            Ok(())
        });
    }

    #[test]
    fn test_load_without_dir_uses_env() {
        Jail::expect_with(|jail| {
            jail.set_env("FINCALC_JSON", true);
            let cfg = load_config(None).unwrap();
            assert!(cfg.json);
            assert_eq!(cfg.precision, 2);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_out_of_range() {
        Jail::expect_with(|jail| {
            jail.set_env("FINCALC_PRECISION", 99);
            assert!(matches!(
                load_config(None),
                Err(ConfigError::InvalidValue { .. })
            ));
            Ok(())
        });
    }
}
