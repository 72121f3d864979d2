//! Top-level coursemine configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputConfig, MiningConfig, RuleScope};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COURSEMINE_*`)
/// 3. Project config (`coursemine.toml` in the project root)
/// 4. User config (`~/.coursemine/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoursemineConfig {
    pub input: InputConfig,
    pub mining: MiningConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub records_path: Option<PathBuf>,
    pub labels_path: Option<PathBuf>,
    pub min_score: Option<i64>,
    pub min_support: Option<u64>,
    pub support_fraction: Option<f64>,
    pub min_confidence: Option<f64>,
    pub rule_scope: Option<RuleScope>,
}

impl CoursemineConfig {
    /// Load configuration with full layered resolution, reading the user
    /// config from `~/.coursemine/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_layers(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Load configuration from an explicit user config path.
    pub fn load_layers(
        root: &Path,
        user_config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CoursemineConfig) -> Result<(), ConfigError> {
        if let Some(fraction) = config.mining.support_fraction {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.support_fraction".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(confidence) = config.mining.min_confidence {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.min_confidence".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        // A zero support count makes every candidate frequent.
        if config.mining.min_support == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.min_support".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(ref delimiter) = config.input.delimiter {
            if delimiter.chars().count() != 1 || delimiter == "\n" {
                return Err(ConfigError::ValidationFailed {
                    field: "input.delimiter".to_string(),
                    message: "must be a single non-newline character".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.coursemine/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".coursemine").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CoursemineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let file_config: CoursemineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut CoursemineConfig, other: &CoursemineConfig) {
        // Input
        if other.input.records_path.is_some() {
            base.input.records_path = other.input.records_path.clone();
        }
        if other.input.labels_path.is_some() {
            base.input.labels_path = other.input.labels_path.clone();
        }
        if other.input.delimiter.is_some() {
            base.input.delimiter = other.input.delimiter.clone();
        }
        if other.input.has_header.is_some() {
            base.input.has_header = other.input.has_header;
        }
        if other.input.labels_has_header.is_some() {
            base.input.labels_has_header = other.input.labels_has_header;
        }

        // Mining
        if other.mining.min_score.is_some() {
            base.mining.min_score = other.mining.min_score;
        }
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.support_fraction.is_some() {
            base.mining.support_fraction = other.mining.support_fraction;
        }
        if other.mining.min_confidence.is_some() {
            base.mining.min_confidence = other.mining.min_confidence;
        }
        if other.mining.rule_scope.is_some() {
            base.mining.rule_scope = other.mining.rule_scope;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COURSEMINE_MIN_SCORE`, `COURSEMINE_MIN_CONFIDENCE`, etc.
    fn apply_env_overrides(config: &mut CoursemineConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("COURSEMINE_RECORDS_PATH") {
            config.input.records_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEMINE_LABELS_PATH") {
            config.input.labels_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("COURSEMINE_DELIMITER") {
            config.input.delimiter = Some(val);
        }
        if let Some(v) = parse_env::<i64>("COURSEMINE_MIN_SCORE")? {
            config.mining.min_score = Some(v);
        }
        if let Some(v) = parse_env::<u64>("COURSEMINE_MIN_SUPPORT")? {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = parse_env::<f64>("COURSEMINE_SUPPORT_FRACTION")? {
            config.mining.support_fraction = Some(v);
        }
        if let Some(v) = parse_env::<f64>("COURSEMINE_MIN_CONFIDENCE")? {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = parse_env::<RuleScope>("COURSEMINE_RULE_SCOPE")? {
            config.mining.rule_scope = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CoursemineConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.records_path {
            config.input.records_path = Some(v.clone());
        }
        if let Some(ref v) = cli.labels_path {
            config.input.labels_path = Some(v.clone());
        }
        if let Some(v) = cli.min_score {
            config.mining.min_score = Some(v);
        }
        if let Some(v) = cli.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = cli.support_fraction {
            config.mining.support_fraction = Some(v);
            // An explicit fraction on the command line beats a configured count.
            if cli.min_support.is_none() {
                config.mining.min_support = None;
            }
        }
        if let Some(v) = cli.min_confidence {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = cli.rule_scope {
            config.mining.rule_scope = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, treating an unparseable value as a config error.
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("'{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
