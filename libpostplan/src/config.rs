//! Configuration management for Postplan
//!
//! Every section is optional. With no file at all the defaults apply:
//! drafts start at 12:00, suggestions use the built-in corpus with an
//! entropy seed, logs are plain text at `info`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub composer: ComposerConfig,
    pub suggestions: SuggestionsConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Time a fresh draft starts at, as `HH:MM`
    pub default_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Fixed seed for repeatable suggestions
    pub seed: Option<u64>,
    /// Replacement for the built-in corpus
    pub corpus: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            default_time: "12:00".to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A file named by `POSTPLAN_CONFIG` must exist. A missing file at the
    /// platform default location just means "use defaults".
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("POSTPLAN_CONFIG") {
            let path = PathBuf::from(shellexpand::tilde(&path).to_string());
            return Self::load_from_path(&path);
        }

        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        self.composer.default_time()?;

        if let Some(corpus) = &self.suggestions.corpus {
            if corpus.is_empty() {
                return Err(ConfigError::Invalid(
                    "suggestions.corpus must contain at least one entry".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }
}

impl ComposerConfig {
    /// Parsed `default_time`
    pub fn default_time(&self) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(self.default_time.trim(), "%H:%M").map_err(|_| {
            ConfigError::Invalid(format!(
                "composer.default_time '{}' is not HH:MM",
                self.default_time
            ))
            .into()
        })
    }
}

/// Resolve the configuration file path (XDG layout)
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("POSTPLAN_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("postplan").join("config.toml"))
}
