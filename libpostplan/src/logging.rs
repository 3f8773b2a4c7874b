//! Logging setup shared by Postplan binaries
//!
//! Logs always go to stderr so rendered output on stdout stays clean.
//!
//! # Examples
//!
//! ```no_run
//! use libpostplan::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init();
//!
//! // Or respect POSTPLAN_LOG_FORMAT / POSTPLAN_LOG_LEVEL
//! libpostplan::logging::init_default();
//! ```

use std::str::FromStr;

use crate::config::LoggingSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
}

impl LoggingConfig {
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
        }
    }

    /// Build from the `[logging]` config section; an unknown format falls
    /// back to text
    pub fn from_section(section: &LoggingSection, verbose: bool) -> Self {
        let format = section.format.parse().unwrap_or(LogFormat::Text);
        Self::new(format, section.level.clone(), verbose)
    }

    /// Install the global subscriber
    ///
    /// `RUST_LOG` wins over the configured level when set. Calling this a
    /// second time leaves the first subscriber in place.
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let level = if self.verbose { "debug" } else { self.level.as_str() };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let result = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "Logging already initialized");
        }
    }
}

impl LoggingConfig {
    /// Let `POSTPLAN_LOG_FORMAT` and `POSTPLAN_LOG_LEVEL` override this
    /// config; an unparseable format is ignored
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(format) = std::env::var("POSTPLAN_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.format = format;
        }
        if let Ok(level) = std::env::var("POSTPLAN_LOG_LEVEL") {
            self.level = level;
        }
        self
    }
}

/// Initialize logging from `POSTPLAN_LOG_FORMAT` and `POSTPLAN_LOG_LEVEL`,
/// falling back to text at info.
pub fn init_default() {
    LoggingConfig::new(LogFormat::Text, "info".to_string(), false)
        .with_env_overrides()
        .init();
}
