//! Session configuration.
//!
//! Settings can come from environment variables or be set programmatically;
//! command-line flags are applied on top by the caller.

use std::str::FromStr;

use clap::ValueEnum;

/// How session outcomes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue { key: "format", value: s.to_string() }),
        }
    }
}

/// Configuration for a command session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Output format for outcomes
    pub format: OutputFormat,
    /// Abort on the first rejected command
    pub stop_on_error: bool,
    /// Prompt written before each line is read
    pub prompt: Option<String>,
}

impl SessionConfig {
    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether the first rejected command ends the session.
    pub fn with_stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    /// Sets the input prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRINTQ_FORMAT`: `text` or `json` (default: text)
    /// - `PRINTQ_STOP_ON_ERROR`: `1`, `0`, `true` or `false` (default: false)
    ///
    /// # Errors
    /// Returns an error if any environment variable contains an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("PRINTQ_FORMAT") {
            config.format = val.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PRINTQ_FORMAT",
                value: val.clone(),
            })?;
        }

        if let Ok(val) = std::env::var("PRINTQ_STOP_ON_ERROR") {
            config.stop_on_error = parse_flag(&val).ok_or(ConfigError::InvalidValue {
                key: "PRINTQ_STOP_ON_ERROR",
                value: val.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
