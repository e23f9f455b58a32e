//! crates/logging/src/config.rs
//! Session configuration: defaults, option tokens, and environment overlay.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::ConfigError;
use crate::levels::VerboseLevel;

/// Name given to the default process session.
pub const DEFAULT_SESSION_NAME: &str = "anansi";

/// Environment variable overriding the session name.
pub const ENV_NAME: &str = "SESSIONLOG_NAME";
/// Environment variable overriding the mode.
pub const ENV_MODE: &str = "SESSIONLOG_MODE";
/// Environment variable overriding whether the secondary backend is fed.
pub const ENV_LOGGING: &str = "SESSIONLOG_LOGGING";
/// Environment variable overriding the threshold.
pub const ENV_THRESHOLD: &str = "SESSIONLOG_THRESHOLD";

/// Build mode a session runs under.
///
/// The session itself makes no decision on the mode; it is carried for
/// callers and integrations that format differently per mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Developer build.
    #[default]
    Development,
    /// Release build.
    Production,
}

impl Mode {
    /// Reports whether this is [`Mode::Development`].
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns the lower-case name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`Mode`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Everything [`Session::start_with`](crate::Session::start_with) needs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Human label for the session.
    pub name: String,
    /// Informational build mode.
    pub mode: Mode,
    /// Whether emitted messages are also forwarded to the secondary backend.
    pub logging_enabled: bool,
    /// Least urgent level that is emitted.
    pub threshold: VerboseLevel,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SESSION_NAME.to_owned(),
            mode: Mode::Development,
            logging_enabled: false,
            threshold: VerboseLevel::Debug,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with the given name and default settings.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables forwarding to the secondary backend.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Sets the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: VerboseLevel) -> Self {
        self.threshold = threshold;
        self
    }

    /// Apply a single `key=value` option token (e.g. `threshold=warning`).
    ///
    /// Recognised keys are `name`, `mode`, `logging` (alias
    /// `logging_enabled`), and `threshold` (alias `verbose`). Keys are
    /// case-insensitive; values are trimmed.
    pub fn apply_option(&mut self, token: &str) -> Result<(), ConfigError> {
        let (key, value) = parse_option_token(token)?;

        match key.as_str() {
            "name" => self.name = value.to_owned(),
            "mode" => self.mode = value.parse()?,
            "logging" | "logging_enabled" => self.logging_enabled = parse_bool(&key, value)?,
            "threshold" | "verbose" => self.threshold = value.parse()?,
            other => return Err(ConfigError::UnknownOption(other.to_owned())),
        }
        Ok(())
    }

    /// Builds a configuration from the defaults and a sequence of option tokens.
    ///
    /// Later tokens override earlier ones; the first invalid token aborts.
    pub fn from_options<I, S>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for token in tokens {
            config.apply_option(token.as_ref())?;
        }
        Ok(config)
    }

    /// Overlays the `SESSIONLOG_*` environment variables on the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays values returned by `lookup` for the `SESSIONLOG_*` keys.
    ///
    /// Unset or empty values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let pairs = [
            (ENV_NAME, "name"),
            (ENV_MODE, "mode"),
            (ENV_LOGGING, "logging"),
            (ENV_THRESHOLD, "threshold"),
        ];

        for (variable, key) in pairs {
            if let Some(value) = lookup(variable).filter(|value| !value.trim().is_empty()) {
                config.apply_option(&format!("{key}={value}"))?;
            }
        }
        Ok(config)
    }
}

/// Split `key=value` into a lower-cased key and a trimmed value.
fn parse_option_token(token: &str) -> Result<(String, &str), ConfigError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ConfigError::UnknownOption(String::new()));
    }

    match token.split_once('=') {
        Some((key, value)) => Ok((key.trim().to_ascii_lowercase(), value.trim())),
        None => Err(ConfigError::MissingValue(token.to_ascii_lowercase())),
    }
}

fn parse_bool(option: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            option: option.to_owned(),
            value: value.to_owned(),
        }),
    }
}
