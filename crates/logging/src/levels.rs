//! crates/logging/src/levels.rs
//! Severity levels and their fixed numeric weights.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity attached to a message and used as a session's threshold.
///
/// Levels are totally ordered by their weight: a lower weight is noisier, a
/// higher weight is more urgent. The derived [`Ord`] follows declaration
/// order, which matches the weights.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum VerboseLevel {
    /// Everything, including step-by-step tracing.
    Trace = 5,
    /// Debug information and above.
    #[default]
    Debug = 10,
    /// Standard informational output.
    Info = 20,
    /// Completed tasks and above.
    Success = 25,
    /// Non-fatal warnings and above.
    Warning = 30,
    /// Errors only.
    Error = 40,
    /// Unrecoverable conditions only.
    Critical = 50,
}

impl VerboseLevel {
    /// Every level, noisiest first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the numeric weight of the level.
    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// Looks up the level carrying exactly `weight`.
    #[must_use]
    pub const fn from_weight(weight: u8) -> Option<Self> {
        match weight {
            5 => Some(Self::Trace),
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            25 => Some(Self::Success),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Returns the upper-case label used when rendering the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for VerboseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`VerboseLevel`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown verbose level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for VerboseLevel {
    type Err = ParseLevelError;

    /// Parses a level name (case-insensitive, `warn` accepted) or its weight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(weight) = trimmed.parse::<u8>() {
            return Self::from_weight(weight).ok_or_else(|| ParseLevelError(s.to_owned()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl From<VerboseLevel> for u8 {
    fn from(level: VerboseLevel) -> Self {
        level.weight()
    }
}

impl TryFrom<u8> for VerboseLevel {
    type Error = ParseLevelError;

    fn try_from(weight: u8) -> Result<Self, ParseLevelError> {
        Self::from_weight(weight).ok_or_else(|| ParseLevelError(weight.to_string()))
    }
}
