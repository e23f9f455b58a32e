//! crates/logging/src/error.rs
//! Error types for sessions, backends, and configuration parsing.

use std::io;

use thiserror::Error;

use crate::config::ParseModeError;
use crate::levels::ParseLevelError;

/// Error returned by [`Session::emit`](crate::Session::emit).
///
/// Neither variant is fatal. [`SessionError::Inactive`] is the expected
/// outcome of logging before start or after stop and is normally ignored by
/// the caller.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session has not been started, or has been stopped.
    #[error("cannot emit while the session is not active")]
    Inactive,
    /// Writing to the primary sink failed.
    #[error("primary sink write failed: {0}")]
    Sink(#[from] io::Error),
}

impl SessionError {
    /// Reports whether the error is [`SessionError::Inactive`].
    #[must_use]
    pub const fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }
}

/// Error reported by a [`StructuredBackend`](crate::StructuredBackend).
///
/// The session swallows these; they are counted and, with the `tracing`
/// feature, reported as warnings.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A bounded queue was full and the record was dropped.
    #[error("backend queue is full; record dropped")]
    Saturated,
    /// The backend's worker has shut down.
    #[error("backend is closed")]
    Closed,
    /// The backend's writer failed.
    #[error("backend write failed: {0}")]
    Io(#[from] io::Error),
}

/// Error returned when a configuration option cannot be applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The option name is not recognised.
    #[error("unknown option: {0}")]
    UnknownOption(String),
    /// The option token had no `=value` part.
    #[error("option {0} requires a value")]
    MissingValue(String),
    /// A boolean option carried a value that is not a boolean.
    #[error("invalid boolean for {option}: {value:?}")]
    InvalidBool {
        /// Option name.
        option: String,
        /// Rejected value.
        value: String,
    },
    /// The threshold value names no level.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
    /// The mode value names no mode.
    #[error(transparent)]
    Mode(#[from] ParseModeError),
}
