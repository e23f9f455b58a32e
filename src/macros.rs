//! src/macros.rs
//! Emission macros for the default session and explicit sessions.
//!
//! Every macro takes a comma-separated list of [`Display`](std::fmt::Display)
//! values that are rendered space-joined on one line.

/// Emit values at an explicit level through the default session.
///
/// Evaluates to the `Result<Emission, SessionError>` of
/// [`emit`](fn@crate::emit).
///
/// # Example
/// ```
/// use sessionlog::VerboseLevel;
///
/// let outcome = sessionlog::emit!(VerboseLevel::Info, "synced", 3, "files");
/// assert!(outcome.is_ok());
/// ```
#[macro_export]
macro_rules! emit {
    ($level:expr $(, $value:expr)* $(,)?) => {
        $crate::emit($level, &[$(&$value as &dyn ::core::fmt::Display),*])
    };
}

/// Emit values at an explicit level through a given session.
///
/// # Example
/// ```
/// use sessionlog::{Session, SessionConfig, VerboseLevel};
///
/// let session = Session::with_writer(Vec::new());
/// session.start_with(SessionConfig::named("job"));
/// sessionlog::emit_to!(session, VerboseLevel::Warning, "retrying", 2)?;
/// # Ok::<(), sessionlog::SessionError>(())
/// ```
#[macro_export]
macro_rules! emit_to {
    ($session:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $session.emit($level, &[$(&$value as &dyn ::core::fmt::Display),*])
    };
}

/// Emit trace output through the default session.
///
/// The level macros discard the outcome; use [`emit!`] to observe it.
///
/// # Example
/// ```
/// sessionlog::trace!("entering", "resolve");
/// ```
#[macro_export]
macro_rules! trace {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Trace $(, $value)*);
    }};
}

/// Emit debug output through the default session.
///
/// # Example
/// ```
/// sessionlog::debug!("cache size", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Debug $(, $value)*);
    }};
}

/// Emit informational output through the default session.
///
/// # Example
/// ```
/// sessionlog::info!("listening on", "127.0.0.1:8080");
/// ```
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Info $(, $value)*);
    }};
}

/// Emit a completed-task notice through the default session.
///
/// # Example
/// ```
/// sessionlog::success!("migration", "done");
/// ```
#[macro_export]
macro_rules! success {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Success $(, $value)*);
    }};
}

/// Emit a warning through the default session.
///
/// # Example
/// ```
/// sessionlog::warning!("disk usage at", 91, "percent");
/// ```
#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Warning $(, $value)*);
    }};
}

/// Emit an error through the default session.
///
/// # Example
/// ```
/// sessionlog::error!("request failed:", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Error $(, $value)*);
    }};
}

/// Emit an unrecoverable condition through the default session.
///
/// # Example
/// ```
/// sessionlog::critical!("state file corrupt");
/// ```
#[macro_export]
macro_rules! critical {
    ($($value:expr),* $(,)?) => {{
        let _ = $crate::emit!($crate::VerboseLevel::Critical $(, $value)*);
    }};
}
