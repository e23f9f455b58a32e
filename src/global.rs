//! src/global.rs
//! Process-wide default session.

use std::fmt::Display;
use std::io;
use std::sync::{Arc, OnceLock};

use logging::{Emission, Session, SessionConfig, SessionError, StructuredBackend, VerboseLevel};

static DEFAULT_SESSION: OnceLock<Session> = OnceLock::new();

/// Returns the process-wide session, creating and starting it on first use.
///
/// The session writes to standard output. Its configuration is read once
/// from the `SESSIONLOG_*` environment variables
/// ([`SessionConfig::from_env`]); invalid values fall back to
/// [`SessionConfig::default`]. Concurrent first calls create exactly one
/// session.
///
/// The session stays reachable for the life of the process and can be
/// stopped, restarted, or reconfigured like any other.
///
/// # Examples
///
/// ```
/// let session = sessionlog::default_session();
/// assert!(std::ptr::eq(session, sessionlog::default_session()));
/// ```
pub fn default_session() -> &'static Session {
    DEFAULT_SESSION.get_or_init(|| {
        let session = Session::with_shared_backend(io::stdout(), default_backend());
        session.start_with(startup_config());
        session
    })
}

/// Emits `values` through the [`default_session`].
pub fn emit(level: VerboseLevel, values: &[&dyn Display]) -> Result<Emission, SessionError> {
    default_session().emit(level, values)
}

/// Emits a framed block through the [`default_session`].
pub fn emit_framed(level: VerboseLevel, values: &[&dyn Display]) -> Result<Emission, SessionError> {
    default_session().emit_framed(level, values)
}

fn startup_config() -> SessionConfig {
    match SessionConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(target: "sessionlog", %error, "ignoring invalid session environment");
            #[cfg(not(feature = "tracing"))]
            let _ = error;
            SessionConfig::default()
        }
    }
}

#[cfg(feature = "tracing")]
fn default_backend() -> Arc<dyn StructuredBackend> {
    use logging::{BoundedForwarder, DEFAULT_FORWARD_CAPACITY, TracingBackend};

    match BoundedForwarder::spawn(TracingBackend::new(), DEFAULT_FORWARD_CAPACITY) {
        Ok(forwarder) => Arc::new(forwarder),
        // Without a worker thread the events are delivered inline.
        Err(_) => Arc::new(TracingBackend::new()),
    }
}

#[cfg(not(feature = "tracing"))]
fn default_backend() -> Arc<dyn StructuredBackend> {
    Arc::new(logging::WriterBackend::stderr())
}
