//! crates/logging/src/session.rs
//! Session state machine guarding emission.
//!
//! A [`Session`] moves between three phases:
//!
//! ```text
//! Uninitialized --start--> Active --stop--> Stopped
//!                           ^  |               |
//!                           +--+ start (reset) |
//!                           ^                  |
//!                           +------ start -----+
//! ```
//!
//! All state lives behind one mutex. [`Session::emit`] copies the pieces it
//! needs (active flag, policy, forwarding flag) under that lock and decides
//! against the copy, so a concurrent [`Session::set_threshold`] can never
//! produce a decision against a half-applied configuration. The primary sink
//! has its own lock and the state lock is never held while writing.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use logging_sink::{MessageSink, join_values};

use crate::backend::{NullBackend, StructuredBackend};
use crate::config::{Mode, SessionConfig};
use crate::error::{BackendError, SessionError};
use crate::identity::current_identity;
use crate::levels::VerboseLevel;
use crate::verbosity::VerbosityPolicy;

/// Separator written above and below a framed block.
pub const FRAME_SEPARATOR: &str = "----------";

/// Successful outcome of [`Session::emit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emission {
    /// The message reached the primary sink.
    Emitted,
    /// The message was below the threshold; nothing was written.
    Suppressed,
}

impl Emission {
    /// Reports whether the message was written.
    #[must_use]
    pub const fn was_emitted(self) -> bool {
        matches!(self, Self::Emitted)
    }
}

/// Lifecycle phase of a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Never started.
    Uninitialized,
    /// Started and not stopped since.
    Active,
    /// Stopped; can be started again.
    Stopped,
}

/// Consistent copy of a session's state taken under its lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Session label.
    pub name: String,
    /// Informational build mode.
    pub mode: Mode,
    /// Whether the secondary backend is fed.
    pub logging_enabled: bool,
    /// Least urgent level that is emitted.
    pub threshold: VerboseLevel,
    /// Time of the most recent start.
    pub started_at: Option<SystemTime>,
    /// Time of the most recent stop since that start.
    pub ended_at: Option<SystemTime>,
    /// Identity captured by the most recent start.
    pub owner_id: Option<u32>,
    /// Whether emission is currently accepted.
    pub active: bool,
}

impl SessionSnapshot {
    /// Derives the lifecycle phase from the snapshot.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.active {
            SessionPhase::Active
        } else if self.started_at.is_some() {
            SessionPhase::Stopped
        } else {
            SessionPhase::Uninitialized
        }
    }

    /// Returns the configuration part of the snapshot.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            name: self.name.clone(),
            mode: self.mode,
            logging_enabled: self.logging_enabled,
            threshold: self.threshold,
        }
    }
}

struct SessionState {
    name: String,
    mode: Mode,
    logging_enabled: bool,
    policy: VerbosityPolicy,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    owner_id: Option<u32>,
    active: bool,
}

impl SessionState {
    fn unstarted(config: SessionConfig) -> Self {
        Self {
            name: config.name,
            mode: config.mode,
            logging_enabled: config.logging_enabled,
            policy: VerbosityPolicy::new(config.threshold),
            started_at: None,
            ended_at: None,
            owner_id: None,
            active: false,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            name: self.name.clone(),
            mode: self.mode,
            logging_enabled: self.logging_enabled,
            threshold: self.policy.threshold(),
            started_at: self.started_at,
            ended_at: self.ended_at,
            owner_id: self.owner_id,
            active: self.active,
        }
    }

    const fn gate(&self) -> EmitGate {
        EmitGate {
            active: self.active,
            policy: self.policy,
            logging_enabled: self.logging_enabled,
        }
    }
}

/// The part of the state an emission decision depends on.
#[derive(Copy, Clone)]
struct EmitGate {
    active: bool,
    policy: VerbosityPolicy,
    logging_enabled: bool,
}

type PrimarySink = MessageSink<Box<dyn Write + Send>>;

/// Mutable logging configuration controlling activation and verbosity.
///
/// Every operation takes `&self`; share a session across threads with a
/// reference, an [`Arc`], or a `static`. Independent sessions share nothing.
///
/// Before the first start, accessors report the default configuration
/// ([`SessionConfig::default`]) and no timestamps.
///
/// # Examples
///
/// ```
/// use logging::{Emission, Mode, Session, SessionError, VerboseLevel};
/// use logging_sink::SharedBuffer;
///
/// let output = SharedBuffer::new();
/// let session = Session::with_writer(output.clone());
///
/// assert!(matches!(
///     session.emit(VerboseLevel::Error, &[&"too early"]),
///     Err(SessionError::Inactive)
/// ));
///
/// session.start("worker", Mode::Production, false, VerboseLevel::Error);
/// assert_eq!(session.emit(VerboseLevel::Info, &[&"x"])?, Emission::Suppressed);
/// assert_eq!(session.emit(VerboseLevel::Error, &[&"x"])?, Emission::Emitted);
/// assert_eq!(output.contents(), "x\n");
///
/// session.stop();
/// assert!(!session.is_active());
/// # Ok::<(), SessionError>(())
/// ```
pub struct Session {
    state: Mutex<SessionState>,
    primary: Mutex<PrimarySink>,
    backend: Arc<dyn StructuredBackend>,
    backend_failures: AtomicU64,
    failure_reported: AtomicBool,
}

impl Session {
    /// Creates an unstarted session writing to standard output with no backend.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Creates an unstarted session writing to `writer` with no backend.
    #[must_use]
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_parts(writer, NullBackend)
    }

    /// Creates an unstarted session writing to `writer` and forwarding to `backend`.
    #[must_use]
    pub fn with_parts<W, B>(writer: W, backend: B) -> Self
    where
        W: Write + Send + 'static,
        B: StructuredBackend + 'static,
    {
        Self::with_shared_backend(writer, Arc::new(backend))
    }

    /// Like [`with_parts`](Self::with_parts) but keeps a handle to the backend.
    #[must_use]
    pub fn with_shared_backend<W>(writer: W, backend: Arc<dyn StructuredBackend>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            state: Mutex::new(SessionState::unstarted(SessionConfig::default())),
            primary: Mutex::new(MessageSink::new(Box::new(writer))),
            backend,
            backend_failures: AtomicU64::new(0),
            failure_reported: AtomicBool::new(false),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts the session, replacing every field.
    ///
    /// Starting an active session is a reset: the new configuration applies,
    /// `started_at` moves to now, and `ended_at` is cleared.
    pub fn start(
        &self,
        name: impl Into<String>,
        mode: Mode,
        logging_enabled: bool,
        threshold: VerboseLevel,
    ) {
        self.start_with(SessionConfig {
            name: name.into(),
            mode,
            logging_enabled,
            threshold,
        });
    }

    /// Starts the session from a [`SessionConfig`]. See [`start`](Self::start).
    pub fn start_with(&self, config: SessionConfig) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sessionlog::session",
            name = %config.name,
            mode = %config.mode,
            threshold = %config.threshold,
            logging_enabled = config.logging_enabled,
            "session started"
        );

        let owner = current_identity();
        let mut state = self.lock_state();
        *state = SessionState::unstarted(config);
        state.started_at = Some(SystemTime::now());
        state.owner_id = Some(owner);
        state.active = true;
    }

    /// Stops the session and stamps `ended_at`.
    ///
    /// Stopping a stopped session stamps `ended_at` again. Stopping a session
    /// that was never started does nothing.
    pub fn stop(&self) {
        let mut state = self.lock_state();
        let Some(started_at) = state.started_at else {
            return;
        };
        // A clock stepping backwards must not order the end before the start.
        state.ended_at = Some(SystemTime::now().max(started_at));
        state.active = false;
        drop(state);

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "sessionlog::session", "session stopped");
    }

    /// Reports whether emission is accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lock_state().active
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.snapshot().phase()
    }

    /// Returns the session label.
    #[must_use]
    pub fn name(&self) -> String {
        self.lock_state().name.clone()
    }

    /// Returns the informational build mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.lock_state().mode
    }

    /// Reports whether emitted messages are forwarded to the secondary backend.
    #[must_use]
    pub fn logging_enabled(&self) -> bool {
        self.lock_state().logging_enabled
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn threshold(&self) -> VerboseLevel {
        self.lock_state().policy.threshold()
    }

    /// Returns the current emission policy.
    #[must_use]
    pub fn policy(&self) -> VerbosityPolicy {
        self.lock_state().policy
    }

    /// Time of the most recent start, if any.
    #[must_use]
    pub fn started_at(&self) -> Option<SystemTime> {
        self.lock_state().started_at
    }

    /// Time of the most recent stop since the last start, if any.
    #[must_use]
    pub fn ended_at(&self) -> Option<SystemTime> {
        self.lock_state().ended_at
    }

    /// Identity captured by the most recent start, if any.
    #[must_use]
    pub fn owner_id(&self) -> Option<u32> {
        self.lock_state().owner_id
    }

    /// Copies the whole state under one lock acquisition.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.lock_state().snapshot()
    }

    /// Returns the configuration part of the state.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.snapshot().config()
    }

    /// Changes the threshold for subsequent emissions.
    pub fn set_threshold(&self, threshold: VerboseLevel) {
        self.lock_state().policy = VerbosityPolicy::new(threshold);
    }

    /// Enables or disables forwarding to the secondary backend.
    pub fn set_logging_enabled(&self, enabled: bool) {
        self.lock_state().logging_enabled = enabled;
    }

    /// Number of records the secondary backend has rejected.
    #[must_use]
    pub fn backend_failures(&self) -> u64 {
        self.backend_failures.load(Ordering::Relaxed)
    }

    /// Writes `values`, space-joined, if the session is active and `level`
    /// passes the threshold.
    ///
    /// The line always goes to the primary sink and, while logging is
    /// enabled, to the secondary backend as well. A backend failure does not
    /// fail the call.
    pub fn emit(
        &self,
        level: VerboseLevel,
        values: &[&dyn Display],
    ) -> Result<Emission, SessionError> {
        let gate = self.lock_state().gate();
        if !gate.active {
            return Err(SessionError::Inactive);
        }
        if !gate.policy.allows(level) {
            return Ok(Emission::Suppressed);
        }

        let line = join_values(values);
        self.write_primary([line.as_str()])?;
        if gate.logging_enabled {
            self.forward(level, &line);
        }
        Ok(Emission::Emitted)
    }

    /// Like [`emit`](Self::emit) but surrounds the line with
    /// [`FRAME_SEPARATOR`] lines.
    ///
    /// The three lines reach the primary sink without interleaving with
    /// other emissions. The secondary backend receives them as a single
    /// newline-joined record, so it sees either the whole frame or nothing.
    pub fn emit_framed(
        &self,
        level: VerboseLevel,
        values: &[&dyn Display],
    ) -> Result<Emission, SessionError> {
        let gate = self.lock_state().gate();
        if !gate.active {
            return Err(SessionError::Inactive);
        }
        if !gate.policy.allows(level) {
            return Ok(Emission::Suppressed);
        }

        let line = join_values(values);
        let block = [FRAME_SEPARATOR, line.as_str(), FRAME_SEPARATOR];
        self.write_primary(block)?;
        if gate.logging_enabled {
            self.forward(level, &block.join("\n"));
        }
        Ok(Emission::Emitted)
    }

    /// Flushes the primary sink.
    pub fn flush(&self) -> io::Result<()> {
        self.primary
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }

    fn write_primary<'a, I>(&self, lines: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sink = self.primary.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(lines)?;
        sink.flush()?;
        Ok(())
    }

    /// Hands `line` to the secondary backend without ever failing the caller.
    ///
    /// A full queue is only counted, never logged inline. Any other failure
    /// is reported once per session.
    fn forward(&self, level: VerboseLevel, line: &str) {
        let Err(error) = self.backend.write_structured(level, line) else {
            return;
        };
        self.backend_failures.fetch_add(1, Ordering::Relaxed);
        if matches!(error, BackendError::Saturated)
            || self.failure_reported.swap(true, Ordering::Relaxed)
        {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "sessionlog::session", %error, "structured backend rejected a record; further failures are only counted");
        #[cfg(not(feature = "tracing"))]
        let _ = error;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("Session")
            .field("name", &snapshot.name)
            .field("mode", &snapshot.mode)
            .field("logging_enabled", &snapshot.logging_enabled)
            .field("threshold", &snapshot.threshold)
            .field("phase", &snapshot.phase())
            .field("backend_failures", &self.backend_failures())
            .finish_non_exhaustive()
    }
}
