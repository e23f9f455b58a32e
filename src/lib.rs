#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `sessionlog` is a process-wide diagnostic facade. Output is gated twice:
//! a [`Session`] must be active, and each message must be at least as urgent
//! as the session's threshold [`VerboseLevel`]. Messages that pass go to
//! standard output and, while the session's logging flag is set, to a
//! secondary structured backend.
//!
//! # Design
//!
//! The state machine, level policy, configuration, and backends live in the
//! `logging` crate; line rendering lives in `logging-sink`. This crate adds
//! the lazily created [`default_session`] and the emission macros:
//! [`emit!`], [`emit_to!`], and one macro per level ([`trace!`], [`debug!`],
//! [`info!`], [`success!`], [`warning!`], [`error!`], [`critical!`]).
//!
//! The default session is configured from the `SESSIONLOG_*` environment
//! variables and otherwise starts as `anansi`, development mode, logging
//! disabled, threshold [`VerboseLevel::Debug`]. With the `tracing` feature
//! (on by default) its secondary backend turns messages into `tracing`
//! events through a bounded queue; without it, labelled lines go to
//! standard error.
//!
//! # Examples
//!
//! ```
//! use sessionlog::{VerboseLevel, default_session};
//!
//! default_session().set_threshold(VerboseLevel::Info);
//! sessionlog::debug!("not shown");
//! sessionlog::info!("processed", 10, "records");
//! ```
//!
//! Independent sessions work without the global:
//!
//! ```
//! use sessionlog::{Emission, Mode, Session, SharedBuffer, VerboseLevel};
//!
//! let output = SharedBuffer::new();
//! let session = Session::with_writer(output.clone());
//! session.start("audit", Mode::Production, false, VerboseLevel::Warning);
//! assert_eq!(
//!     sessionlog::emit_to!(session, VerboseLevel::Error, "denied", 403)?,
//!     Emission::Emitted
//! );
//! assert_eq!(output.contents(), "denied 403\n");
//! # Ok::<(), sessionlog::SessionError>(())
//! ```

mod global;
mod macros;

pub use global::{default_session, emit, emit_framed};
pub use logging::{
    BackendError, BoundedForwarder, ConfigError, DEFAULT_FORWARD_CAPACITY, DEFAULT_SESSION_NAME,
    ENV_LOGGING, ENV_MODE, ENV_NAME, ENV_THRESHOLD, Emission, FRAME_SEPARATOR, Mode, NullBackend,
    ParseLevelError, ParseModeError, Session, SessionConfig, SessionError, SessionPhase,
    SessionSnapshot, StructuredBackend, VerboseLevel, VerbosityPolicy, WriterBackend,
    current_identity, should_emit,
};
#[cfg(feature = "tracing")]
pub use logging::{TRACING_TARGET, TracingBackend, init_tracing, level_filter};
pub use logging_sink::{LineMode, MessageSink, SharedBuffer};
