#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` implements verbosity-gated diagnostic sessions. A [`Session`]
//! carries a name, an informational [`Mode`], a threshold [`VerboseLevel`],
//! and a flag controlling whether emitted messages are also forwarded to a
//! secondary [`StructuredBackend`]. Messages are accepted only while the
//! session is active and only when they are at least as urgent as the
//! threshold.
//!
//! # Design
//!
//! Levels are a closed, totally ordered enum whose numeric weights grow with
//! urgency; [`should_emit`] compares weights and nothing else. The session
//! keeps its mutable state behind a single mutex and decides every emission
//! against a copy taken under that lock. Output goes through a
//! [`MessageSink`](logging_sink::MessageSink) guarded by its own lock, so
//! concurrent emissions never interleave within a line.
//!
//! Secondary backends are pluggable. [`WriterBackend`] writes labelled lines
//! to any writer, [`NullBackend`] discards, and with the `tracing` feature
//! [`TracingBackend`] turns each message into a `tracing` event.
//! [`BoundedForwarder`] moves any backend onto a worker thread behind a
//! bounded queue so a slow collaborator cannot stall emitting threads.
//!
//! # Invariants
//!
//! - Nothing is written while the session is inactive.
//! - A level equal to the threshold is emitted.
//! - `ended_at`, when present, is never earlier than `started_at`.
//! - A failing backend never fails an emission; the primary sink is
//!   authoritative.
//!
//! # Errors
//!
//! [`Session::emit`] returns [`SessionError::Inactive`] outside the active
//! phase and [`SessionError::Sink`] when the primary writer fails.
//! Configuration parsing reports [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use logging::{Mode, Session, SessionConfig, VerboseLevel};
//! use logging_sink::SharedBuffer;
//!
//! let output = SharedBuffer::new();
//! let session = Session::with_writer(output.clone());
//! session.start_with(
//!     SessionConfig::named("import")
//!         .with_mode(Mode::Production)
//!         .with_threshold(VerboseLevel::Info),
//! );
//!
//! session.emit(VerboseLevel::Debug, &[&"skipped"])?;
//! session.emit(VerboseLevel::Success, &[&"imported", &12, &"rows"])?;
//! session.stop();
//!
//! assert_eq!(output.contents(), "imported 12 rows\n");
//! # Ok::<(), logging::SessionError>(())
//! ```

mod backend;
mod config;
mod error;
mod forward;
mod identity;
mod levels;
mod session;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod verbosity;

pub use backend::{NullBackend, StructuredBackend, WriterBackend};
pub use config::{
    DEFAULT_SESSION_NAME, ENV_LOGGING, ENV_MODE, ENV_NAME, ENV_THRESHOLD, Mode, ParseModeError,
    SessionConfig,
};
pub use error::{BackendError, ConfigError, SessionError};
pub use forward::{BoundedForwarder, DEFAULT_FORWARD_CAPACITY};
pub use identity::current_identity;
pub use levels::{ParseLevelError, VerboseLevel};
pub use session::{Emission, FRAME_SEPARATOR, Session, SessionPhase, SessionSnapshot};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{TRACING_TARGET, TracingBackend, init_tracing, level_filter};
pub use verbosity::{VerbosityPolicy, should_emit};
