#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the primary output path of the session facade: a
//! line-oriented sink that renders a sequence of [`Display`](std::fmt::Display)
//! values, joined by single spaces, into any [`std::io::Write`] target.
//!
//! # Design
//!
//! [`MessageSink`] owns the writer together with a scratch [`String`] that is
//! reused for every rendered line, so repeated emission does not allocate once
//! the buffer has grown to the longest line seen. Whether a line is terminated
//! with `\n` is controlled by [`LineMode`].
//!
//! [`SharedBuffer`] is a cloneable in-memory writer. Sessions that must be
//! observed from another thread (tests, embedding hosts) hand one clone to the
//! sink and keep the other to read what was written.
//!
//! # Invariants
//!
//! - Values are separated by exactly one ASCII space; no leading or trailing
//!   separator is produced, and an empty value list renders an empty line.
//! - A rendered line is handed to the writer in a single `write_all` call.
//! - `LineMode::WithNewline` is the default.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write_values(&[&"copied", &3, &"files"])?;
//! sink.write("done")?;
//! assert_eq!(sink.into_inner(), b"copied 3 files\ndone\n".to_vec());
//!
//! let mut bare = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! bare.write("progress")?;
//! assert_eq!(bare.into_inner(), b"progress".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_mode;
mod shared;
mod sink;

pub use line_mode::LineMode;
pub use shared::SharedBuffer;
pub use sink::{MessageSink, join_values, render_values};
