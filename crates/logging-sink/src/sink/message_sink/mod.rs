//! crates/logging-sink/src/sink/message_sink/mod.rs
//! `MessageSink` construction and writer access.

use std::fmt;
use std::mem;

use crate::line_mode::LineMode;

/// Line-oriented sink that renders space-joined values into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a scratch [`String`]
/// that every call to [`write_values`](Self::write_values) renders into
/// before handing the finished line to the writer. Each line is terminated
/// according to the configured [`LineMode`].
///
/// # Examples
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_values(&[&"vanished:", &"a.txt"])?;
/// sink.write_values(&[&"partial", &23])?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "vanished: a.txt\npartial 23\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
}

mod writing;

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            scratch: String::new(),
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replaces the underlying writer, keeping the scratch buffer and [`LineMode`].
    ///
    /// The previous writer is returned so anything it buffered can be
    /// inspected or flushed before it is dropped.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
