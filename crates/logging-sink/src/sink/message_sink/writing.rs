//! crates/logging-sink/src/sink/message_sink/writing.rs
//! Line writing for `MessageSink`.

use super::MessageSink;
use crate::line_mode::LineMode;
use crate::sink::render::render_values;
use std::fmt::Display;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    fn write_scratch(&mut self, line_mode: LineMode) -> io::Result<()> {
        self.scratch.push_str(line_mode.terminator());
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes one pre-rendered line using the sink's current [`LineMode`].
    pub fn write(&mut self, line: &str) -> io::Result<()> {
        self.write_with_mode(line, self.line_mode)
    }

    /// Writes `line` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode(&mut self, line: &str, line_mode: LineMode) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.push_str(line);
        self.write_scratch(line_mode)
    }

    /// Renders `values` space-joined and writes them as one line.
    ///
    /// A value whose [`Display`] implementation fails is reported as
    /// [`io::ErrorKind::InvalidData`] and nothing is written.
    pub fn write_values(&mut self, values: &[&dyn Display]) -> io::Result<()> {
        self.scratch.clear();
        render_values(&mut self.scratch, values).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "value failed to format")
        })?;
        self.write_scratch(self.line_mode)
    }

    /// Writes each line from the iterator, stopping at the first error.
    pub fn write_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write(line.as_ref())?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
