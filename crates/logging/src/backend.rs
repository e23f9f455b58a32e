//! crates/logging/src/backend.rs
//! Secondary structured backends fed by an active session.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::BackendError;
use crate::levels::VerboseLevel;

/// Narrow interface to a structured logging collaborator.
///
/// A session calls [`write_structured`](Self::write_structured) for every
/// emitted message while forwarding is enabled. Failures never fail the
/// emission; the primary sink stays authoritative. Implementations that may
/// block should be wrapped in a [`BoundedForwarder`](crate::BoundedForwarder).
pub trait StructuredBackend: Send + Sync {
    /// Records one message at `level`.
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError>;
}

impl<B> StructuredBackend for Arc<B>
where
    B: StructuredBackend + ?Sized,
{
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError> {
        (**self).write_structured(level, message)
    }
}

impl<B> StructuredBackend for Box<B>
where
    B: StructuredBackend + ?Sized,
{
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError> {
        (**self).write_structured(level, message)
    }
}

/// Backend that accepts and discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl StructuredBackend for NullBackend {
    fn write_structured(&self, _level: VerboseLevel, _message: &str) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Backend that writes `LEVEL: message` lines to a writer.
///
/// # Examples
///
/// ```
/// use logging::{StructuredBackend, VerboseLevel, WriterBackend};
///
/// let backend = WriterBackend::new(Vec::new());
/// backend.write_structured(VerboseLevel::Warning, "disk nearly full")?;
/// assert_eq!(backend.into_inner(), b"WARNING: disk nearly full\n");
/// # Ok::<(), logging::BackendError>(())
/// ```
#[derive(Debug, Default)]
pub struct WriterBackend<W> {
    writer: Mutex<W>,
}

impl<W> WriterBackend<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the backend and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterBackend<std::io::Stderr> {
    /// Backend writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W> StructuredBackend for WriterBackend<W>
where
    W: Write + Send,
{
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{level}: {message}")?;
        Ok(())
    }
}
