//! crates/logging/src/tracing_bridge.rs
//! Bridge between session emission and the tracing crate.
//!
//! [`TracingBackend`] is the structured backend used by the default process
//! session: every forwarded message becomes a `tracing` event whose level is
//! mapped from the [`VerboseLevel`] and whose original level name is kept in
//! the `verbose_level` field, so `SUCCESS` and `CRITICAL` stay
//! distinguishable after the mapping onto tracing's five levels.
//!
//! How those events are rendered is the subscriber's business.
//! [`init_tracing`] installs a plain fmt subscriber on standard error whose
//! filter mirrors a session threshold; hosts with their own subscriber skip
//! it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{TracingBackend, VerboseLevel, init_tracing};
//!
//! init_tracing(VerboseLevel::Info)?;
//! let backend = TracingBackend::new();
//! ```

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

use crate::backend::StructuredBackend;
use crate::error::BackendError;
use crate::levels::VerboseLevel;

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "sessionlog";

/// Structured backend emitting `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Map a verbose level onto the nearest tracing level.
    #[must_use]
    pub const fn tracing_level(level: VerboseLevel) -> Level {
        match level {
            VerboseLevel::Trace => Level::TRACE,
            VerboseLevel::Debug => Level::DEBUG,
            VerboseLevel::Info | VerboseLevel::Success => Level::INFO,
            VerboseLevel::Warning => Level::WARN,
            VerboseLevel::Error | VerboseLevel::Critical => Level::ERROR,
        }
    }
}

impl StructuredBackend for TracingBackend {
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError> {
        let verbose_level = level.as_str();
        match level {
            VerboseLevel::Trace => tracing::trace!(target: TRACING_TARGET, verbose_level, "{message}"),
            VerboseLevel::Debug => tracing::debug!(target: TRACING_TARGET, verbose_level, "{message}"),
            VerboseLevel::Info | VerboseLevel::Success => {
                tracing::info!(target: TRACING_TARGET, verbose_level, "{message}");
            }
            VerboseLevel::Warning => tracing::warn!(target: TRACING_TARGET, verbose_level, "{message}"),
            VerboseLevel::Error | VerboseLevel::Critical => {
                tracing::error!(target: TRACING_TARGET, verbose_level, "{message}");
            }
        }
        Ok(())
    }
}

/// Level filter admitting exactly what `threshold` admits, after mapping.
#[must_use]
pub const fn level_filter(threshold: VerboseLevel) -> LevelFilter {
    match threshold {
        VerboseLevel::Trace => LevelFilter::TRACE,
        VerboseLevel::Debug => LevelFilter::DEBUG,
        VerboseLevel::Info | VerboseLevel::Success => LevelFilter::INFO,
        VerboseLevel::Warning => LevelFilter::WARN,
        VerboseLevel::Error | VerboseLevel::Critical => LevelFilter::ERROR,
    }
}

/// Install a global fmt subscriber on standard error filtered at `threshold`.
///
/// `RUST_LOG`, when set and valid, takes precedence over the threshold.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(threshold: VerboseLevel) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_filter(threshold).into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Trace), Level::TRACE);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Debug), Level::DEBUG);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Info), Level::INFO);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Success), Level::INFO);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Warning), Level::WARN);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Error), Level::ERROR);
        assert_eq!(TracingBackend::tracing_level(VerboseLevel::Critical), Level::ERROR);
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(VerboseLevel::Trace), LevelFilter::TRACE);
        assert_eq!(level_filter(VerboseLevel::Success), LevelFilter::INFO);
        assert_eq!(level_filter(VerboseLevel::Warning), LevelFilter::WARN);
        assert_eq!(level_filter(VerboseLevel::Critical), LevelFilter::ERROR);
    }

    #[test]
    fn backend_never_fails_without_subscriber() {
        let backend = TracingBackend::new();
        for level in VerboseLevel::ALL {
            assert!(backend.write_structured(level, "no subscriber").is_ok());
        }
    }

    #[test]
    fn backend_events_reach_a_scoped_subscriber() {
        use std::io;
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Capture {
            type Writer = Self;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(capture.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingBackend::new()
                .write_structured(VerboseLevel::Success, "deployed")
                .unwrap();
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("INFO"));
        assert!(output.contains("deployed"));
        assert!(output.contains("verbose_level"));
        assert!(output.contains("SUCCESS"));
    }
}
