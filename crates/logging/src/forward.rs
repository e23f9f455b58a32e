//! crates/logging/src/forward.rs
//! Non-blocking forwarding to a backend through a bounded queue.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, TrySendError, bounded};

use crate::backend::StructuredBackend;
use crate::error::BackendError;
use crate::levels::VerboseLevel;

/// Queue capacity used by the default process session.
pub const DEFAULT_FORWARD_CAPACITY: usize = 1024;

struct Record {
    level: VerboseLevel,
    message: String,
}

/// Hands records to a worker thread that feeds the wrapped backend.
///
/// [`write_structured`](StructuredBackend::write_structured) never blocks:
/// when the queue is full the record is dropped, counted, and
/// [`BackendError::Saturated`] is returned. A hung backend therefore stalls
/// only its own worker, never the emitting thread.
///
/// Dropping the forwarder closes the queue and waits for the worker to drain
/// what was already accepted.
pub struct BoundedForwarder {
    sender: Option<Sender<Record>>,
    worker: Option<JoinHandle<()>>,
    dropped: Arc<AtomicU64>,
    failed: Arc<AtomicU64>,
}

impl BoundedForwarder {
    /// Spawns the worker thread feeding `backend` from a queue of `capacity` records.
    ///
    /// A `capacity` of zero is raised to one.
    pub fn spawn<B>(backend: B, capacity: usize) -> io::Result<Self>
    where
        B: StructuredBackend + 'static,
    {
        let (sender, receiver) = bounded::<Record>(capacity.max(1));
        let failed = Arc::new(AtomicU64::new(0));
        let worker_failed = Arc::clone(&failed);

        let worker = thread::Builder::new()
            .name("sessionlog-forward".to_owned())
            .spawn(move || {
                for record in receiver {
                    if backend
                        .write_structured(record.level, &record.message)
                        .is_err()
                    {
                        worker_failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
            dropped: Arc::new(AtomicU64::new(0)),
            failed,
        })
    }

    /// Number of records dropped because the queue was full.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Number of records the wrapped backend rejected on the worker thread.
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

impl StructuredBackend for BoundedForwarder {
    fn write_structured(&self, level: VerboseLevel, message: &str) -> Result<(), BackendError> {
        let Some(sender) = &self.sender else {
            return Err(BackendError::Closed);
        };

        let record = Record {
            level,
            message: message.to_owned(),
        };
        match sender.try_send(record) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                Err(BackendError::Saturated)
            }
            Err(TrySendError::Disconnected(_)) => Err(BackendError::Closed),
        }
    }
}

impl Drop for BoundedForwarder {
    fn drop(&mut self) {
        // Closing the channel ends the worker's receive loop.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl fmt::Debug for BoundedForwarder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedForwarder")
            .field("dropped", &self.dropped())
            .field("failed", &self.failed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use crossbeam_channel::Receiver;

    #[derive(Clone, Default)]
    struct Collecting {
        records: Arc<Mutex<Vec<(VerboseLevel, String)>>>,
    }

    impl StructuredBackend for Collecting {
        fn write_structured(
            &self,
            level: VerboseLevel,
            message: &str,
        ) -> Result<(), BackendError> {
            self.records
                .lock()
                .unwrap()
                .push((level, message.to_owned()));
            Ok(())
        }
    }

    /// Blocks every write until the test releases it.
    struct Gated {
        gate: Receiver<()>,
    }

    impl StructuredBackend for Gated {
        fn write_structured(&self, _: VerboseLevel, _: &str) -> Result<(), BackendError> {
            let _ = self.gate.recv();
            Ok(())
        }
    }

    struct Failing;

    impl StructuredBackend for Failing {
        fn write_structured(&self, _: VerboseLevel, _: &str) -> Result<(), BackendError> {
            Err(BackendError::Closed)
        }
    }

    #[test]
    fn records_reach_backend_in_order() {
        let backend = Collecting::default();
        let forwarder = BoundedForwarder::spawn(backend.clone(), 8).unwrap();
        forwarder
            .write_structured(VerboseLevel::Info, "first")
            .unwrap();
        forwarder
            .write_structured(VerboseLevel::Error, "second")
            .unwrap();
        drop(forwarder);

        let records = backend.records.lock().unwrap();
        assert_eq!(
            *records,
            vec![
                (VerboseLevel::Info, "first".to_owned()),
                (VerboseLevel::Error, "second".to_owned()),
            ]
        );
    }

    #[test]
    fn full_queue_drops_without_blocking() {
        let (release, gate) = bounded::<()>(0);
        let forwarder = BoundedForwarder::spawn(Gated { gate }, 1).unwrap();

        let started = Instant::now();
        let mut saturated = 0;
        for _ in 0..10 {
            if matches!(
                forwarder.write_structured(VerboseLevel::Warning, "x"),
                Err(BackendError::Saturated)
            ) {
                saturated += 1;
            }
        }
        assert!(started.elapsed() < Duration::from_secs(5));
        // At most one record is in the worker and one in the queue.
        assert!(saturated >= 8);
        assert_eq!(forwarder.dropped(), saturated);

        drop(release);
        drop(forwarder);
    }

    #[test]
    fn worker_counts_backend_failures() {
        let forwarder = BoundedForwarder::spawn(Failing, 4).unwrap();
        forwarder.write_structured(VerboseLevel::Error, "a").unwrap();
        forwarder.write_structured(VerboseLevel::Error, "b").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while forwarder.failed() < 2 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(forwarder.failed(), 2);
        assert_eq!(forwarder.dropped(), 0);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let backend = Collecting::default();
        let forwarder = BoundedForwarder::spawn(backend.clone(), 0).unwrap();
        forwarder
            .write_structured(VerboseLevel::Debug, "fits")
            .unwrap();
        drop(forwarder);
        assert_eq!(backend.records.lock().unwrap().len(), 1);
    }

    #[test]
    fn debug_output_reports_counters() {
        let forwarder = BoundedForwarder::spawn(Collecting::default(), 2).unwrap();
        let rendered = format!("{forwarder:?}");
        assert!(rendered.contains("BoundedForwarder"));
        assert!(rendered.contains("dropped: 0"));
    }
}
