//! Recording backend for testing without touching the filesystem.
//!
//! Every factory shares a [`MockRecord`] with the backends it opens, so tests
//! can check what the sink forwarded after the fact.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use audio_file_sink::backend::mock::MockBackendFactory;
//! use audio_file_sink::Sink;
//!
//! let mock = MockBackendFactory::accepting("mock");
//! let record = mock.record();
//!
//! let mut sink = Sink::builder("out.wav")
//!     .samplerate(44100)
//!     .backends(vec![Arc::new(mock)])
//!     .build()
//!     .unwrap();
//! sink.write_mono(&[0.0; 256], 256);
//! assert_eq!(record.mono_writes(), vec![256]);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Backend, BackendFactory};
use crate::chunk::Sample;
use crate::config::DEFAULT_MAX_BLOCK_SIZE;
use crate::SinkError;

/// Shared log of open attempts, in call order, across several factories.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

/// What a mock factory and its backends observed.
#[derive(Debug, Default)]
pub struct MockRecord {
    open_attempts: AtomicUsize,
    opened_with: Mutex<Option<(String, u32, u16)>>,
    mono_writes: Mutex<Vec<usize>>,
    multi_writes: Mutex<Vec<(usize, usize)>>,
    samples: Mutex<Vec<Sample>>,
    closes: AtomicUsize,
    releases: AtomicUsize,
}

impl MockRecord {
    /// Number of times `try_open` was called.
    pub fn open_attempts(&self) -> usize {
        self.open_attempts.load(Ordering::SeqCst)
    }

    /// `(uri, samplerate, channels)` of the last successful open.
    pub fn opened_with(&self) -> Option<(String, u32, u16)> {
        self.opened_with.lock().clone()
    }

    /// Frame count of each mono write.
    pub fn mono_writes(&self) -> Vec<usize> {
        self.mono_writes.lock().clone()
    }

    /// `(channels, frames)` of each multi-channel write.
    pub fn multi_writes(&self) -> Vec<(usize, usize)> {
        self.multi_writes.lock().clone()
    }

    /// Every sample received, mono blocks and multi rows concatenated in order.
    pub fn samples(&self) -> Vec<Sample> {
        self.samples.lock().clone()
    }

    /// Number of `close` calls.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Number of `release` calls that freed the backend.
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// A [`BackendFactory`] that accepts or refuses every destination.
#[derive(Debug, Clone)]
pub struct MockBackendFactory {
    name: &'static str,
    accept: bool,
    max_block_size: usize,
    fail_writes: bool,
    fail_close: bool,
    record: Arc<MockRecord>,
    call_log: Option<CallLog>,
}

impl MockBackendFactory {
    /// A factory whose `try_open` always succeeds.
    pub fn accepting(name: &'static str) -> Self {
        Self {
            name,
            accept: true,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            fail_writes: false,
            fail_close: false,
            record: Arc::default(),
            call_log: None,
        }
    }

    /// A factory whose `try_open` always fails.
    pub fn refusing(name: &'static str) -> Self {
        Self {
            accept: false,
            ..Self::accepting(name)
        }
    }

    /// Sets the per-call frame limit reported by opened backends.
    #[must_use]
    pub fn with_max_block_size(mut self, max_block_size: usize) -> Self {
        self.max_block_size = max_block_size;
        self
    }

    /// Makes every write on opened backends fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Makes `close` on opened backends fail.
    #[must_use]
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Appends this factory's name to `log` on every open attempt.
    #[must_use]
    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.call_log = Some(log);
        self
    }

    /// Handle to the shared record.
    pub fn record(&self) -> Arc<MockRecord> {
        Arc::clone(&self.record)
    }
}

impl BackendFactory for MockBackendFactory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn try_open(
        &self,
        uri: &str,
        samplerate: u32,
        channels: u16,
    ) -> Result<Box<dyn Backend>, SinkError> {
        self.record.open_attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.call_log {
            log.lock().push(self.name);
        }
        if !self.accept {
            return Err(SinkError::custom(format!("{} refuses {uri}", self.name)));
        }
        *self.record.opened_with.lock() = Some((uri.to_string(), samplerate, channels));
        Ok(Box::new(MockBackend {
            name: self.name,
            max_block_size: self.max_block_size,
            fail_writes: self.fail_writes,
            fail_close: self.fail_close,
            record: Arc::clone(&self.record),
            released: false,
        }))
    }
}

/// Backend opened by [`MockBackendFactory`].
#[derive(Debug)]
pub struct MockBackend {
    name: &'static str,
    max_block_size: usize,
    fail_writes: bool,
    fail_close: bool,
    record: Arc<MockRecord>,
    released: bool,
}

impl Backend for MockBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    fn write_mono(&mut self, samples: &[Sample]) -> Result<(), SinkError> {
        if self.fail_writes {
            return Err(SinkError::write_failed("mock write failure"));
        }
        self.record.mono_writes.lock().push(samples.len());
        self.record.samples.lock().extend_from_slice(samples);
        Ok(())
    }

    fn write_multi(&mut self, rows: &[&[Sample]]) -> Result<(), SinkError> {
        if self.fail_writes {
            return Err(SinkError::write_failed("mock write failure"));
        }
        let frames = rows.first().map_or(0, |row| row.len());
        self.record.multi_writes.lock().push((rows.len(), frames));
        let mut samples = self.record.samples.lock();
        for row in rows {
            samples.extend_from_slice(row);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.record.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(SinkError::CloseFailed {
                backend: self.name,
                reason: "mock close failure".to_string(),
            });
        }
        Ok(())
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.record.releases.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusing_counts_attempts() {
        let factory = MockBackendFactory::refusing("nope");
        assert!(factory.try_open("a.wav", 44100, 1).is_err());
        assert!(factory.try_open("a.wav", 44100, 1).is_err());
        assert_eq!(factory.record().open_attempts(), 2);
        assert_eq!(factory.record().opened_with(), None);
    }

    #[test]
    fn test_accepting_records_writes() {
        let factory = MockBackendFactory::accepting("yes");
        let record = factory.record();
        let mut backend = factory.try_open("a.wav", 48000, 2).unwrap();

        backend.write_mono(&[0.1, 0.2]).unwrap();
        let left = [1.0; 3];
        let right = [2.0; 3];
        backend.write_multi(&[&left[..], &right[..]]).unwrap();
        backend.close().unwrap();
        backend.release();
        backend.release();

        assert_eq!(record.opened_with(), Some(("a.wav".to_string(), 48000, 2)));
        assert_eq!(record.mono_writes(), vec![2]);
        assert_eq!(record.multi_writes(), vec![(2, 3)]);
        assert_eq!(record.samples().len(), 8);
        assert_eq!(record.close_count(), 1);
        assert_eq!(record.release_count(), 1);
    }

    #[test]
    fn test_call_log_shared_across_factories() {
        let log = CallLog::default();
        let first = MockBackendFactory::refusing("first").with_call_log(Arc::clone(&log));
        let second = MockBackendFactory::accepting("second").with_call_log(Arc::clone(&log));

        let _ = first.try_open("a.wav", 8000, 1);
        let _ = second.try_open("a.wav", 8000, 1);
        assert_eq!(*log.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_failure_switches() {
        let factory = MockBackendFactory::accepting("bad")
            .failing_writes()
            .failing_close();
        let mut backend = factory.try_open("a.wav", 8000, 1).unwrap();
        assert!(backend.write_mono(&[0.0]).is_err());
        assert!(matches!(backend.close(), Err(SinkError::CloseFailed { .. })));
    }
}
