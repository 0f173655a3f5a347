//! The sink facade and backend dispatcher.
//!
//! A [`Sink`] owns at most one open [`Backend`]. Creation walks an ordered
//! [`BackendList`] and keeps the first backend that opens. Every write is
//! clamped by the [validation layer](crate::validate) before it reaches the
//! backend.
//!
//! # States
//!
//! ```text
//! Unconfigured --preset one--> Configured --preset other--> [open] --> Open
//! new(uri, rate > 0) --------------------------------------> [open] --> Open
//! Open --close--> Closed
//! any  --destroy/drop--> Closed
//! ```
//!
//! A failed open leaves the sink in the state it had before the call.

use std::fmt;

use crate::backend::{compiled_backends, Backend, BackendList};
use crate::chunk::{MultiBlock, Sample};
use crate::config::DEFAULT_CHANNELS;
use crate::event::{EventCallback, SinkEvent};
use crate::validate::{
    clamp_write_channels, clamp_write_length_with_limit, validate_channels, validate_samplerate,
};
use crate::{SinkBuilder, SinkError};

/// Component tag used in diagnostics that are not tied to a backend.
const KIND: &str = "sink";

/// Lifecycle state of a [`Sink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// Neither samplerate nor channel count is known.
    Unconfigured,
    /// Some parameters are preset, no backend is open yet.
    Configured,
    /// A backend is open and accepting writes.
    Open,
    /// Closed or destroyed. Terminal.
    Closed,
}

impl fmt::Display for SinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unconfigured => "unconfigured",
            Self::Configured => "configured",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Writes blocks of audio to a file through the first backend that accepts it.
///
/// A sink is used from one thread at a time; every mutating operation takes
/// `&mut self`. Dropping the sink closes it if still open and releases the
/// backend.
///
/// # Example
///
/// ```no_run
/// use audio_file_sink::Sink;
///
/// let mut sink = Sink::new("recording.wav", 44100)?;
/// let block = vec![0.0f32; 512];
/// sink.write_mono(&block, 512);
/// sink.close()?;
/// # Ok::<(), audio_file_sink::SinkError>(())
/// ```
///
/// Deferred creation, when the format is only known later:
///
/// ```no_run
/// use audio_file_sink::{Sink, SinkState};
///
/// let mut sink = Sink::new("later.wav", 0)?;
/// assert_eq!(sink.state(), SinkState::Unconfigured);
/// sink.preset_samplerate(48000)?;
/// sink.preset_channels(2)?;
/// assert_eq!(sink.state(), SinkState::Open);
/// # Ok::<(), audio_file_sink::SinkError>(())
/// ```
pub struct Sink {
    uri: String,
    samplerate: u32,
    channels: u16,
    state: SinkState,
    backend: Option<Box<dyn Backend>>,
    backends: BackendList,
    event_callback: Option<EventCallback>,
}

impl Sink {
    /// Creates a sink using the compiled-in backends.
    ///
    /// With a nonzero `samplerate` the sink opens immediately as mono; preset
    /// the channel count through [`Sink::builder`] instead if you need more.
    /// With `samplerate == 0` no backend is tried until both
    /// [`preset_samplerate`](Self::preset_samplerate) and
    /// [`preset_channels`](Self::preset_channels) succeed.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an out-of-range samplerate, or
    /// [`SinkError::NoBackendAvailable`] if every backend refused.
    pub fn new(uri: impl Into<String>, samplerate: u32) -> Result<Self, SinkError> {
        Self::with_backends(uri, samplerate, compiled_backends())
    }

    /// Like [`Sink::new`], trying `backends` in order instead of the
    /// compiled-in list.
    pub fn with_backends(
        uri: impl Into<String>,
        samplerate: u32,
        backends: BackendList,
    ) -> Result<Self, SinkError> {
        let mut sink = Self::unconfigured(uri.into(), backends, None);
        if samplerate == 0 {
            return Ok(sink);
        }
        validate_samplerate(KIND, &sink.uri, samplerate)?;
        sink.samplerate = samplerate;
        sink.channels = DEFAULT_CHANNELS;
        sink.open_backend()?;
        Ok(sink)
    }

    /// Returns a builder for a sink writing to `uri`.
    pub fn builder(uri: impl Into<String>) -> SinkBuilder {
        SinkBuilder::new(uri)
    }

    pub(crate) fn unconfigured(
        uri: String,
        backends: BackendList,
        event_callback: Option<EventCallback>,
    ) -> Self {
        Self {
            uri,
            samplerate: 0,
            channels: 0,
            state: SinkState::Unconfigured,
            backend: None,
            backends,
            event_callback,
        }
    }

    /// Presets the samplerate, opening the backend once channels are known too.
    ///
    /// # Errors
    ///
    /// Fails with [`SinkError::InvalidState`] once the sink is open or closed,
    /// with a configuration error for an out-of-range value, or with
    /// [`SinkError::NoBackendAvailable`]. On failure the sink is unchanged.
    pub fn preset_samplerate(&mut self, samplerate: u32) -> Result<(), SinkError> {
        self.ensure_configurable("preset samplerate")?;
        validate_samplerate(KIND, &self.uri, samplerate)?;

        let previous = self.samplerate;
        self.samplerate = samplerate;
        if let Err(err) = self.open_when_ready() {
            self.samplerate = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Presets the channel count, opening the backend once the samplerate is
    /// known too.
    ///
    /// # Errors
    ///
    /// Same as [`preset_samplerate`](Self::preset_samplerate).
    pub fn preset_channels(&mut self, channels: u16) -> Result<(), SinkError> {
        self.ensure_configurable("preset channels")?;
        validate_channels(KIND, &self.uri, channels)?;

        let previous = self.channels;
        self.channels = channels;
        if let Err(err) = self.open_when_ready() {
            self.channels = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Samplerate in Hz, or 0 if not preset yet.
    pub fn samplerate(&self) -> u32 {
        self.samplerate
    }

    /// Channel count, or 0 if not preset yet.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Destination this sink writes to.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Name of the active backend, if one is held.
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|b| b.name())
    }

    /// Replaces the diagnostic event callback.
    pub fn set_event_callback(&mut self, callback: Option<EventCallback>) {
        self.event_callback = callback;
    }

    /// Writes up to `frames` frames of a mono block.
    ///
    /// The count is clamped to the backend's per-call limit and to
    /// `block.len()`. Clamping and backend failures are logged and reported
    /// through the event callback, never returned.
    pub fn write_mono(&mut self, block: &[Sample], frames: usize) {
        let Self {
            uri,
            state,
            backend,
            event_callback,
            ..
        } = self;
        let Some(backend) = backend.as_mut().filter(|_| *state == SinkState::Open) else {
            tracing::warn!(kind = KIND, %uri, %state, "dropping mono write to {uri}, sink is {state}");
            return;
        };

        let (actual, limit) = clamp_write_length_with_limit(
            backend.name(),
            uri,
            backend.max_block_size(),
            frames,
            block.len(),
        );
        if let Some(limit) = limit {
            notify(
                event_callback.as_ref(),
                SinkEvent::PartialWrite {
                    requested: frames,
                    written: actual,
                    limit,
                },
            );
        }

        tracing::trace!(backend = backend.name(), %uri, frames = actual, "mono write");
        if let Err(err) = backend.write_mono(&block[..actual]) {
            report_write_failure(event_callback.as_ref(), backend.name(), uri, &err);
        }
    }

    /// Writes up to `frames` frames of a multi-channel block.
    ///
    /// Besides the frame clamp of [`write_mono`](Self::write_mono), only the
    /// first `min(channels, block.height())` rows are forwarded.
    pub fn write_multi(&mut self, block: &MultiBlock, frames: usize) {
        let Self {
            uri,
            channels,
            state,
            backend,
            event_callback,
            ..
        } = self;
        let Some(backend) = backend.as_mut().filter(|_| *state == SinkState::Open) else {
            tracing::warn!(kind = KIND, %uri, %state, "dropping multi write to {uri}, sink is {state}");
            return;
        };

        let sink_channels = usize::from(*channels);
        let rows = clamp_write_channels(backend.name(), uri, sink_channels, block.height());
        if rows < sink_channels {
            notify(
                event_callback.as_ref(),
                SinkEvent::ChannelsTruncated {
                    requested: sink_channels,
                    written: rows,
                },
            );
        }

        let (actual, limit) = clamp_write_length_with_limit(
            backend.name(),
            uri,
            backend.max_block_size(),
            frames,
            block.length(),
        );
        if let Some(limit) = limit {
            notify(
                event_callback.as_ref(),
                SinkEvent::PartialWrite {
                    requested: frames,
                    written: actual,
                    limit,
                },
            );
        }

        tracing::trace!(backend = backend.name(), %uri, frames = actual, channels = rows, "multi write");
        if let Err(err) = backend.write_multi(&block.sub_block(rows, actual)) {
            report_write_failure(event_callback.as_ref(), backend.name(), uri, &err);
        }
    }

    /// Finalizes the file.
    ///
    /// The sink is `Closed` afterwards whatever the backend reports.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidState`] unless the sink is open, or the
    /// backend's own close error.
    pub fn close(&mut self) -> Result<(), SinkError> {
        if self.state != SinkState::Open {
            return Err(SinkError::InvalidState {
                operation: "close",
                state: self.state,
            });
        }
        let result = self.backend.as_mut().map_or(Ok(()), |backend| backend.close());
        self.state = SinkState::Closed;

        match &result {
            Ok(()) => tracing::debug!(kind = KIND, uri = %self.uri, "closed {}", self.uri),
            Err(err) => tracing::error!(kind = KIND, uri = %self.uri, "failed closing {}: {err}", self.uri),
        }
        result
    }

    /// Closes the sink if open and releases the backend.
    ///
    /// Safe to call any number of times; the backend is released once.
    /// Dropping the sink does the same.
    pub fn destroy(&mut self) {
        if self.state == SinkState::Open {
            if let Err(err) = self.close() {
                tracing::warn!(kind = KIND, uri = %self.uri, "close during teardown failed: {err}");
            }
        }
        if let Some(mut backend) = self.backend.take() {
            backend.release();
        }
        self.state = SinkState::Closed;
    }

    fn ensure_configurable(&self, operation: &'static str) -> Result<(), SinkError> {
        match self.state {
            SinkState::Unconfigured | SinkState::Configured => Ok(()),
            state => {
                tracing::error!(kind = KIND, uri = %self.uri, "cannot {operation} on {}, sink is {state}", self.uri);
                Err(SinkError::InvalidState { operation, state })
            }
        }
    }

    fn open_when_ready(&mut self) -> Result<(), SinkError> {
        if self.samplerate != 0 && self.channels != 0 {
            self.open_backend()
        } else {
            self.state = SinkState::Configured;
            Ok(())
        }
    }

    /// Tries each backend in order and keeps the first that opens.
    fn open_backend(&mut self) -> Result<(), SinkError> {
        for factory in &self.backends {
            match factory.try_open(&self.uri, self.samplerate, self.channels) {
                Ok(backend) => {
                    tracing::debug!(
                        backend = factory.name(),
                        uri = %self.uri,
                        samplerate = self.samplerate,
                        channels = self.channels,
                        "opened {} with {}",
                        self.uri,
                        factory.name()
                    );
                    notify(
                        self.event_callback.as_ref(),
                        SinkEvent::BackendOpened {
                            backend: factory.name(),
                            samplerate: self.samplerate,
                            channels: self.channels,
                        },
                    );
                    self.backend = Some(backend);
                    self.state = SinkState::Open;
                    return Ok(());
                }
                Err(err) => {
                    tracing::debug!(backend = factory.name(), uri = %self.uri, "backend refused: {err}");
                    notify(
                        self.event_callback.as_ref(),
                        SinkEvent::BackendRejected {
                            backend: factory.name(),
                            reason: err.to_string(),
                        },
                    );
                }
            }
        }

        tracing::error!(
            kind = KIND,
            uri = %self.uri,
            "failed creating {} with samplerate {}Hz and {} channel(s), no backend accepted it",
            self.uri,
            self.samplerate,
            self.channels
        );
        Err(SinkError::NoBackendAvailable {
            uri: self.uri.clone(),
            samplerate: self.samplerate,
            channels: self.channels,
        })
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("uri", &self.uri)
            .field("samplerate", &self.samplerate)
            .field("channels", &self.channels)
            .field("state", &self.state)
            .field("backend", &self.backend_name())
            .finish_non_exhaustive()
    }
}

fn notify(callback: Option<&EventCallback>, event: SinkEvent) {
    if let Some(callback) = callback {
        callback(event);
    }
}

fn report_write_failure(
    callback: Option<&EventCallback>,
    backend: &'static str,
    uri: &str,
    err: &SinkError,
) {
    tracing::warn!(backend, uri, "write to {uri} failed: {err}");
    notify(
        callback,
        SinkEvent::WriteFailed {
            backend,
            error: err.to_string(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{CallLog, MockBackendFactory};
    use crate::event::{event_callback, WriteLimit};
    use crate::config::{MAX_CHANNELS, MAX_SAMPLERATE};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn list(factories: Vec<MockBackendFactory>) -> BackendList {
        factories
            .into_iter()
            .map(|f| Arc::new(f) as Arc<dyn crate::BackendFactory>)
            .collect()
    }

    #[test]
    fn test_create_opens_mono() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();

        assert_eq!(sink.state(), SinkState::Open);
        assert_eq!(sink.samplerate(), 44100);
        assert_eq!(sink.channels(), 1);
        assert_eq!(sink.backend_name(), Some("mock"));
        assert_eq!(record.opened_with(), Some(("out.wav".to_string(), 44100, 1)));
    }

    #[test]
    fn test_create_rejects_bad_samplerate_without_trying_backends() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let result = Sink::with_backends("out.wav", MAX_SAMPLERATE + 1, list(vec![mock]));

        assert!(matches!(result, Err(SinkError::SamplerateTooLarge { .. })));
        assert_eq!(record.open_attempts(), 0);
    }

    #[test]
    fn test_fallback_order() {
        let log = CallLog::default();
        let first = MockBackendFactory::refusing("first").with_call_log(Arc::clone(&log));
        let second = MockBackendFactory::refusing("second").with_call_log(Arc::clone(&log));
        let third = MockBackendFactory::accepting("third").with_call_log(Arc::clone(&log));
        let third_record = third.record();

        let sink = Sink::with_backends("out.wav", 48000, list(vec![first, second, third])).unwrap();

        assert_eq!(*log.lock(), vec!["first", "second", "third"]);
        assert_eq!(sink.backend_name(), Some("third"));
        assert_eq!(third_record.open_attempts(), 1);
    }

    #[test]
    fn test_fallback_stops_at_first_success() {
        let first = MockBackendFactory::accepting("first");
        let second = MockBackendFactory::accepting("second");
        let second_record = second.record();

        let sink = Sink::with_backends("out.wav", 48000, list(vec![first, second])).unwrap();
        assert_eq!(sink.backend_name(), Some("first"));
        assert_eq!(second_record.open_attempts(), 0);
    }

    #[test]
    fn test_backend_exhaustion() {
        let first = MockBackendFactory::refusing("first");
        let second = MockBackendFactory::refusing("second");
        let result = Sink::with_backends("out.wav", 8000, list(vec![first, second]));

        match result {
            Err(SinkError::NoBackendAvailable {
                uri,
                samplerate,
                channels,
            }) => {
                assert_eq!(uri, "out.wav");
                assert_eq!(samplerate, 8000);
                assert_eq!(channels, 1);
            }
            other => panic!("expected NoBackendAvailable, got {other:?}"),
        }
    }

    #[test]
    fn test_deferred_open() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![mock])).unwrap();

        assert_eq!(sink.state(), SinkState::Unconfigured);
        assert_eq!(record.open_attempts(), 0);

        sink.preset_samplerate(22050).unwrap();
        assert_eq!(sink.state(), SinkState::Configured);
        assert_eq!(sink.samplerate(), 22050);
        assert_eq!(sink.channels(), 0);
        assert_eq!(record.open_attempts(), 0);

        sink.preset_channels(2).unwrap();
        assert_eq!(sink.state(), SinkState::Open);
        assert_eq!(record.open_attempts(), 1);
        assert_eq!(record.opened_with(), Some(("out.wav".to_string(), 22050, 2)));
    }

    #[test]
    fn test_deferred_open_channels_first() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![mock])).unwrap();

        sink.preset_channels(4).unwrap();
        assert_eq!(sink.state(), SinkState::Configured);
        assert_eq!(record.open_attempts(), 0);

        sink.preset_samplerate(96000).unwrap();
        assert_eq!(sink.state(), SinkState::Open);
        assert_eq!(record.opened_with(), Some(("out.wav".to_string(), 96000, 4)));
    }

    #[test]
    fn test_invalid_presets_leave_state() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![mock])).unwrap();

        assert!(sink.preset_samplerate(0).is_err());
        assert!(sink.preset_channels(0).is_err());
        assert!(sink.preset_channels(MAX_CHANNELS + 1).is_err());
        assert_eq!(sink.state(), SinkState::Unconfigured);
        assert_eq!(sink.samplerate(), 0);
        assert_eq!(sink.channels(), 0);
        assert_eq!(record.open_attempts(), 0);
    }

    #[test]
    fn test_failed_deferred_open_restores_previous_values() {
        let mut sink =
            Sink::with_backends("out.wav", 0, list(vec![MockBackendFactory::refusing("no")]))
                .unwrap();
        sink.preset_samplerate(44100).unwrap();

        let result = sink.preset_channels(2);
        assert!(matches!(result, Err(SinkError::NoBackendAvailable { .. })));
        assert_eq!(sink.state(), SinkState::Configured);
        assert_eq!(sink.channels(), 0);
        assert_eq!(sink.samplerate(), 44100);
    }

    #[test]
    fn test_freeze_after_open() {
        let mut sink =
            Sink::with_backends("out.wav", 44100, list(vec![MockBackendFactory::accepting("m")]))
                .unwrap();

        assert!(matches!(
            sink.preset_samplerate(48000),
            Err(SinkError::InvalidState {
                state: SinkState::Open,
                ..
            })
        ));
        assert!(matches!(
            sink.preset_channels(2),
            Err(SinkError::InvalidState { .. })
        ));
        assert_eq!(sink.samplerate(), 44100);
        assert_eq!(sink.channels(), 1);
    }

    #[test]
    fn test_write_mono_clamps_to_input_and_block_size() {
        let mock = MockBackendFactory::accepting("mock").with_max_block_size(512);
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();

        sink.write_mono(&[0.0; 600], 600);
        sink.write_mono(&[0.0; 50], 100);
        sink.write_mono(&[0.0; 200], 100);

        assert_eq!(record.mono_writes(), vec![512, 50, 100]);
    }

    #[test]
    fn test_write_multi_clamps_channels_and_frames() {
        let mock = MockBackendFactory::accepting("mock").with_max_block_size(512);
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![mock])).unwrap();
        sink.preset_samplerate(44100).unwrap();
        sink.preset_channels(2).unwrap();

        sink.write_multi(&MultiBlock::new(1, 64), 64);
        sink.write_multi(&MultiBlock::new(4, 1000), 1000);
        sink.write_multi(&MultiBlock::new(2, 10), 20);

        assert_eq!(record.multi_writes(), vec![(1, 64), (2, 512), (2, 10)]);
    }

    #[test]
    fn test_write_forwards_leading_samples() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 8000, list(vec![mock])).unwrap();

        sink.write_mono(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(record.samples(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_write_when_not_open_is_dropped() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![mock])).unwrap();

        sink.write_mono(&[0.0; 16], 16);
        sink.write_multi(&MultiBlock::new(1, 16), 16);
        assert!(record.mono_writes().is_empty());
        assert!(record.multi_writes().is_empty());
    }

    #[test]
    fn test_write_after_close_is_dropped() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 8000, list(vec![mock])).unwrap();

        sink.close().unwrap();
        sink.write_mono(&[0.0; 16], 16);
        assert!(record.mono_writes().is_empty());
    }

    #[test]
    fn test_events_for_clamps_and_failures() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink_events = Arc::clone(&events);

        let mock = MockBackendFactory::accepting("mock")
            .with_max_block_size(8)
            .failing_writes();
        let mut sink = Sink::with_backends("out.wav", 8000, list(vec![mock])).unwrap();
        sink.set_event_callback(Some(event_callback(move |e| sink_events.lock().push(e))));

        sink.write_mono(&[0.0; 16], 16);

        let events = events.lock();
        assert_eq!(
            events[0],
            SinkEvent::PartialWrite {
                requested: 16,
                written: 8,
                limit: WriteLimit::BackendBlockSize,
            }
        );
        assert!(matches!(
            events[1],
            SinkEvent::WriteFailed {
                backend: "mock",
                ..
            }
        ));
    }

    #[test]
    fn test_close_then_destroy() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();

        sink.close().unwrap();
        assert_eq!(sink.state(), SinkState::Closed);
        assert_eq!(record.close_count(), 1);
        assert_eq!(record.release_count(), 0);

        sink.destroy();
        assert_eq!(record.close_count(), 1);
        assert_eq!(record.release_count(), 1);
    }

    #[test]
    fn test_close_requires_open() {
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![])).unwrap();
        assert!(matches!(
            sink.close(),
            Err(SinkError::InvalidState {
                operation: "close",
                state: SinkState::Unconfigured,
            })
        ));
    }

    #[test]
    fn test_close_failure_still_closes() {
        let mock = MockBackendFactory::accepting("mock").failing_close();
        let mut sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();

        assert!(matches!(sink.close(), Err(SinkError::CloseFailed { .. })));
        assert_eq!(sink.state(), SinkState::Closed);
        assert!(sink.close().is_err());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        let mut sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();

        sink.destroy();
        sink.destroy();
        drop(sink);

        assert_eq!(record.close_count(), 1);
        assert_eq!(record.release_count(), 1);
    }

    #[test]
    fn test_destroy_without_open() {
        let mut sink = Sink::with_backends("out.wav", 0, list(vec![])).unwrap();
        sink.destroy();
        assert_eq!(sink.state(), SinkState::Closed);
        assert!(sink.preset_samplerate(44100).is_err());
    }

    #[test]
    fn test_drop_releases_backend() {
        let mock = MockBackendFactory::accepting("mock");
        let record = mock.record();
        {
            let _sink = Sink::with_backends("out.wav", 44100, list(vec![mock])).unwrap();
        }
        assert_eq!(record.close_count(), 1);
        assert_eq!(record.release_count(), 1);
    }

    #[test]
    fn test_sink_state_display() {
        assert_eq!(SinkState::Unconfigured.to_string(), "unconfigured");
        assert_eq!(SinkState::Closed.to_string(), "closed");
    }

    #[test]
    fn test_sink_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Sink>();
    }
}
