//! Builder pattern for [`Sink`].

use crate::backend::{compiled_backends, BackendList};
use crate::config::DEFAULT_CHANNELS;
use crate::{event_callback, EventCallback, FormatPreset, Sink, SinkError, SinkEvent};

/// Builder for configuring and opening a [`Sink`].
///
/// Use [`Sink::builder()`] to create a new builder. Parameters left unset
/// follow [`Sink::new`]: a samplerate alone opens a mono sink, and with no
/// samplerate the sink is returned unconfigured so it can be preset later.
///
/// # Example
///
/// ```no_run
/// use audio_file_sink::{FormatPreset, Sink};
///
/// let sink = Sink::builder("meeting.wav")
///     .format(FormatPreset::Transcription)
///     .on_event(|e| tracing::warn!(?e, "sink event"))
///     .build()?;
/// # Ok::<(), audio_file_sink::SinkError>(())
/// ```
#[must_use]
pub struct SinkBuilder {
    uri: String,
    samplerate: Option<u32>,
    channels: Option<u16>,
    backends: Option<BackendList>,
    event_callback: Option<EventCallback>,
}

impl SinkBuilder {
    /// Creates a builder for a sink writing to `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            samplerate: None,
            channels: None,
            backends: None,
            event_callback: None,
        }
    }

    /// Set the samplerate, in Hz.
    pub fn samplerate(mut self, samplerate: u32) -> Self {
        self.samplerate = Some(samplerate);
        self
    }

    /// Set the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set samplerate and channel count from a preset.
    pub fn format(self, preset: FormatPreset) -> Self {
        self.samplerate(preset.sample_rate())
            .channels(preset.channels())
    }

    /// Try these backends, in order, instead of the compiled-in list.
    pub fn backends(mut self, backends: BackendList) -> Self {
        self.backends = Some(backends);
        self
    }

    /// Register a callback for diagnostic events.
    pub fn on_event<F>(mut self, f: F) -> Self
    where
        F: Fn(SinkEvent) + Send + Sync + 'static,
    {
        self.event_callback = Some(event_callback(f));
        self
    }

    /// Validates the parameters and opens the sink once both are known.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for out-of-range values, or
    /// [`SinkError::NoBackendAvailable`] if every backend refused.
    pub fn build(self) -> Result<Sink, SinkError> {
        let backends = self.backends.unwrap_or_else(compiled_backends);
        let samplerate = self.samplerate.filter(|&rate| rate != 0);
        let channels = match (samplerate, self.channels) {
            (Some(_), None) => Some(DEFAULT_CHANNELS),
            (_, channels) => channels,
        };

        let mut sink = Sink::unconfigured(self.uri, backends, self.event_callback);
        if let Some(channels) = channels {
            sink.preset_channels(channels)?;
        }
        if let Some(samplerate) = samplerate {
            sink.preset_samplerate(samplerate)?;
        }
        Ok(sink)
    }
}
