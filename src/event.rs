//! Diagnostic events emitted by a sink.
//!
//! Events are non-fatal notifications. Writes keep their fire-and-forget
//! signature; register a callback if you need to observe clamped or failed
//! writes without scraping logs.

use std::sync::Arc;

/// Which limit shortened a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteLimit {
    /// More frames were requested than the backend accepts per call.
    BackendBlockSize,
    /// More frames were requested than the supplied block holds.
    InputLength,
}

/// Diagnostic events emitted during sink creation and writing.
///
/// # Example
///
/// ```
/// use audio_file_sink::SinkEvent;
///
/// fn handle_event(event: SinkEvent) {
///     match event {
///         SinkEvent::BackendRejected { backend, reason } => {
///             eprintln!("{backend} refused: {reason}");
///         }
///         SinkEvent::BackendOpened { backend, .. } => {
///             eprintln!("writing with {backend}");
///         }
///         SinkEvent::PartialWrite { requested, written, limit } => {
///             eprintln!("wrote {written} of {requested} frames ({limit:?})");
///         }
///         SinkEvent::ChannelsTruncated { requested, written } => {
///             eprintln!("wrote {written} of {requested} channels");
///         }
///         SinkEvent::WriteFailed { backend, error } => {
///             eprintln!("{backend} write failed: {error}");
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A backend refused to open the destination; the next one will be tried.
    BackendRejected {
        /// Name of the refusing backend.
        backend: &'static str,
        /// Why it refused.
        reason: String,
    },

    /// A backend accepted the destination and is now active.
    BackendOpened {
        /// Name of the active backend.
        backend: &'static str,
        /// Samplerate the backend was opened with.
        samplerate: u32,
        /// Channel count the backend was opened with.
        channels: u16,
    },

    /// Fewer frames were written than requested.
    PartialWrite {
        /// Frames the caller asked to write.
        requested: usize,
        /// Frames actually forwarded to the backend.
        written: usize,
        /// The limit that was hit last.
        limit: WriteLimit,
    },

    /// The supplied block had fewer rows than the sink has channels.
    ChannelsTruncated {
        /// Channels the sink was opened with.
        requested: usize,
        /// Channels actually forwarded to the backend.
        written: usize,
    },

    /// The active backend failed to write a block.
    WriteFailed {
        /// Name of the active backend.
        backend: &'static str,
        /// Description of the error.
        error: String,
    },
}

/// Callback type for receiving sink events.
pub type EventCallback = Arc<dyn Fn(SinkEvent) + Send + Sync>;

/// Creates an [`EventCallback`] from a closure.
///
/// # Example
///
/// ```
/// use audio_file_sink::{event_callback, SinkEvent};
///
/// let callback = event_callback(|event: SinkEvent| {
///     println!("Got event: {:?}", event);
/// });
/// ```
pub fn event_callback<F>(f: F) -> EventCallback
where
    F: Fn(SinkEvent) + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_event_debug() {
        let event = SinkEvent::PartialWrite {
            requested: 600,
            written: 512,
            limit: WriteLimit::BackendBlockSize,
        };
        let debug = format!("{:?}", event);
        assert!(debug.contains("PartialWrite"));
        assert!(debug.contains("512"));
    }

    #[test]
    fn test_event_callback_helper() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = called.clone();

        let callback = event_callback(move |_| {
            called_clone.store(true, Ordering::SeqCst);
        });

        callback(SinkEvent::ChannelsTruncated {
            requested: 2,
            written: 1,
        });
        assert!(called.load(Ordering::SeqCst));
    }
}
