//! Error types for audio-file-sink.
//!
//! Errors fall into three groups:
//! - **Configuration rejection**: bad samplerate or channel count, returned from
//!   creation and preset calls
//! - **Backend failures**: opening, encoding, or closing inside an encoder
//! - **Misuse**: calling an operation in a state that doesn't allow it
//!
//! Write-time issues (clamped writes, encoder write errors) are never returned
//! as errors. They are logged and surfaced via the [`EventCallback`](crate::EventCallback).

use std::path::PathBuf;

/// Errors returned by sink and backend operations.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The samplerate was zero.
    #[error("failed creating {uri}, samplerate should be positive, not {samplerate}")]
    InvalidSamplerate {
        /// Destination the sink was created for.
        uri: String,
        /// The rejected samplerate.
        samplerate: u32,
    },

    /// The samplerate exceeds [`MAX_SAMPLERATE`](crate::MAX_SAMPLERATE).
    #[error("failed creating {uri}, samplerate {samplerate}Hz is too large (max {max}Hz)")]
    SamplerateTooLarge {
        /// Destination the sink was created for.
        uri: String,
        /// The rejected samplerate.
        samplerate: u32,
        /// Largest accepted samplerate.
        max: u32,
    },

    /// The channel count was zero.
    #[error("failed creating {uri}, channels should be positive, not {channels}")]
    InvalidChannels {
        /// Destination the sink was created for.
        uri: String,
        /// The rejected channel count.
        channels: u16,
    },

    /// The channel count exceeds [`MAX_CHANNELS`](crate::MAX_CHANNELS).
    #[error("failed creating {uri}, too many channels ({channels} but {max} available)")]
    TooManyChannels {
        /// Destination the sink was created for.
        uri: String,
        /// The rejected channel count.
        channels: u16,
        /// Largest accepted channel count.
        max: u16,
    },

    /// The operation is not allowed in the sink's current state.
    #[error("cannot {operation} while sink is {state}")]
    InvalidState {
        /// Operation that was attempted.
        operation: &'static str,
        /// State the sink was in.
        state: crate::SinkState,
    },

    /// Every compiled-in backend refused to open the destination.
    #[error("failed creating {uri} at {samplerate}Hz with {channels} channel(s): no backend accepted it")]
    NoBackendAvailable {
        /// Destination the sink was created for.
        uri: String,
        /// Requested samplerate.
        samplerate: u32,
        /// Requested channel count.
        channels: u16,
    },

    /// File I/O error.
    #[error("file error: {path}: {source}")]
    FileError {
        /// Path to the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An encoder library reported an error.
    #[error("{backend}: {reason}")]
    Encoder {
        /// Backend that failed.
        backend: &'static str,
        /// Description from the encoder.
        reason: String,
    },

    /// A write operation failed inside a backend.
    #[error("write failed: {reason}")]
    WriteFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// A backend failed to finalize its output.
    #[error("{backend}: close failed: {reason}")]
    CloseFailed {
        /// Backend that failed.
        backend: &'static str,
        /// Description of what went wrong.
        reason: String,
    },

    /// A sample block could not be constructed.
    #[error("invalid block: {reason}")]
    InvalidBlock {
        /// Why the block was rejected.
        reason: String,
    },

    /// Custom error for user-implemented backends.
    #[error("{0}")]
    Custom(String),
}

impl SinkError {
    /// Creates a custom error with the given message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Creates a write failed error with the given reason.
    pub fn write_failed(reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            reason: reason.into(),
        }
    }

    /// Creates a file error for the given path.
    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileError {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for samplerate and channel rejections.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSamplerate { .. }
                | Self::SamplerateTooLarge { .. }
                | Self::InvalidChannels { .. }
                | Self::TooManyChannels { .. }
        )
    }
}
