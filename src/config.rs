//! Compile-time limits and format presets.

/// Largest samplerate a sink accepts, in Hz.
pub const MAX_SAMPLERATE: u32 = 192_000 * 8;

/// Largest channel count a sink accepts.
pub const MAX_CHANNELS: u16 = 1024;

/// Channel count assumed when a sink is created with a nonzero samplerate.
pub const DEFAULT_CHANNELS: u16 = 1;

/// Number of frames the bundled encoders accept per write call.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 4096;

/// Preset audio formats for common use cases.
///
/// Apply one with [`SinkBuilder::format`](crate::SinkBuilder::format) to preset
/// both samplerate and channel count in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPreset {
    /// 16kHz mono, the format most speech-to-text services expect.
    #[default]
    Transcription,

    /// 44.1kHz stereo.
    CdQuality,

    /// 48kHz stereo.
    Studio,
}

impl FormatPreset {
    /// Returns the samplerate for this preset, in Hz.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        match self {
            Self::Transcription => 16000,
            Self::CdQuality => 44100,
            Self::Studio => 48000,
        }
    }

    /// Returns the channel count for this preset.
    #[must_use]
    pub fn channels(&self) -> u16 {
        match self {
            Self::Transcription => 1,
            Self::CdQuality | Self::Studio => 2,
        }
    }
}
