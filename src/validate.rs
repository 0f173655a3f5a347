//! Parameter bounds and safe write sizes.
//!
//! Every function takes a component tag (`kind`) and the destination `uri`,
//! used only for diagnostics. Rejections are logged at error level, clamps at
//! warn level. Nothing here touches sink state.

use crate::config::{MAX_CHANNELS, MAX_SAMPLERATE};
use crate::event::WriteLimit;
use crate::SinkError;

/// Checks that `samplerate` is positive and at most [`MAX_SAMPLERATE`].
///
/// # Errors
///
/// Returns [`SinkError::InvalidSamplerate`] or [`SinkError::SamplerateTooLarge`].
pub fn validate_samplerate(kind: &str, uri: &str, samplerate: u32) -> Result<(), SinkError> {
    if samplerate == 0 {
        tracing::error!(
            kind,
            uri,
            "failed creating {uri}, samplerate should be positive, not {samplerate}"
        );
        return Err(SinkError::InvalidSamplerate {
            uri: uri.to_string(),
            samplerate,
        });
    }
    if samplerate > MAX_SAMPLERATE {
        tracing::error!(
            kind,
            uri,
            "failed creating {uri}, samplerate {samplerate}Hz is too large"
        );
        return Err(SinkError::SamplerateTooLarge {
            uri: uri.to_string(),
            samplerate,
            max: MAX_SAMPLERATE,
        });
    }
    Ok(())
}

/// Checks that `channels` is positive and at most [`MAX_CHANNELS`].
///
/// # Errors
///
/// Returns [`SinkError::InvalidChannels`] or [`SinkError::TooManyChannels`].
pub fn validate_channels(kind: &str, uri: &str, channels: u16) -> Result<(), SinkError> {
    if channels == 0 {
        tracing::error!(
            kind,
            uri,
            "failed creating {uri}, channels should be positive, not {channels}"
        );
        return Err(SinkError::InvalidChannels {
            uri: uri.to_string(),
            channels,
        });
    }
    if channels > MAX_CHANNELS {
        tracing::error!(
            kind,
            uri,
            "failed creating {uri}, too many channels ({channels} but {MAX_CHANNELS} available)"
        );
        return Err(SinkError::TooManyChannels {
            uri: uri.to_string(),
            channels,
            max: MAX_CHANNELS,
        });
    }
    Ok(())
}

/// Returns `min(max_block_size, requested, available)`.
///
/// Logs a warning for each limit that shortens the write, naming whether the
/// backend's per-call limit or the supplied input was the cause.
pub fn clamp_write_length(
    kind: &str,
    uri: &str,
    max_block_size: usize,
    requested: usize,
    available: usize,
) -> usize {
    clamp_write_length_with_limit(kind, uri, max_block_size, requested, available).0
}

/// Like [`clamp_write_length`], also reporting the last limit that applied.
pub(crate) fn clamp_write_length_with_limit(
    kind: &str,
    uri: &str,
    max_block_size: usize,
    requested: usize,
    available: usize,
) -> (usize, Option<WriteLimit>) {
    let mut can_write = requested;
    let mut limit = None;

    if requested > max_block_size {
        tracing::warn!(
            kind,
            uri,
            "partial write to {uri}, trying to write {requested} frames, \
             at most {max_block_size} can be written at once"
        );
        can_write = max_block_size;
        limit = Some(WriteLimit::BackendBlockSize);
    }

    if can_write > available {
        tracing::warn!(
            kind,
            uri,
            "partial write to {uri}, trying to write {requested} frames, \
             but found input of length {available}"
        );
        can_write = available;
        limit = Some(WriteLimit::InputLength);
    }

    (can_write, limit)
}

/// Returns `min(sink_channels, supplied_rows)`.
///
/// Logs a warning when the block has fewer rows than the sink has channels.
/// Extra rows are ignored silently.
pub fn clamp_write_channels(
    kind: &str,
    uri: &str,
    sink_channels: usize,
    supplied_rows: usize,
) -> usize {
    if supplied_rows < sink_channels {
        tracing::warn!(
            kind,
            uri,
            "partial write to {uri}, trying to write {sink_channels} channels, \
             but found input of height {supplied_rows}"
        );
        return supplied_rows;
    }
    sink_channels
}
