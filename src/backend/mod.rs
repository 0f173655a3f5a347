//! Encoder backends and the compiled-in priority list.
//!
//! A [`BackendFactory`] decides whether it can write a destination and, if so,
//! opens a [`Backend`]. The [`Sink`](crate::Sink) walks an ordered list of
//! factories and keeps the first backend that opens. Two encoders ship with
//! the crate:
//!
//! - `hound`: WAV via the `hound` crate (feature `hound-backend`, on by default)
//! - `wavwrite`: a native 16-bit PCM RIFF writer, always available
//!
//! Implement both traits to plug in another encoder and pass it through
//! [`SinkBuilder::backends`](crate::SinkBuilder::backends).

#[cfg(feature = "hound-backend")]
mod hound_wav;
pub mod mock;
mod wavwrite;

#[cfg(feature = "hound-backend")]
pub use hound_wav::{HoundBackend, HoundFactory};
pub use wavwrite::{WavWriteBackend, WavWriteFactory};

use std::sync::Arc;

use crate::chunk::Sample;
use crate::config::DEFAULT_MAX_BLOCK_SIZE;
use crate::SinkError;

/// An ordered list of backend factories, highest priority first.
pub type BackendList = Vec<Arc<dyn BackendFactory>>;

/// Opens backends for a destination.
///
/// # Implementation Notes
///
/// - `try_open` returns `Err` both when the destination is not something this
///   backend handles and when opening genuinely failed; the sink treats the two
///   the same and moves on to the next factory
/// - `samplerate` and `channels` are already validated when `try_open` is called
pub trait BackendFactory: Send + Sync {
    /// Backend name for logging and events.
    fn name(&self) -> &'static str;

    /// Opens `uri` for writing.
    fn try_open(
        &self,
        uri: &str,
        samplerate: u32,
        channels: u16,
    ) -> Result<Box<dyn Backend>, SinkError>;
}

/// An open encoder writing to one destination.
///
/// The sink clamps every block before calling `write_mono`/`write_multi`:
/// frame counts never exceed [`max_block_size`](Backend::max_block_size) and
/// `rows.len()` never exceeds the channel count the backend was opened with.
/// A block with fewer rows than channels leaves the missing channels silent.
pub trait Backend: Send {
    /// Backend name for logging and events.
    fn name(&self) -> &'static str;

    /// Largest number of frames accepted per write call.
    fn max_block_size(&self) -> usize {
        DEFAULT_MAX_BLOCK_SIZE
    }

    /// Writes one mono block.
    ///
    /// On a multi-channel destination the samples are written to every channel.
    fn write_mono(&mut self, samples: &[Sample]) -> Result<(), SinkError>;

    /// Writes one block of channel rows of equal length.
    fn write_multi(&mut self, rows: &[&[Sample]]) -> Result<(), SinkError>;

    /// Finalizes the destination. Calling it again after success is a no-op.
    fn close(&mut self) -> Result<(), SinkError>;

    /// Frees any remaining resources.
    ///
    /// Must be idempotent and must not fail.
    fn release(&mut self) {}
}

/// Returns the backends compiled into this build, in priority order.
pub fn compiled_backends() -> BackendList {
    let mut backends: BackendList = Vec::new();
    #[cfg(feature = "hound-backend")]
    backends.push(Arc::new(HoundFactory));
    backends.push(Arc::new(WavWriteFactory));
    backends
}
