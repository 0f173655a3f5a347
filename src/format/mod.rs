//! Sample quantization for the bundled PCM encoders.
//!
//! - Float to 16-bit integer conversion
//! - Channel-major rows to interleaved frames

mod convert;

pub use convert::{interleave_i16, sample_to_i16};
