//! Float-to-PCM conversion and interleaving.

use crate::chunk::Sample;

/// Converts one sample to 16-bit PCM.
///
/// Input should be in the range [-1.0, 1.0]; values outside are clamped.
///
/// Uses × 32767 (not 32768) for symmetric scaling, so -1.0 maps to -32767.
#[inline]
pub fn sample_to_i16(sample: Sample) -> i16 {
    (sample * 32767.0).clamp(-32768.0, 32767.0) as i16
}

/// Interleaves channel rows into `channels`-wide 16-bit PCM frames.
///
/// `rows[c][f]` lands at index `f * channels + c`. Rows past `channels` are
/// ignored and channels without a row are written as silence. The frame count
/// is taken from the shortest row.
pub fn interleave_i16(rows: &[&[Sample]], channels: usize) -> Vec<i16> {
    let frames = rows.iter().map(|row| row.len()).min().unwrap_or(0);
    let mut out = vec![0i16; frames * channels];
    for (c, row) in rows.iter().take(channels).enumerate() {
        for (f, &sample) in row[..frames].iter().enumerate() {
            out[f * channels + c] = sample_to_i16(sample);
        }
    }
    out
}
