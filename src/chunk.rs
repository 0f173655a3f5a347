//! Sample blocks accepted by [`Sink`](crate::Sink) writes.

use crate::SinkError;

/// A single audio sample, nominally in the range [-1.0, 1.0].
pub type Sample = f32;

/// A multi-channel block of samples.
///
/// Rows are channels and every row holds the same number of frames. Mono
/// writes take a plain `&[Sample]` instead.
///
/// # Example
///
/// ```
/// use audio_file_sink::MultiBlock;
///
/// let mut block = MultiBlock::new(2, 512);
/// block.row_mut(1)[0] = 0.5;
/// assert_eq!(block.height(), 2);
/// assert_eq!(block.length(), 512);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiBlock {
    rows: Vec<Vec<Sample>>,
    length: usize,
}

impl MultiBlock {
    /// Creates a zeroed block of `channels` rows with `length` frames each.
    pub fn new(channels: usize, length: usize) -> Self {
        Self {
            rows: vec![vec![0.0; length]; channels],
            length,
        }
    }

    /// Creates a block from existing rows.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::InvalidBlock`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Sample>>) -> Result<Self, SinkError> {
        let length = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != length) {
            return Err(SinkError::InvalidBlock {
                reason: format!(
                    "row {index} has {} frames, expected {length}",
                    row.len()
                ),
            });
        }
        Ok(Self { rows, length })
    }

    /// Number of channel rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of frames per row.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= self.height()`.
    pub fn row(&self, channel: usize) -> &[Sample] {
        &self.rows[channel]
    }

    /// Returns the samples of one channel for modification.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= self.height()`.
    pub fn row_mut(&mut self, channel: usize) -> &mut [Sample] {
        &mut self.rows[channel]
    }

    /// Iterates over the channel rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Sample]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Borrows the top-left `channels` x `frames` corner of the block.
    ///
    /// Both values are capped at the block's own dimensions.
    pub(crate) fn sub_block(&self, channels: usize, frames: usize) -> Vec<&[Sample]> {
        let frames = frames.min(self.length);
        self.rows
            .iter()
            .take(channels)
            .map(|row| &row[..frames])
            .collect()
    }

    /// Returns `true` if the block holds no frames.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.length == 0
    }
}
