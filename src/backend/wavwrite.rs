//! Native 16-bit PCM WAV encoder.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::PathBuf;

use super::{Backend, BackendFactory};
use crate::chunk::Sample;
use crate::format::interleave_i16;
use crate::SinkError;

// WAV file format constants
// See: http://soundfile.sapp.org/doc/WaveFormat/

/// Byte offset of the file size field in WAV header (RIFF chunk size).
const WAV_FILE_SIZE_OFFSET: u64 = 4;

/// Byte offset of the data chunk size field in WAV header.
const WAV_DATA_SIZE_OFFSET: u64 = 40;

/// Size of the WAV header in bytes (RIFF + fmt + data chunk headers).
pub(crate) const WAV_HEADER_SIZE: usize = 44;

/// Size of the fmt chunk data (16 bytes for PCM).
const WAV_FMT_CHUNK_SIZE: u32 = 16;

/// Audio format code for PCM (uncompressed).
const WAV_FORMAT_PCM: u16 = 1;

/// Bits per sample for 16-bit audio.
const WAV_BITS_PER_SAMPLE: u16 = 16;

/// Bytes per sample (16-bit = 2 bytes).
const BYTES_PER_SAMPLE: u64 = 2;

const NAME: &str = "wavwrite";

/// Opens [`WavWriteBackend`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct WavWriteFactory;

impl BackendFactory for WavWriteFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn try_open(
        &self,
        uri: &str,
        samplerate: u32,
        channels: u16,
    ) -> Result<Box<dyn Backend>, SinkError> {
        Ok(Box::new(WavWriteBackend::create(uri, samplerate, channels)?))
    }
}

/// Writes 16-bit PCM RIFF/WAV files.
///
/// The header is written with zero sizes when the file is created and patched
/// with the real sizes on [`close`](Backend::close).
pub struct WavWriteBackend {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    channels: u16,
    frames_written: u64,
}

impl WavWriteBackend {
    /// Creates (or truncates) the file at `path` and writes a placeholder header.
    pub fn create(
        path: impl Into<PathBuf>,
        samplerate: u32,
        channels: u16,
    ) -> Result<Self, SinkError> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| SinkError::file_error(&path, e))?;
        let mut writer = BufWriter::new(file);
        Self::write_wav_header(&mut writer, samplerate, channels, 0)
            .map_err(|e| SinkError::file_error(&path, e))?;

        Ok(Self {
            path,
            writer: Some(writer),
            channels,
            frames_written: 0,
        })
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Writes a complete WAV header with the given parameters.
    fn write_wav_header(
        writer: &mut BufWriter<File>,
        samplerate: u32,
        channels: u16,
        data_size: u32,
    ) -> std::io::Result<()> {
        // RIFF container header
        writer.write_all(b"RIFF")?;
        let file_size = (WAV_HEADER_SIZE as u32 - 8).saturating_add(data_size);
        writer.write_all(&file_size.to_le_bytes())?;
        writer.write_all(b"WAVE")?;

        // fmt subchunk
        writer.write_all(b"fmt ")?;
        writer.write_all(&WAV_FMT_CHUNK_SIZE.to_le_bytes())?;
        writer.write_all(&WAV_FORMAT_PCM.to_le_bytes())?;
        writer.write_all(&channels.to_le_bytes())?;
        writer.write_all(&samplerate.to_le_bytes())?;

        let bytes_per_sample = WAV_BITS_PER_SAMPLE / 8;
        let byte_rate = samplerate
            .saturating_mul(u32::from(channels))
            .saturating_mul(u32::from(bytes_per_sample));
        writer.write_all(&byte_rate.to_le_bytes())?;

        let block_align = channels.saturating_mul(bytes_per_sample);
        writer.write_all(&block_align.to_le_bytes())?;
        writer.write_all(&WAV_BITS_PER_SAMPLE.to_le_bytes())?;

        // data subchunk header
        writer.write_all(b"data")?;
        writer.write_all(&data_size.to_le_bytes())?;

        Ok(())
    }

    /// Patches the RIFF and data sizes, then seeks back to the end.
    fn update_wav_header(writer: &mut BufWriter<File>, data_size: u32) -> std::io::Result<()> {
        let file_size = (WAV_HEADER_SIZE as u32 - 8).saturating_add(data_size);
        writer.seek(SeekFrom::Start(WAV_FILE_SIZE_OFFSET))?;
        writer.write_all(&file_size.to_le_bytes())?;

        writer.seek(SeekFrom::Start(WAV_DATA_SIZE_OFFSET))?;
        writer.write_all(&data_size.to_le_bytes())?;

        writer.seek(SeekFrom::End(0))?;
        Ok(())
    }

    fn write_frames(&mut self, pcm: &[i16]) -> Result<(), SinkError> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(SinkError::write_failed(format!(
                "{} is already closed",
                self.path.display()
            )));
        };
        for sample in pcm {
            writer
                .write_all(&sample.to_le_bytes())
                .map_err(|e| SinkError::file_error(&self.path, e))?;
        }
        self.frames_written += (pcm.len() / usize::from(self.channels.max(1))) as u64;
        Ok(())
    }
}

impl Backend for WavWriteBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn write_mono(&mut self, samples: &[Sample]) -> Result<(), SinkError> {
        let rows = vec![samples; usize::from(self.channels)];
        let pcm = interleave_i16(&rows, usize::from(self.channels));
        self.write_frames(&pcm)
    }

    fn write_multi(&mut self, rows: &[&[Sample]]) -> Result<(), SinkError> {
        let pcm = interleave_i16(rows, usize::from(self.channels));
        self.write_frames(&pcm)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        let data_size = self.frames_written * u64::from(self.channels) * BYTES_PER_SAMPLE;
        let data_size = u32::try_from(data_size).unwrap_or(u32::MAX);

        Self::update_wav_header(&mut writer, data_size)
            .and_then(|()| writer.flush())
            .map_err(|e| SinkError::file_error(&self.path, e))
    }

    fn release(&mut self) {
        self.writer = None;
    }
}
