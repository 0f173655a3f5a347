//! WAV encoder backed by the `hound` crate.

use std::fs::File;
use std::io::BufWriter;

use super::{Backend, BackendFactory};
use crate::chunk::Sample;
use crate::format::interleave_i16;
use crate::SinkError;

const NAME: &str = "hound";

fn encoder_error(err: hound::Error) -> SinkError {
    SinkError::Encoder {
        backend: NAME,
        reason: err.to_string(),
    }
}

/// Opens [`HoundBackend`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoundFactory;

impl BackendFactory for HoundFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn try_open(
        &self,
        uri: &str,
        samplerate: u32,
        channels: u16,
    ) -> Result<Box<dyn Backend>, SinkError> {
        Ok(Box::new(HoundBackend::create(uri, samplerate, channels)?))
    }
}

/// Writes 16-bit integer WAV files through [`hound::WavWriter`].
pub struct HoundBackend {
    writer: Option<hound::WavWriter<BufWriter<File>>>,
    channels: u16,
}

impl HoundBackend {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &str, samplerate: u32, channels: u16) -> Result<Self, SinkError> {
        let spec = hound::WavSpec {
            channels,
            sample_rate: samplerate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let writer = hound::WavWriter::create(path, spec).map_err(|e| match e {
            hound::Error::IoError(source) => SinkError::file_error(path, source),
            other => encoder_error(other),
        })?;
        Ok(Self {
            writer: Some(writer),
            channels,
        })
    }

    fn write_interleaved(&mut self, pcm: &[i16]) -> Result<(), SinkError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| SinkError::write_failed("hound writer is already closed"))?;
        for &sample in pcm {
            writer.write_sample(sample).map_err(encoder_error)?;
        }
        Ok(())
    }
}

impl Backend for HoundBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn write_mono(&mut self, samples: &[Sample]) -> Result<(), SinkError> {
        let rows = vec![samples; usize::from(self.channels)];
        let pcm = interleave_i16(&rows, usize::from(self.channels));
        self.write_interleaved(&pcm)
    }

    fn write_multi(&mut self, rows: &[&[Sample]]) -> Result<(), SinkError> {
        let pcm = interleave_i16(rows, usize::from(self.channels));
        self.write_interleaved(&pcm)
    }

    fn close(&mut self) -> Result<(), SinkError> {
        match self.writer.take() {
            Some(writer) => writer.finalize().map_err(|e| SinkError::CloseFailed {
                backend: NAME,
                reason: e.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        // hound patches the header when the writer is dropped.
        self.writer = None;
    }
}
