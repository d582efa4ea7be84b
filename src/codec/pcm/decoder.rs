//! PCM decoder implementation

use super::{PcmConfig, SampleArray};
use crate::error::{Error, Result};

/// PCM decoder: raw interleaved bytes to sample values
pub struct PcmDecoder {
    config: PcmConfig,
}

impl PcmDecoder {
    /// Create a new PCM decoder
    pub fn new(config: PcmConfig) -> Self {
        PcmDecoder { config }
    }

    /// Decode a raw payload into a sample array
    pub fn decode(&self, data: &[u8]) -> Result<SampleArray> {
        let bytes_per_frame = self.config.bytes_per_frame();
        if bytes_per_frame == 0 {
            return Err(Error::format("Invalid channel count: 0"));
        }
        if data.len() % bytes_per_frame != 0 {
            return Err(Error::format(format!(
                "Payload of {} bytes is not a whole number of {}-byte frames",
                data.len(),
                bytes_per_frame
            )));
        }

        let samples = self.config.sample_format.unpack(data)?;

        if self.config.channels == 1 {
            return Ok(SampleArray::Mono(samples));
        }

        // Group interleaved samples into one entry per frame
        let frames = samples
            .chunks_exact(self.config.channels as usize)
            .map(|frame| frame.to_vec())
            .collect();

        Ok(SampleArray::Frames(frames))
    }
}
