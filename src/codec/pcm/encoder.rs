//! PCM encoder implementation

use super::{PcmConfig, SampleArray};
use crate::error::{Error, Result};

/// PCM encoder: sample values to raw interleaved bytes
pub struct PcmEncoder {
    config: PcmConfig,
}

impl PcmEncoder {
    /// Create a new PCM encoder
    pub fn new(config: PcmConfig) -> Self {
        PcmEncoder { config }
    }

    /// Encode a sample array into a raw little-endian payload
    pub fn encode(&self, samples: &SampleArray) -> Result<Vec<u8>> {
        let channels = self.config.channels as usize;
        let format = self.config.sample_format;
        let mut out = Vec::with_capacity(samples.frame_count() * self.config.bytes_per_frame());

        match samples {
            SampleArray::Mono(values) if channels == 1 || values.is_empty() => {
                format.pack(values, &mut out)?;
            }
            SampleArray::Mono(_) => {
                return Err(Error::format(format!(
                    "Expected per-frame sample groups for {} channels",
                    channels
                )));
            }
            SampleArray::Frames(_) if channels == 1 => {
                return Err(Error::format("Expected a flat sample list for mono audio"));
            }
            SampleArray::Frames(frames) => {
                for (index, frame) in frames.iter().enumerate() {
                    if frame.len() != channels {
                        return Err(Error::format(format!(
                            "Frame {} has {} samples, expected {}",
                            index,
                            frame.len(),
                            channels
                        )));
                    }
                    format.pack(frame, &mut out)?;
                }
            }
        }

        Ok(out)
    }
}
