//! Container format handling
//!
//! The only container is RIFF/WAVE. A whole file is read into an
//! [`AudioContainer`] and written back from one; there is no packet-level
//! streaming.

pub mod wav;

use crate::error::Result;
use crate::util::SampleFormat;

/// Fully buffered PCM audio: header parameters plus the interleaved payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioContainer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Bytes per sample (per channel)
    pub sample_width: u16,
    /// Compression type descriptor (passthrough)
    pub compression_type: String,
    /// Compression name descriptor (passthrough)
    pub compression_name: String,
    /// Raw little-endian samples, interleaved by channel within each frame
    pub frames: Vec<u8>,
}

impl AudioContainer {
    /// Create an uncompressed PCM container
    pub fn new(sample_rate: u32, channels: u16, sample_width: u16, frames: Vec<u8>) -> Self {
        AudioContainer {
            sample_rate,
            channels,
            sample_width,
            compression_type: "NONE".to_string(),
            compression_name: "not compressed".to_string(),
            frames,
        }
    }

    /// Bytes per frame (all channels)
    pub fn block_align(&self) -> usize {
        self.channels as usize * self.sample_width as usize
    }

    /// Number of whole frames in the payload
    pub fn frame_count(&self) -> u64 {
        match self.block_align() {
            0 => 0,
            align => (self.frames.len() / align) as u64,
        }
    }

    /// Duration in seconds, 0 when the sample rate is 0
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Resolve the sample format from the sample width
    pub fn sample_format(&self) -> Result<SampleFormat> {
        SampleFormat::from_width(self.sample_width)
    }
}
