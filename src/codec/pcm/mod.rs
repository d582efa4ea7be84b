//! PCM (Pulse Code Modulation) sample arrays
//!
//! Converts between the raw interleaved payload of a container and the
//! numeric sample arrays stored in uncompressed documents. Mono audio is a
//! flat list of samples; multi-channel audio is a list of per-frame groups.

pub mod decoder;
pub mod encoder;

pub use decoder::PcmDecoder;
pub use encoder::PcmEncoder;

use crate::util::SampleFormat;
use serde::{Deserialize, Serialize};

/// Numeric sample values in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleArray {
    /// One value per frame
    Mono(Vec<i64>),
    /// One group of `channels` values per frame
    Frames(Vec<Vec<i64>>),
}

impl SampleArray {
    /// Number of frames represented
    pub fn frame_count(&self) -> usize {
        match self {
            SampleArray::Mono(values) => values.len(),
            SampleArray::Frames(frames) => frames.len(),
        }
    }
}

/// PCM layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmConfig {
    /// Sample format
    pub sample_format: SampleFormat,
    /// Number of channels
    pub channels: u16,
}

impl PcmConfig {
    /// Create a new PCM configuration
    pub fn new(sample_format: SampleFormat, channels: u16) -> Self {
        PcmConfig {
            sample_format,
            channels,
        }
    }

    /// Get bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> usize {
        self.sample_format.sample_size()
    }

    /// Get bytes per frame (all channels)
    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Calculate number of frames from byte count
    pub fn frames_from_bytes(&self, bytes: usize) -> usize {
        match self.bytes_per_frame() {
            0 => 0,
            per_frame => bytes / per_frame,
        }
    }

    /// Channel layout label (`mono` or `<n>_channels`)
    pub fn channel_layout(&self) -> String {
        if self.channels == 1 {
            "mono".to_string()
        } else {
            format!("{}_channels", self.channels)
        }
    }
}
