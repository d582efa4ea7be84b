//! WAV <-> JSON conversion
//!
//! [`encode`] and [`decode`] are pure transforms between an in-memory
//! [`AudioContainer`](crate::format::AudioContainer) and a document.
//! [`encode_file`] and [`decode_file`] add the file handling around them.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode, decode_file};
pub use encoder::{encode, encode_file, wav_to_json, Encoded};

use crate::codec::Compression;
use crate::util::group_thousands;
use std::fmt;
use std::path::PathBuf;

/// Summary of a finished WAV -> JSON conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub wav_path: PathBuf,
    pub wav_size: u64,
    pub json_path: PathBuf,
    pub json_size: u64,
    pub compression: Compression,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_seconds: f64,
    pub total_frames: u64,
}

impl ConversionReport {
    /// JSON size as a percentage of the WAV size
    pub fn size_ratio(&self) -> f64 {
        if self.wav_size == 0 {
            return 0.0;
        }
        self.json_size as f64 / self.wav_size as f64 * 100.0
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion completed!")?;
        writeln!(
            f,
            "WAV file: {} ({} bytes)",
            self.wav_path.display(),
            group_thousands(self.wav_size)
        )?;
        writeln!(
            f,
            "JSON file: {} ({} bytes)",
            self.json_path.display(),
            group_thousands(self.json_size)
        )?;
        writeln!(f, "Compression: {}", self.compression)?;
        writeln!(f, "Size ratio: {:.1}% of original", self.size_ratio())?;
        writeln!(f, "Sample rate: {} Hz", self.sample_rate)?;
        writeln!(f, "Channels: {}", self.channels)?;
        writeln!(f, "Duration: {:.2} seconds", self.duration_seconds)?;
        write!(f, "Total samples: {}", self.total_frames)
    }
}
