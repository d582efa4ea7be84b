//! Payload codecs
//!
//! The raw sample payload of a container is stored in a document in one of
//! three [`Compression`] modes. [`Payload`] carries the stored form for each
//! mode and converts it to and from raw bytes.

pub mod payload;
pub mod pcm;

pub use payload::{Payload, Samples};
pub use pcm::{PcmConfig, PcmDecoder, PcmEncoder, SampleArray};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload representation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Numeric sample array (largest, human readable)
    None,
    /// Raw payload as a base64 string
    Base64,
    /// Gzip-compressed payload as a base64 string (smallest)
    GzipBase64,
}

impl Compression {
    /// All modes, in order of increasing compactness
    pub const ALL: [Compression; 3] = [
        Compression::None,
        Compression::Base64,
        Compression::GzipBase64,
    ];

    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Base64 => "base64",
            Compression::GzipBase64 => "gzip_base64",
        }
    }

    /// Look up a mode by its wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    /// Short human description, used in CLI help
    pub fn description(&self) -> &'static str {
        match self {
            Compression::None => "Store samples as JSON array (largest, most readable)",
            Compression::Base64 => "Store raw data as base64 string (medium size, default)",
            Compression::GzipBase64 => "Compress with gzip then base64 (smallest)",
        }
    }
}

impl FromStr for Compression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Invalid compression type: {}. Use 'none', 'base64', or 'gzip_base64'",
                s
            ))
        })
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
