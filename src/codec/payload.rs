//! Stored payload forms and their conversions

use super::pcm::{PcmConfig, PcmDecoder, PcmEncoder, SampleArray};
use super::Compression;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::debug;

/// `data.samples` as it appears in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Samples {
    /// Numeric sample array
    Array(SampleArray),
    /// Base64 text
    Encoded(String),
}

/// A payload in one of the stored forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Numeric samples, range-checked by construction
    Samples(SampleArray),
    /// Base64 of the raw payload
    Base64(String),
    /// Base64 of the gzip-compressed raw payload
    GzipBase64(String),
}

impl Payload {
    /// Convert a raw payload into the stored form for `mode`
    pub fn encode(frames: &[u8], config: &PcmConfig, mode: Compression) -> Result<Self> {
        let payload = match mode {
            Compression::None => Payload::Samples(PcmDecoder::new(*config).decode(frames)?),
            Compression::Base64 => Payload::Base64(STANDARD.encode(frames)),
            Compression::GzipBase64 => Payload::GzipBase64(STANDARD.encode(gzip(frames)?)),
        };
        Ok(payload)
    }

    /// Rebuild a payload from a document's compression tag and samples
    ///
    /// The samples must have the shape the tag implies.
    pub fn from_parts(compression: Compression, samples: Samples) -> Result<Self> {
        match (compression, samples) {
            (Compression::None, Samples::Array(array)) => Ok(Payload::Samples(array)),
            (Compression::Base64, Samples::Encoded(text)) => Ok(Payload::Base64(text)),
            (Compression::GzipBase64, Samples::Encoded(text)) => Ok(Payload::GzipBase64(text)),
            (Compression::None, Samples::Encoded(_)) => Err(Error::format(
                "Compression 'none' requires a sample array, found a string",
            )),
            (mode, Samples::Array(_)) => Err(Error::format(format!(
                "Compression '{}' requires an encoded string, found an array",
                mode
            ))),
        }
    }

    /// Split into the compression tag and document samples
    pub fn into_parts(self) -> (Compression, Samples) {
        match self {
            Payload::Samples(array) => (Compression::None, Samples::Array(array)),
            Payload::Base64(text) => (Compression::Base64, Samples::Encoded(text)),
            Payload::GzipBase64(text) => (Compression::GzipBase64, Samples::Encoded(text)),
        }
    }

    /// `data.data_format` label
    pub fn data_format(&self) -> &'static str {
        match self {
            Payload::Samples(_) => "sample_array",
            Payload::Base64(_) | Payload::GzipBase64(_) => "raw_binary_base64",
        }
    }

    /// Reconstruct the raw payload bytes
    pub fn decode(&self, config: &PcmConfig) -> Result<Vec<u8>> {
        match self {
            Payload::Samples(array) => PcmEncoder::new(*config).encode(array),
            Payload::Base64(text) => unbase64(text),
            Payload::GzipBase64(text) => gunzip(&unbase64(text)?),
        }
    }
}

fn unbase64(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| Error::format(format!("Invalid base64 payload: {}", e)))
}

fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::best());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;
    debug!("gzip: {} -> {} bytes", data.len(), compressed.len());
    Ok(compressed)
}

fn gunzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    MultiGzDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| Error::format(format!("Invalid gzip payload: {}", e)))?;
    Ok(out)
}
