//! JSON document model
//!
//! A document holds the descriptive groups (`file_info`, `format`,
//! `metadata`) and the groups needed to rebuild the audio
//! (`audio_properties`, `data`). Decoding reads only the latter through
//! [`DocumentView`], so descriptive groups may be missing or altered.

use crate::codec::{Compression, Payload, PcmConfig, Samples};
use crate::error::{Error, Result};
use crate::format::AudioContainer;
use serde::{Deserialize, Serialize};

/// Format name written to `format.format_name`
pub const FORMAT_NAME: &str = "WAV";

/// Tool name written to `metadata.created_by`
pub const CREATED_BY: &str = "WAV to JSON Converter";

/// Complete document as produced by the encoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioDocument {
    pub file_info: FileInfo,
    pub format: FormatInfo,
    pub audio_properties: AudioProperties,
    pub data: AudioData,
    pub metadata: DocumentMetadata,
}

/// Source file description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Base name of the source file
    pub filename: String,
    /// Size of the source file in bytes
    pub file_size_bytes: u64,
}

/// Container format description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    pub format_name: String,
    pub compression_type: String,
    pub compression_name: String,
}

/// Audio parameters, including derived values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioProperties {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub sample_width_bytes: u16,
    pub sample_type: String,
    pub total_frames: u64,
    pub duration_seconds: f64,
    pub bit_depth: u16,
}

/// The payload and its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioData {
    pub samples: Samples,
    pub samples_count: u64,
    pub channel_layout: String,
    pub compression: Compression,
    pub data_format: String,
}

/// Provenance notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub created_by: String,
    pub notes: String,
}

impl AudioDocument {
    /// Assemble a document from a container and its stored payload
    pub fn new(
        container: &AudioContainer,
        file_info: FileInfo,
        source: &str,
        payload: Payload,
    ) -> Result<Self> {
        let sample_format = container.sample_format()?;
        let config = PcmConfig::new(sample_format, container.channels);
        let frame_count = container.frame_count();
        let data_format = payload.data_format().to_string();
        let (compression, samples) = payload.into_parts();

        Ok(AudioDocument {
            file_info,
            format: FormatInfo {
                format_name: FORMAT_NAME.to_string(),
                compression_type: container.compression_type.clone(),
                compression_name: container.compression_name.clone(),
            },
            audio_properties: AudioProperties {
                sample_rate_hz: container.sample_rate,
                channels: container.channels,
                sample_width_bytes: container.sample_width,
                sample_type: sample_format.type_name().to_string(),
                total_frames: frame_count,
                duration_seconds: container.duration_seconds(),
                bit_depth: sample_format.bit_depth(),
            },
            data: AudioData {
                samples,
                samples_count: frame_count,
                channel_layout: config.channel_layout(),
                compression,
                data_format,
            },
            metadata: DocumentMetadata {
                created_by: CREATED_BY.to_string(),
                notes: format!("Converted from {}", source),
            },
        })
    }

    /// Serialize to compact JSON (no whitespace, non-ASCII left unescaped)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The parts of a document the decoder reads
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentView {
    pub audio_properties: PropertiesView,
    pub data: DataView,
}

/// Reconstruction parameters from `audio_properties`
#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesView {
    pub sample_rate_hz: u32,
    pub channels: u16,
    pub sample_width_bytes: u16,
    /// Informational only
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_frames: Option<u64>,
}

/// Payload fields from `data`
#[derive(Debug, Clone, Deserialize)]
pub struct DataView {
    pub samples: Samples,
    /// Missing tags mean an uncompressed sample array
    #[serde(default)]
    pub compression: Option<String>,
}

impl DocumentView {
    /// Parse the reconstruction parts of a JSON document
    ///
    /// Input that is not UTF-8 JSON is a format error.
    pub fn from_json<T: AsRef<[u8]>>(document: T) -> Result<Self> {
        Ok(serde_json::from_slice(document.as_ref())?)
    }

    /// Resolve the compression tag, defaulting to `none`
    pub fn compression(&self) -> Result<Compression> {
        match self.data.compression.as_deref() {
            None => Ok(Compression::None),
            Some(name) => Compression::parse(name)
                .ok_or_else(|| Error::format(format!("Unsupported compression type: {}", name))),
        }
    }
}

/// Accept any JSON value for an informational count, keeping it only if numeric
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64())
}
