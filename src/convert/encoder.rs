//! WAV -> JSON encoder

use super::ConversionReport;
use crate::codec::{Compression, Payload, PcmConfig};
use crate::document::{AudioDocument, FileInfo};
use crate::error::{Error, Result};
use crate::format::wav::WavDemuxer;
use crate::format::AudioContainer;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Result of [`encode_file`]
#[derive(Debug, Clone)]
pub struct Encoded {
    /// The document that was written
    pub document: AudioDocument,
    /// Sizes and audio parameters for display
    pub report: ConversionReport,
}

/// Build a document from a buffered container
///
/// `source` is the path recorded in `metadata.notes`.
pub fn encode(
    container: &AudioContainer,
    file_info: FileInfo,
    source: &str,
    mode: Compression,
) -> Result<AudioDocument> {
    let sample_format = container.sample_format()?;
    let config = PcmConfig::new(sample_format, container.channels);

    debug!(
        "Encoding {} frames of {} x {} as {}",
        container.frame_count(),
        config.channels,
        sample_format,
        mode
    );

    let payload = Payload::encode(&container.frames, &config, mode)?;
    AudioDocument::new(container, file_info, source, payload)
}

/// Convert a WAV file to a JSON document at `output`, overwriting it
pub fn encode_file(input: &Path, output: &Path, mode: Compression) -> Result<Encoded> {
    if !input.exists() {
        return Err(Error::NotFound(input.to_path_buf()));
    }

    let wav_size = fs::metadata(input)?.len();
    let container = WavDemuxer::open(input)?.read_container()?;

    let file_info = FileInfo {
        filename: input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_size_bytes: wav_size,
    };

    let document = encode(&container, file_info, &input.to_string_lossy(), mode)?;
    fs::write(output, document.to_json()?)?;

    let json_size = fs::metadata(output)?.len();
    info!(
        "Wrote {} ({} bytes) from {} ({} bytes)",
        output.display(),
        json_size,
        input.display(),
        wav_size
    );

    let report = ConversionReport {
        wav_path: input.to_path_buf(),
        wav_size,
        json_path: output.to_path_buf(),
        json_size,
        compression: mode,
        sample_rate: container.sample_rate,
        channels: container.channels,
        duration_seconds: container.duration_seconds(),
        total_frames: container.frame_count(),
    };

    Ok(Encoded { document, report })
}

/// [`encode_file`] with the mode given by name
///
/// The mode is validated before the filesystem is touched.
pub fn wav_to_json(input: &Path, output: &Path, mode: &str) -> Result<Encoded> {
    let mode: Compression = mode.parse()?;
    encode_file(input, output, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{SampleArray, Samples};

    fn file_info() -> FileInfo {
        FileInfo {
            filename: "a.wav".to_string(),
            file_size_bytes: 0,
        }
    }

    #[test]
    fn test_encode_stereo_u8() {
        let container = AudioContainer::new(8000, 2, 1, vec![1, 2, 3, 4]);
        let doc = encode(&container, file_info(), "a.wav", Compression::None).unwrap();

        assert_eq!(
            doc.data.samples,
            Samples::Array(SampleArray::Frames(vec![vec![1, 2], vec![3, 4]]))
        );
        assert_eq!(doc.data.channel_layout, "2_channels");
        assert_eq!(doc.audio_properties.sample_type, "uint8");
    }

    #[test]
    fn test_encode_rejects_24_bit() {
        let container = AudioContainer::new(48000, 1, 3, vec![0; 9]);
        for mode in Compression::ALL {
            let err = encode(&container, file_info(), "a.wav", mode).unwrap_err();
            assert!(matches!(err, Error::Format(_)));
        }
    }

    #[test]
    fn test_missing_input() {
        let err = encode_file(
            Path::new("definitely/not/here.wav"),
            Path::new("unused.json"),
            Compression::Base64,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_invalid_mode_checked_first() {
        // The input does not exist; the mode error must win
        let err = wav_to_json(
            Path::new("definitely/not/here.wav"),
            Path::new("unused.json"),
            "bzip2",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
