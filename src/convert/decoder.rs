//! JSON -> WAV decoder

use crate::codec::{Payload, PcmConfig};
use crate::document::DocumentView;
use crate::error::{Error, Result};
use crate::format::wav::WavMuxer;
use crate::format::AudioContainer;
use crate::util::SampleFormat;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Rebuild a container from a JSON document
///
/// Only `audio_properties` and `data` are consulted. `total_frames` is
/// informational: a mismatch is logged, not rejected.
pub fn decode<T: AsRef<[u8]>>(document: T) -> Result<AudioContainer> {
    let view = DocumentView::from_json(document)?;
    let compression = view.compression()?;
    let props = &view.audio_properties;

    if props.channels == 0 {
        return Err(Error::format("Invalid channel count: 0"));
    }

    let sample_format = SampleFormat::from_width(props.sample_width_bytes)?;
    let config = PcmConfig::new(sample_format, props.channels);

    let payload = Payload::from_parts(compression, view.data.samples)?;
    let frames = payload.decode(&config)?;

    let bytes_per_frame = config.bytes_per_frame();
    if frames.len() % bytes_per_frame != 0 {
        return Err(Error::format(format!(
            "Decoded payload of {} bytes is not a whole number of {}-byte frames",
            frames.len(),
            bytes_per_frame
        )));
    }

    let frame_count = config.frames_from_bytes(frames.len()) as u64;
    if let Some(declared) = props.total_frames {
        if declared != frame_count {
            warn!(
                "Document declares {} frames but payload holds {}",
                declared, frame_count
            );
        }
    }

    Ok(AudioContainer::new(
        props.sample_rate_hz,
        props.channels,
        props.sample_width_bytes,
        frames,
    ))
}

/// Convert a JSON document file back into a WAV file at `output`
pub fn decode_file(document: &Path, output: &Path) -> Result<AudioContainer> {
    if !document.exists() {
        return Err(Error::NotFound(document.to_path_buf()));
    }

    let bytes = fs::read(document)?;
    let container = decode(&bytes)?;

    WavMuxer::create(output)?.write_container(&container)?;
    info!("Reconstruction completed: {}", output.display());

    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mono_samples() {
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":1,
            "sample_width_bytes":2,"total_frames":4},
            "data":{"samples":[100,-100,200,-200],"compression":"none"}}"#;
        let container = decode(json).unwrap();
        assert_eq!(
            container.frames,
            vec![0x64, 0x00, 0x9C, 0xFF, 0xC8, 0x00, 0x38, 0xFF]
        );
        assert_eq!(container.sample_rate, 8000);
    }

    #[test]
    fn test_missing_compression_defaults_to_none() {
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":2,
            "sample_width_bytes":1},"data":{"samples":[[1,2],[3,4]]}}"#;
        assert_eq!(decode(json).unwrap().frames, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_frame_count_mismatch_is_tolerated() {
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":1,
            "sample_width_bytes":1,"total_frames":99},
            "data":{"samples":"AQID","compression":"base64","samples_count":99}}"#;
        assert_eq!(decode(json).unwrap().frames, vec![1, 2, 3]);
    }

    #[test]
    fn test_partial_frame_rejected() {
        // 3 bytes cannot hold whole 16-bit stereo frames
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":2,
            "sample_width_bytes":2},"data":{"samples":"AQID","compression":"base64"}}"#;
        assert!(matches!(decode(json), Err(Error::Format(_))));
    }

    #[test]
    fn test_unsupported_width_rejected() {
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":1,
            "sample_width_bytes":3},"data":{"samples":"AQID","compression":"base64"}}"#;
        assert!(matches!(decode(json), Err(Error::Format(_))));
    }

    #[test]
    fn test_unknown_compression_rejected() {
        let json = r#"{"audio_properties":{"sample_rate_hz":8000,"channels":1,
            "sample_width_bytes":1},"data":{"samples":"AQID","compression":"brotli"}}"#;
        assert!(matches!(decode(json), Err(Error::Format(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(decode("{\"audio_properties\":"), Err(Error::Format(_))));
        assert!(matches!(decode("[]"), Err(Error::Format(_))));
    }

    #[test]
    fn test_missing_document() {
        let err = decode_file(Path::new("no/such/doc.json"), Path::new("out.wav")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
