//! Common test utilities for wavjson integration tests
//!
//! Helpers for synthesizing WAV files and sample payloads.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// WAV Synthesis
// ============================================================================

/// Build a canonical PCM WAV file (44-byte header, padded data chunk)
pub fn wav_bytes(sample_rate: u32, channels: u16, sample_width: u16, data: &[u8]) -> Vec<u8> {
    wav_bytes_with_format(1, sample_rate, channels, sample_width, data)
}

/// Build a canonical WAV file with an explicit format tag
pub fn wav_bytes_with_format(
    format_tag: u16,
    sample_rate: u32,
    channels: u16,
    sample_width: u16,
    data: &[u8],
) -> Vec<u8> {
    let block_align = channels * sample_width;
    let byte_rate = sample_rate * block_align as u32;
    let pad = data.len() % 2;
    let riff_size = 36 + data.len() as u32 + pad as u32;

    let mut out = Vec::with_capacity(44 + data.len() + pad);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&format_tag.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&(sample_width * 8).to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    if pad == 1 {
        out.push(0);
    }

    out
}

/// Little-endian 16-bit payload from sample values
pub fn i16_payload(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Little-endian 32-bit payload from sample values
pub fn i32_payload(samples: &[i32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Interleaved 16-bit sine tone, the same signal on every channel
pub fn sine_i16(sample_rate: u32, channels: u16, frames: usize, frequency: f64) -> Vec<u8> {
    let mut data = Vec::with_capacity(frames * channels as usize * 2);
    for i in 0..frames {
        let t = i as f64 / sample_rate as f64;
        let sample =
            ((2.0 * std::f64::consts::PI * frequency * t).sin() * 0.5 * i16::MAX as f64) as i16;
        for _ in 0..channels {
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

// ============================================================================
// Scratch Files
// ============================================================================

/// Write `bytes` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create file");
    file.write_all(bytes).expect("Failed to write file");
    path
}

/// Create a scratch directory holding one WAV file
pub fn temp_wav(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_file(dir.path(), name, bytes);
    (dir, path)
}
