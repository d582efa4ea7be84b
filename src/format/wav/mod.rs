//! WAV audio format support
//!
//! RIFF/WAVE parsing and writing for integer PCM.

pub mod demuxer;
pub mod header;
pub mod muxer;

pub use demuxer::WavDemuxer;
pub use header::{ChunkHeader, FormatTag, WavFormat, WavHeader};
pub use muxer::WavMuxer;
