//! wavjson - lossless WAV <-> JSON conversion
//!
//! Converts integer PCM WAV files into JSON documents that carry the header
//! parameters and the full sample payload, and back again. A round trip
//! reproduces the original header fields and payload bytes exactly.
//!
//! # Architecture
//!
//! - `format`: WAV header parsing, reading and writing
//! - `codec`: sample arrays and the three payload compression modes
//! - `document`: the serde model of the JSON document
//! - `convert`: the encode (WAV -> JSON) and decode (JSON -> WAV) operations
//! - `util`: sample format mapping and small helpers

pub mod codec;
pub mod convert;
pub mod document;
pub mod error;
pub mod format;
pub mod util;

pub use codec::Compression;
pub use convert::{decode, decode_file, encode, encode_file, wav_to_json, ConversionReport};
pub use document::AudioDocument;
pub use error::{Error, Result};
pub use format::AudioContainer;

/// wavjson version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension given to generated documents
pub const DOCUMENT_EXTENSION: &str = "json";

/// Configuration for the wavjson library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the wavjson library with the given configuration
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to initialize logging: {}", e)))?;
    }

    Ok(())
}
