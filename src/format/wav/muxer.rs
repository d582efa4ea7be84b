//! WAV file muxer implementation

use super::header::{
    ChunkHeader, WavFormat, DATA_CHUNK, FMT_CHUNK, PCM_FMT_SIZE, RIFF_MAGIC, WAVE_MAGIC,
};
use crate::error::{Error, Result};
use crate::format::AudioContainer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// WAV file muxer
///
/// Writes a canonical 44-byte PCM header followed by the payload. The payload
/// is fully buffered so chunk sizes are known up front.
pub struct WavMuxer<W: Write> {
    writer: W,
}

impl WavMuxer<BufWriter<File>> {
    /// Create (or truncate) a WAV file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> WavMuxer<W> {
    /// Create a new WAV muxer over a writer
    pub fn new(writer: W) -> Self {
        WavMuxer { writer }
    }

    /// Write the header, payload and padding for a container
    pub fn write_container(&mut self, container: &AudioContainer) -> Result<()> {
        let format = WavFormat::pcm(
            container.channels,
            container.sample_rate,
            container.sample_width,
        )?;
        format.validate()?;

        let data_size = u32::try_from(container.frames.len()).map_err(|_| {
            Error::format(format!(
                "Payload of {} bytes exceeds the WAV size limit",
                container.frames.len()
            ))
        })?;
        let pad = (data_size % 2) as usize;

        // RIFF size = 4 (WAVE) + 8 (fmt header) + fmt body + 8 (data header) + data + pad
        let riff_size: u32 = (4 + 8 + PCM_FMT_SIZE as u64 + 8 + data_size as u64 + pad as u64)
            .try_into()
            .map_err(|_| Error::format("RIFF chunk size exceeds 4 GiB"))?;

        self.write_header(&format, riff_size, data_size)?;

        self.writer
            .write_all(&container.frames)
            .map_err(|e| Error::format(format!("Failed to write audio data: {}", e)))?;

        self.write_trailer(pad)
    }

    fn write_header(&mut self, format: &WavFormat, riff_size: u32, data_size: u32) -> Result<()> {
        let w = &mut self.writer;
        let fmt_data = format.to_bytes();

        ChunkHeader::new(*RIFF_MAGIC, riff_size).write_to(w)?;
        w.write_all(WAVE_MAGIC)?;

        ChunkHeader::new(*FMT_CHUNK, fmt_data.len() as u32).write_to(w)?;
        w.write_all(&fmt_data)?;

        ChunkHeader::new(*DATA_CHUNK, data_size).write_to(w)?;

        Ok(())
    }

    fn write_trailer(&mut self, pad: usize) -> Result<()> {
        // WAV chunks are word-aligned
        if pad > 0 {
            self.writer.write_all(&[0u8])?;
        }

        self.writer
            .flush()
            .map_err(|e| Error::format(format!("Failed to flush writer: {}", e)))?;

        Ok(())
    }
}
