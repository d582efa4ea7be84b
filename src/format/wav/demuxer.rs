//! WAV file demuxer implementation

use super::header::WavHeader;
use crate::error::{Error, Result};
use crate::format::AudioContainer;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// WAV demuxer reading a whole file into memory
pub struct WavDemuxer<R> {
    reader: R,
    header: WavHeader,
}

impl WavDemuxer<BufReader<File>> {
    /// Open a WAV file and parse its header
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> WavDemuxer<R> {
    /// Parse the WAV header from a reader
    pub fn new(mut reader: R) -> Result<Self> {
        let header = WavHeader::read(&mut reader)?;

        if !header.format.is_pcm() {
            return Err(Error::unsupported(format!(
                "Unsupported WAV format: {:?}",
                header.format.format_tag
            )));
        }

        debug!(
            "WAV header: {} bytes, {} Hz, {} channels, {} bits, {} frames ({:.2}s)",
            header.file_size,
            header.format.sample_rate,
            header.format.channels,
            header.format.bits_per_sample,
            header.num_frames(),
            header.duration_seconds()
        );

        Ok(WavDemuxer { reader, header })
    }

    /// Read the complete payload and return the buffered container
    pub fn read_container(mut self) -> Result<AudioContainer> {
        let format = &self.header.format;

        // The declared size may exceed what the file holds
        let end = self.reader.seek(SeekFrom::End(0))?;
        let available = end.saturating_sub(self.header.data_start);
        let capacity = available.min(self.header.data_size as u64);

        self.reader
            .seek(SeekFrom::Start(self.header.data_start))
            .map_err(|e| Error::format(format!("Failed to seek to data: {}", e)))?;

        let mut frames = Vec::with_capacity(capacity as usize);
        (&mut self.reader)
            .take(self.header.data_size as u64)
            .read_to_end(&mut frames)?;

        if frames.len() < self.header.data_size as usize {
            warn!(
                "data chunk truncated: declared {} bytes, found {}",
                self.header.data_size,
                frames.len()
            );
        }

        let block_align = format.block_align as usize;
        let whole = frames.len() - frames.len() % block_align;
        frames.truncate(whole);

        Ok(AudioContainer {
            sample_rate: format.sample_rate,
            channels: format.channels,
            sample_width: format.sample_width(),
            compression_type: format.compression_type().to_string(),
            compression_name: format.compression_name().to_string(),
            frames,
        })
    }
}
