//! WAV file header structures and parsing

use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Seek, SeekFrom, Write};

pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of a plain PCM `fmt ` chunk body
pub const PCM_FMT_SIZE: u32 = 16;

/// Largest `fmt ` body accepted; real ones are 16, 18 or 40 bytes
const MAX_FMT_SIZE: u32 = 64 * 1024;

/// RIFF chunk preamble: four-character id and little-endian body length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    pub fn new(id: [u8; 4], size: u32) -> Self {
        ChunkHeader { id, size }
    }

    /// Read the next preamble, or `None` once the input runs out
    pub fn read_from<R: Read>(reader: &mut R) -> Option<Self> {
        let mut id = [0u8; 4];
        reader.read_exact(&mut id).ok()?;
        let size = reader.read_u32::<LittleEndian>().ok()?;
        Some(ChunkHeader { id, size })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.id)?;
        writer.write_u32::<LittleEndian>(self.size)
    }

    /// Bytes between the end of this preamble and the next one
    fn padded_size(&self) -> u64 {
        self.size as u64 + (self.size % 2) as u64
    }
}

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Sub-format tag carried in a WAVE_FORMAT_EXTENSIBLE GUID
    pub sub_format: Option<u16>,
}

impl WavFormat {
    /// Describe plain integer PCM with the given layout
    pub fn pcm(channels: u16, sample_rate: u32, sample_width: u16) -> Result<Self> {
        let block_align = channels
            .checked_mul(sample_width)
            .ok_or_else(|| Error::format(format!("Frame too large: {} channels", channels)))?;
        let bits_per_sample = sample_width
            .checked_mul(8)
            .ok_or_else(|| Error::format(format!("Invalid sample width: {}", sample_width)))?;

        Ok(WavFormat {
            format_tag: FormatTag::Pcm,
            channels,
            sample_rate,
            byte_rate: sample_rate.wrapping_mul(block_align as u32),
            block_align,
            bits_per_sample,
            sub_format: None,
        })
    }

    /// Parse WAV format chunk from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < PCM_FMT_SIZE as usize {
            return Err(Error::format("WAV format chunk too small"));
        }

        let format_tag = u16::from_le_bytes([data[0], data[1]]).into();
        let channels = u16::from_le_bytes([data[2], data[3]]);
        let sample_rate = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let byte_rate = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let block_align = u16::from_le_bytes([data[12], data[13]]);
        let bits_per_sample = u16::from_le_bytes([data[14], data[15]]);

        // cbSize(2) validBits(2) channelMask(4) then the SubFormat GUID
        let sub_format = if format_tag == FormatTag::Extensible && data.len() >= 26 {
            Some(u16::from_le_bytes([data[24], data[25]]))
        } else {
            None
        };

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            sub_format,
        })
    }

    /// Convert to a plain 16-byte PCM chunk body for writing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(PCM_FMT_SIZE as usize);

        bytes.extend_from_slice(&u16::from(FormatTag::Pcm).to_le_bytes());
        bytes.extend_from_slice(&self.channels.to_le_bytes());
        bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&self.byte_rate.to_le_bytes());
        bytes.extend_from_slice(&self.block_align.to_le_bytes());
        bytes.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        bytes
    }

    /// True when the samples are integer PCM, directly or via the extensible wrapper
    pub fn is_pcm(&self) -> bool {
        match self.format_tag {
            FormatTag::Pcm => true,
            FormatTag::Extensible => self.sub_format == Some(u16::from(FormatTag::Pcm)),
            _ => false,
        }
    }

    /// Sample width in bytes
    pub fn sample_width(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculate expected block alignment
    pub fn calculate_block_align(&self) -> u32 {
        self.channels as u32 * self.sample_width() as u32
    }

    /// Compression type descriptor for an uncompressed stream
    pub fn compression_type(&self) -> &'static str {
        "NONE"
    }

    /// Compression name descriptor for an uncompressed stream
    pub fn compression_name(&self) -> &'static str {
        "not compressed"
    }

    /// Validate format parameters
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::format("Invalid channel count: 0"));
        }

        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(Error::format(format!(
                "Invalid bits per sample: {}",
                self.bits_per_sample
            )));
        }

        let expected_block_align = self.calculate_block_align();
        if self.block_align as u32 != expected_block_align {
            return Err(Error::format(format!(
                "Block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        Ok(())
    }
}

/// Complete WAV file header
#[derive(Debug, Clone)]
pub struct WavHeader {
    /// Total file size (RIFF chunk size + 8)
    pub file_size: u64,
    /// WAV format information
    pub format: WavFormat,
    /// Data chunk size in bytes
    pub data_size: u32,
    /// Data chunk start position in file
    pub data_start: u64,
}

impl WavHeader {
    /// Read and parse WAV header from a reader
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let mut riff_header = [0u8; 12];
        reader
            .read_exact(&mut riff_header)
            .map_err(|e| Error::format(format!("Failed to read RIFF header: {}", e)))?;

        if &riff_header[0..4] != RIFF_MAGIC {
            return Err(Error::format("Not a valid RIFF file"));
        }

        if &riff_header[8..12] != WAVE_MAGIC {
            return Err(Error::format("Not a valid WAVE file"));
        }

        let file_size = u32::from_le_bytes([
            riff_header[4],
            riff_header[5],
            riff_header[6],
            riff_header[7],
        ]) as u64
            + 8;

        let format = Self::find_and_parse_fmt_chunk(reader)?;
        let (data_size, data_start) = Self::find_data_chunk(reader)?;

        Ok(WavHeader {
            file_size,
            format,
            data_size,
            data_start,
        })
    }

    /// Skip `len` bytes of chunk body or padding
    fn skip<R: Seek>(reader: &mut R, len: u64) -> Result<()> {
        reader
            .seek(SeekFrom::Current(len as i64))
            .map_err(|e| Error::format(format!("Failed to skip chunk: {}", e)))?;
        Ok(())
    }

    /// Find and parse the fmt chunk
    fn find_and_parse_fmt_chunk<R: Read + Seek>(reader: &mut R) -> Result<WavFormat> {
        loop {
            let chunk = ChunkHeader::read_from(reader)
                .ok_or_else(|| Error::format("fmt chunk not found"))?;

            if &chunk.id == FMT_CHUNK {
                if chunk.size > MAX_FMT_SIZE {
                    return Err(Error::format(format!(
                        "fmt chunk too large: {} bytes",
                        chunk.size
                    )));
                }

                let mut fmt_data = vec![0u8; chunk.size as usize];
                reader
                    .read_exact(&mut fmt_data)
                    .map_err(|e| Error::format(format!("Failed to read fmt chunk: {}", e)))?;
                if chunk.size % 2 != 0 {
                    Self::skip(reader, 1)?;
                }

                let format = WavFormat::from_bytes(&fmt_data)?;
                format.validate()?;
                return Ok(format);
            }

            Self::skip(reader, chunk.padded_size())?;
        }
    }

    /// Find the data chunk and return its size and start position
    fn find_data_chunk<R: Read + Seek>(reader: &mut R) -> Result<(u32, u64)> {
        loop {
            let chunk = ChunkHeader::read_from(reader)
                .ok_or_else(|| Error::format("data chunk not found"))?;

            if &chunk.id == DATA_CHUNK {
                let data_start = reader
                    .stream_position()
                    .map_err(|e| Error::format(format!("Failed to get data position: {}", e)))?;
                return Ok((chunk.size, data_start));
            }

            Self::skip(reader, chunk.padded_size())?;
        }
    }

    /// Number of whole frames the data chunk declares
    pub fn num_frames(&self) -> u64 {
        self.data_size as u64 / self.format.block_align as u64
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.format.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fmt_body(tag: u16, channels: u16, rate: u32, bits: u16) -> Vec<u8> {
        let block_align = channels * (bits / 8);
        let mut body = Vec::new();
        body.extend_from_slice(&tag.to_le_bytes());
        body.extend_from_slice(&channels.to_le_bytes());
        body.extend_from_slice(&rate.to_le_bytes());
        body.extend_from_slice(&(rate * block_align as u32).to_le_bytes());
        body.extend_from_slice(&block_align.to_le_bytes());
        body.extend_from_slice(&bits.to_le_bytes());
        body
    }

    fn riff(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
        let mut body = WAVE_MAGIC.to_vec();
        for (id, data) in chunks {
            body.extend_from_slice(*id);
            body.extend_from_slice(&(data.len() as u32).to_le_bytes());
            body.extend_from_slice(data);
            if data.len() % 2 != 0 {
                body.push(0);
            }
        }
        let mut file = RIFF_MAGIC.to_vec();
        file.extend_from_slice(&(body.len() as u32).to_le_bytes());
        file.extend_from_slice(&body);
        file
    }

    #[test]
    fn test_format_tag_conversion() {
        assert_eq!(u16::from(FormatTag::Pcm), 0x0001);
        assert_eq!(FormatTag::from(0x0001), FormatTag::Pcm);
        assert_eq!(FormatTag::from(0x1234), FormatTag::Unknown(0x1234));
    }

    #[test]
    fn test_pcm_format_calculations() {
        let format = WavFormat::pcm(2, 44100, 2).unwrap();

        assert_eq!(format.block_align, 4);
        assert_eq!(format.byte_rate, 176400);
        assert_eq!(format.bits_per_sample, 16);
        assert!(format.is_pcm());
        assert!(format.validate().is_ok());
        assert_eq!(format.to_bytes(), fmt_body(1, 2, 44100, 16));
    }

    #[test]
    fn test_wav_format_validation() {
        let mut format = WavFormat::pcm(2, 44100, 2).unwrap();

        format.channels = 0;
        assert!(format.validate().is_err());
        format.channels = 2;

        format.block_align = 3;
        assert!(format.validate().is_err());
        format.block_align = 4;

        format.bits_per_sample = 12;
        assert!(format.validate().is_err());

        assert!(WavFormat::pcm(40000, 8000, 4).is_err());

        // A zero sample rate is tolerated
        let format = WavFormat::pcm(1, 0, 1).unwrap();
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_extensible_pcm_sub_format() {
        let mut body = fmt_body(0xFFFE, 2, 48000, 16);
        body.extend_from_slice(&22u16.to_le_bytes());
        body.extend_from_slice(&16u16.to_le_bytes());
        body.extend_from_slice(&3u32.to_le_bytes());
        body.extend_from_slice(&1u16.to_le_bytes());
        body.extend_from_slice(&[0u8; 14]);

        let format = WavFormat::from_bytes(&body).unwrap();
        assert_eq!(format.format_tag, FormatTag::Extensible);
        assert_eq!(format.sub_format, Some(1));
        assert!(format.is_pcm());
    }

    #[test]
    fn test_read_header_skips_unknown_chunks() {
        let file = riff(&[
            (b"junk", vec![0xAA; 3]),
            (FMT_CHUNK, fmt_body(1, 1, 8000, 16)),
            (b"LIST", vec![0x55; 10]),
            (DATA_CHUNK, vec![1, 0, 2, 0]),
        ]);

        let header = WavHeader::read(&mut Cursor::new(&file)).unwrap();
        assert_eq!(header.format.sample_rate, 8000);
        assert_eq!(header.data_size, 4);
        assert_eq!(header.num_frames(), 2);
        assert_eq!(header.file_size, file.len() as u64);
        assert_eq!(&file[header.data_start as usize..], &[1, 0, 2, 0]);
    }

    #[test]
    fn test_read_header_rejects_bad_magic() {
        let mut file = riff(&[(FMT_CHUNK, fmt_body(1, 1, 8000, 16))]);
        file[8..12].copy_from_slice(b"AVI ");
        assert!(WavHeader::read(&mut Cursor::new(&file)).is_err());
    }

    #[test]
    fn test_read_header_missing_data_chunk() {
        let file = riff(&[(FMT_CHUNK, fmt_body(1, 1, 8000, 16))]);
        let err = WavHeader::read(&mut Cursor::new(&file)).unwrap_err();
        assert!(err.to_string().contains("data chunk not found"));
    }

    #[test]
    fn test_chunk_header_io() {
        let mut out = Vec::new();
        ChunkHeader::new(*DATA_CHUNK, 8).write_to(&mut out).unwrap();
        assert_eq!(&out, b"data\x08\x00\x00\x00");

        let chunk = ChunkHeader::read_from(&mut Cursor::new(&out)).unwrap();
        assert_eq!(chunk, ChunkHeader::new(*DATA_CHUNK, 8));
        assert!(ChunkHeader::read_from(&mut Cursor::new(&out[..7])).is_none());
    }

    #[test]
    fn test_odd_fmt_chunk_is_padded() {
        let mut body = fmt_body(1, 1, 8000, 16);
        body.push(0x7F);
        let file = riff(&[(FMT_CHUNK, body), (DATA_CHUNK, vec![1, 0, 2, 0])]);

        let header = WavHeader::read(&mut Cursor::new(&file)).unwrap();
        assert_eq!(header.format.bits_per_sample, 16);
        assert_eq!(header.data_size, 4);
        assert_eq!(&file[header.data_start as usize..], &[1, 0, 2, 0]);
    }

    #[test]
    fn test_oversized_fmt_chunk_rejected() {
        let mut file = riff(&[(FMT_CHUNK, fmt_body(1, 1, 8000, 16))]);
        // fmt chunk size field follows "RIFF....WAVEfmt "
        file[16..20].copy_from_slice(&u32::MAX.to_le_bytes());

        let err = WavHeader::read(&mut Cursor::new(&file)).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert!(err.to_string().contains("fmt chunk too large"));
    }

    #[test]
    fn test_duration_with_zero_rate() {
        let header = WavHeader {
            file_size: 44,
            format: WavFormat::pcm(1, 0, 2).unwrap(),
            data_size: 8,
            data_start: 44,
        };
        assert_eq!(header.duration_seconds(), 0.0);
    }
}
