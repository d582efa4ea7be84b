//! Audio sample format definitions
//!
//! Only fixed-width integer PCM is represented. Byte order is always
//! little-endian, matching the RIFF/WAVE container.

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// Audio sample format, derived from the container's sample width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit
    U8,
    /// Signed 16-bit
    I16,
    /// Signed 32-bit
    I32,
}

impl SampleFormat {
    /// Resolve the sample format for a width in bytes
    pub fn from_width(width: u16) -> Result<Self> {
        match width {
            1 => Ok(SampleFormat::U8),
            2 => Ok(SampleFormat::I16),
            4 => Ok(SampleFormat::I32),
            other => Err(Error::format(format!("Unsupported sample width: {}", other))),
        }
    }

    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::I16 => 2,
            SampleFormat::I32 => 4,
        }
    }

    /// Bits per sample
    pub fn bit_depth(&self) -> u16 {
        self.sample_size() as u16 * 8
    }

    /// Inclusive range of representable values
    pub fn range(&self) -> (i64, i64) {
        match self {
            SampleFormat::U8 => (u8::MIN as i64, u8::MAX as i64),
            SampleFormat::I16 => (i16::MIN as i64, i16::MAX as i64),
            SampleFormat::I32 => (i32::MIN as i64, i32::MAX as i64),
        }
    }

    /// Label used for `audio_properties.sample_type`
    pub fn type_name(&self) -> &'static str {
        match self {
            SampleFormat::U8 => "uint8",
            SampleFormat::I16 => "int16",
            SampleFormat::I32 => "int32",
        }
    }

    /// Unpack a little-endian byte buffer into sample values
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<i64>> {
        let size = self.sample_size();
        if bytes.len() % size != 0 {
            return Err(Error::format(format!(
                "Payload of {} bytes is not a whole number of {}-byte samples",
                bytes.len(),
                size
            )));
        }

        let count = bytes.len() / size;
        let values = match self {
            SampleFormat::U8 => bytes.iter().map(|&b| b as i64).collect(),
            SampleFormat::I16 => {
                let mut samples = vec![0i16; count];
                LittleEndian::read_i16_into(bytes, &mut samples);
                samples.into_iter().map(i64::from).collect()
            }
            SampleFormat::I32 => {
                let mut samples = vec![0i32; count];
                LittleEndian::read_i32_into(bytes, &mut samples);
                samples.into_iter().map(i64::from).collect()
            }
        };

        Ok(values)
    }

    /// Pack sample values into little-endian bytes, appending to `out`
    ///
    /// Every value is range-checked against the format.
    pub fn pack(&self, values: &[i64], out: &mut Vec<u8>) -> Result<()> {
        let start = out.len();
        out.resize(start + values.len() * self.sample_size(), 0);
        let dst = &mut out[start..];

        match self {
            SampleFormat::U8 => {
                for (slot, &value) in dst.iter_mut().zip(values) {
                    *slot = u8::try_from(value).map_err(|_| self.out_of_range(value))?;
                }
            }
            SampleFormat::I16 => {
                let samples = values
                    .iter()
                    .map(|&v| i16::try_from(v).map_err(|_| self.out_of_range(v)))
                    .collect::<Result<Vec<_>>>()?;
                LittleEndian::write_i16_into(&samples, dst);
            }
            SampleFormat::I32 => {
                let samples = values
                    .iter()
                    .map(|&v| i32::try_from(v).map_err(|_| self.out_of_range(v)))
                    .collect::<Result<Vec<_>>>()?;
                LittleEndian::write_i32_into(&samples, dst);
            }
        }

        Ok(())
    }

    fn out_of_range(&self, value: i64) -> Error {
        let (min, max) = self.range();
        Error::format(format!(
            "Sample value {} out of range for {} ({}..={})",
            value,
            self.type_name(),
            min,
            max
        ))
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::I16 => "s16",
            SampleFormat::I32 => "s32",
        };
        write!(f, "{}", name)
    }
}
