//! WAV format encoder using hound
//!
//! Supports 16-bit, 24-bit, and 32-bit float WAV files with any channel count.

use crate::error::{ExportError, Result};
use crate::options::BitDepth;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Cursor, Seek, Write};

/// WAV encoder configuration
#[derive(Debug, Clone)]
pub struct WavConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bit depth
    pub bit_depth: BitDepth,
    /// Number of interleaved channels
    pub channels: u16,
}

impl Default for WavConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bit_depth: BitDepth::Float32,
            channels: 1,
        }
    }
}

impl WavConfig {
    pub fn new(sample_rate: u32, bit_depth: BitDepth, channels: u16) -> Self {
        Self {
            sample_rate,
            bit_depth,
            channels,
        }
    }

    /// Create a new WAV config for mono output
    pub fn mono(sample_rate: u32, bit_depth: BitDepth) -> Self {
        Self::new(sample_rate, bit_depth, 1)
    }
}

/// Write interleaved samples as a WAV stream.
///
/// The header is patched with the final sizes on finalize, hence `Seek`.
pub fn write_wav<W: Write + Seek>(writer: W, samples: &[f32], config: &WavConfig) -> Result<()> {
    check_config(samples, config)?;

    let mut writer = WavWriter::new(writer, create_wav_spec(config))?;
    write_samples(&mut writer, samples, config.bit_depth)?;
    writer.finalize()?;

    Ok(())
}

/// Encode interleaved samples to WAV in memory
///
/// # Returns
/// WAV file bytes
pub fn encode_wav_memory(samples: &[f32], config: &WavConfig) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_wav(Cursor::new(&mut buffer), samples, config)?;
    Ok(buffer)
}

/// Reject layouts the RIFF header cannot describe.
pub(crate) fn check_config(samples: &[f32], config: &WavConfig) -> Result<()> {
    if config.channels == 0 {
        return Err(ExportError::InvalidOptions(
            "WAV needs at least one channel".into(),
        ));
    }

    // The header stores bytes per second as a u32
    let byte_rate = u64::from(config.sample_rate)
        * u64::from(config.channels)
        * u64::from(config.bit_depth.bits() / 8);
    if byte_rate > u64::from(u32::MAX) {
        return Err(ExportError::UnsupportedFormat(format!(
            "WAV cannot store {} Hz x {} channels at {} bits ({} bytes/s)",
            config.sample_rate,
            config.channels,
            config.bit_depth.bits(),
            byte_rate
        )));
    }

    if samples.len() % config.channels as usize != 0 {
        return Err(ExportError::InvalidData(format!(
            "{} samples do not fill {} channels evenly",
            samples.len(),
            config.channels
        )));
    }
    Ok(())
}

/// Create hound WavSpec from our config
fn create_wav_spec(config: &WavConfig) -> WavSpec {
    let sample_format = match config.bit_depth {
        BitDepth::Float32 => SampleFormat::Float,
        BitDepth::Int16 | BitDepth::Int24 => SampleFormat::Int,
    };

    WavSpec {
        channels: config.channels,
        sample_rate: config.sample_rate,
        bits_per_sample: config.bit_depth.bits(),
        sample_format,
    }
}

/// Write interleaved samples to the writer
fn write_samples<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    samples: &[f32],
    bit_depth: BitDepth,
) -> Result<()> {
    match bit_depth {
        BitDepth::Int16 => {
            for &sample in samples {
                writer.write_sample(float_to_i16(sample))?;
            }
        }
        BitDepth::Int24 => {
            for &sample in samples {
                writer.write_sample(float_to_i24(sample))?;
            }
        }
        BitDepth::Float32 => {
            for &sample in samples {
                writer.write_sample(sample)?;
            }
        }
    }

    Ok(())
}

/// Convert float sample to 16-bit integer with clipping
#[inline]
fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 32767.0) as i16
}

/// Convert float sample to 24-bit integer (stored as i32) with clipping
#[inline]
fn float_to_i24(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 8388607.0) as i32
}
