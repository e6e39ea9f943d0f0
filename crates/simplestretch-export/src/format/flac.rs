//! FLAC format encoder using flacenc
//!
//! Supports 16-bit and 24-bit lossless audio encoding.

use crate::error::{ExportError, Result};
use crate::options::BitDepth;
use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config::Encoder as EncoderConfig;
use flacenc::encode_with_fixed_block_size;
use flacenc::error::Verify;
use flacenc::source::MemSource;
use std::io::Write;

/// Highest sample rate a FLAC frame header can carry.
pub const MAX_SAMPLE_RATE: u32 = 655_350;

/// Highest channel count FLAC supports.
pub const MAX_CHANNELS: u16 = 8;

/// FLAC encoder configuration
#[derive(Debug, Clone)]
pub struct FlacConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bit depth (16 or 24, 32-bit float not supported)
    pub bit_depth: BitDepth,
    /// Number of interleaved channels (1-8)
    pub channels: u16,
    /// Block size (samples per block, affects compression efficiency)
    pub block_size: u32,
}

impl Default for FlacConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bit_depth: BitDepth::Int24,
            channels: 1,
            block_size: 4096,
        }
    }
}

impl FlacConfig {
    pub fn new(sample_rate: u32, bit_depth: BitDepth, channels: u16) -> Self {
        Self {
            sample_rate,
            bit_depth,
            channels,
            ..Default::default()
        }
    }

    /// Set block size
    pub fn with_block_size(mut self, size: u32) -> Self {
        self.block_size = size;
        self
    }
}

/// Encode interleaved samples and write the FLAC stream to `writer`.
pub fn write_flac<W: Write>(mut writer: W, samples: &[f32], config: &FlacConfig) -> Result<()> {
    let flac_data = encode_flac_memory(samples, config)?;
    writer.write_all(&flac_data)?;
    Ok(())
}

/// Encode interleaved samples to FLAC in memory
pub fn encode_flac_memory(samples: &[f32], config: &FlacConfig) -> Result<Vec<u8>> {
    let bits_per_sample = check_config(samples, config)?;

    let int_samples: Vec<i32> = samples
        .iter()
        .map(|&s| float_to_i32(s, config.bit_depth))
        .collect();

    // Create encoder config
    let encoder_config = EncoderConfig::default()
        .into_verified()
        .map_err(|e| ExportError::Encoding(format!("Invalid FLAC config: {:?}", e)))?;

    // Create source
    let source = MemSource::from_samples(
        &int_samples,
        config.channels as usize,
        bits_per_sample,
        config.sample_rate as usize,
    );

    // Encode
    let stream = encode_with_fixed_block_size(&encoder_config, source, config.block_size as usize)
        .map_err(|e| ExportError::Encoding(format!("FLAC encoding failed: {:?}", e)))?;

    // Write to ByteSink
    let mut sink = ByteSink::new();
    stream
        .write(&mut sink)
        .map_err(|e| ExportError::Encoding(format!("Failed to write FLAC stream: {:?}", e)))?;

    Ok(sink.into_inner())
}

/// Reject streams FLAC cannot represent. Returns the bits per sample.
pub(crate) fn check_config(samples: &[f32], config: &FlacConfig) -> Result<usize> {
    let bits_per_sample = match config.bit_depth {
        BitDepth::Int16 => 16,
        BitDepth::Int24 => 24,
        BitDepth::Float32 => {
            return Err(ExportError::UnsupportedFormat(
                "FLAC does not support 32-bit float, use 16-bit or 24-bit".into(),
            ))
        }
    };

    if config.channels == 0 || config.channels > MAX_CHANNELS {
        return Err(ExportError::UnsupportedFormat(format!(
            "FLAC supports 1 to {} channels, got {}",
            MAX_CHANNELS, config.channels
        )));
    }

    if config.sample_rate > MAX_SAMPLE_RATE {
        return Err(ExportError::UnsupportedFormat(format!(
            "FLAC supports sample rates up to {} Hz, got {} Hz",
            MAX_SAMPLE_RATE, config.sample_rate
        )));
    }

    if samples.len() % config.channels as usize != 0 {
        return Err(ExportError::InvalidData(format!(
            "{} samples do not fill {} channels evenly",
            samples.len(),
            config.channels
        )));
    }

    Ok(bits_per_sample)
}

/// Convert float sample to i32 with appropriate scaling
#[inline]
fn float_to_i32(sample: f32, bit_depth: BitDepth) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0);
    match bit_depth {
        BitDepth::Int16 => (clamped * 32767.0) as i32,
        BitDepth::Int24 | BitDepth::Float32 => (clamped * 8388607.0) as i32,
    }
}
