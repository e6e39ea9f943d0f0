//! Export options.

use crate::error::{ExportError, Result};
use std::path::Path;

/// Audio format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Wav,
    Flac,
}

impl AudioFormat {
    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
        }
    }

    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "wav" | "wave" => Ok(AudioFormat::Wav),
            "flac" => Ok(AudioFormat::Flac),
            _ => Err(ExportError::UnsupportedFormat(format!(
                "Unknown or unsupported file extension: {}. Supported: .wav, .flac",
                path.display()
            ))),
        }
    }

    /// Bit depth used when none is requested.
    ///
    /// WAV stores `f32` samples as-is. FLAC is integer only.
    pub fn native_bit_depth(&self) -> BitDepth {
        match self {
            AudioFormat::Wav => BitDepth::Float32,
            AudioFormat::Flac => BitDepth::Int24,
        }
    }
}

/// Bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Int16,
    Int24,
    Float32,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Float32 => 32,
        }
    }
}

/// FLAC encoding options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlacOptions {
    /// Samples per block.
    pub block_size: u32,
}

impl Default for FlacOptions {
    fn default() -> Self {
        Self { block_size: 4096 }
    }
}

/// Export options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Audio format (None = infer from the file extension).
    pub format: Option<AudioFormat>,
    /// Bit depth (None = the format's native depth).
    pub bit_depth: Option<BitDepth>,
    /// FLAC options.
    pub flac: FlacOptions,
}

impl ExportOptions {
    /// Format to write `path` with.
    pub fn resolve_format(&self, path: &Path) -> Result<AudioFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => AudioFormat::from_path(path),
        }
    }

    /// Effective bit depth for `format`.
    pub fn bit_depth_for(&self, format: AudioFormat) -> BitDepth {
        self.bit_depth.unwrap_or_else(|| format.native_bit_depth())
    }
}
