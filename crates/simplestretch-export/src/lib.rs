//! # simplestretch-export
//!
//! Writes a sample buffer to disk under a sample rate chosen by the caller.
//! The samples are encoded as they are; no resampling, dithering or
//! normalization happens on the way out.
//!
//! - **Format encoding**: WAV (hound), FLAC (flacenc)
//! - **Cleanup**: [`OutputFile`] deletes a partially written file on failure
//!
//! ## Feature Flags
//!
//! - `wav` (default): WAV export via hound (pure Rust)
//! - `flac` (default): FLAC export via flacenc (pure Rust)

pub mod error;
pub mod format;
mod options;
mod output;

pub use error::{ExportError, Result};
pub use options::{AudioFormat, BitDepth, ExportOptions, FlacOptions};
pub use output::OutputFile;

#[cfg(feature = "wav")]
pub use format::wav::{encode_wav_memory, write_wav, WavConfig};

#[cfg(feature = "flac")]
pub use format::flac::{encode_flac_memory, write_flac, FlacConfig};

use simplestretch_core::{SampleBuffer, SampleRate};
use std::io::{Seek, Write};
use std::path::Path;

/// Export audio to a file.
///
/// The format comes from `options.format`, or from the file extension:
/// - `.wav` -> WAV
/// - `.flac` -> FLAC
///
/// Format limits (FLAC rates and depths, the WAV byte rate) are checked
/// before the file is opened, so a rejected export leaves an existing file
/// untouched. If encoding fails after the file was opened, it is removed
/// before the error returns.
pub fn export_to_file(
    path: impl AsRef<Path>,
    buffer: &SampleBuffer,
    sample_rate: SampleRate,
    options: &ExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let format = options.resolve_format(path)?;
    ensure_enabled(format)?;

    log::debug!(
        "exporting {} frames x {} channels to {} as {} at {}",
        buffer.frames(),
        buffer.channels(),
        path.display(),
        format.extension(),
        sample_rate
    );

    check_limits(format, buffer, sample_rate, options)?;

    let mut output = OutputFile::create(path)?;
    encode(&mut output, format, buffer, sample_rate, options)?;
    output.commit()?;

    log::info!("wrote {} at {}", path.display(), sample_rate);
    Ok(())
}

/// Encode `buffer` in `format` into any seekable writer.
pub fn encode<W: Write + Seek>(
    writer: W,
    format: AudioFormat,
    buffer: &SampleBuffer,
    sample_rate: SampleRate,
    options: &ExportOptions,
) -> Result<()> {
    match format {
        #[cfg(feature = "wav")]
        AudioFormat::Wav => write_wav(
            writer,
            buffer.samples(),
            &wav_config(buffer, sample_rate, options),
        ),
        #[cfg(feature = "flac")]
        AudioFormat::Flac => write_flac(
            writer,
            buffer.samples(),
            &flac_config(buffer, sample_rate, options),
        ),
        #[allow(unreachable_patterns)]
        _ => Err(not_enabled(format)),
    }
}

/// Format limits that need no encoding work to detect.
fn check_limits(
    format: AudioFormat,
    buffer: &SampleBuffer,
    sample_rate: SampleRate,
    options: &ExportOptions,
) -> Result<()> {
    match format {
        #[cfg(feature = "wav")]
        AudioFormat::Wav => {
            let config = wav_config(buffer, sample_rate, options);
            crate::format::wav::check_config(buffer.samples(), &config)
        }
        #[cfg(feature = "flac")]
        AudioFormat::Flac => {
            let config = flac_config(buffer, sample_rate, options);
            crate::format::flac::check_config(buffer.samples(), &config).map(|_| ())
        }
        #[allow(unreachable_patterns)]
        _ => Err(not_enabled(format)),
    }
}

#[cfg(feature = "wav")]
fn wav_config(
    buffer: &SampleBuffer,
    sample_rate: SampleRate,
    options: &ExportOptions,
) -> WavConfig {
    WavConfig::new(
        sample_rate.get(),
        options.bit_depth_for(AudioFormat::Wav),
        buffer.channels(),
    )
}

#[cfg(feature = "flac")]
fn flac_config(
    buffer: &SampleBuffer,
    sample_rate: SampleRate,
    options: &ExportOptions,
) -> FlacConfig {
    FlacConfig::new(
        sample_rate.get(),
        options.bit_depth_for(AudioFormat::Flac),
        buffer.channels(),
    )
    .with_block_size(options.flac.block_size)
}

fn not_enabled(format: AudioFormat) -> ExportError {
    ExportError::UnsupportedFormat(format!("{} support not enabled", format.extension()))
}

fn ensure_enabled(format: AudioFormat) -> Result<()> {
    let enabled = match format {
        AudioFormat::Wav => cfg!(feature = "wav"),
        AudioFormat::Flac => cfg!(feature = "flac"),
    };

    if enabled {
        Ok(())
    } else {
        Err(not_enabled(format))
    }
}
