//! Length and speed changes by sample-rate rewriting.
//!
//! Neither operation touches the samples. Stretching by `f` divides the
//! sample rate by `f`, so playback takes `f` times as long; speeding up by
//! `f` is the same as stretching by `1 / f`.
//!
//! # Example
//!
//! ```ignore
//! use simplestretch::prelude::*;
//!
//! // Half speed, written as WAV
//! let (_, rate) = Stretch::new("voice.wav").output("slow.wav").stretch(2.0)?;
//!
//! // Raw samples need a rate
//! let (_, rate) = Stretch::new(vec![0.0f32; 44100])
//!     .sample_rate(44100)
//!     .speedup(1.5)?;
//! assert_eq!(rate.get(), 66150);
//! ```

use crate::error::{Error, Result};
use simplestretch_core::{AudioInput, AudioSource, Factor, SampleBuffer, SampleRate};
use simplestretch_export::{BitDepth, ExportOptions};
use std::path::{Path, PathBuf};

/// Stretch `source` so it plays `factor` times as long.
///
/// The adjusted rate is `round(rate / factor)`, ties to even. If `output`
/// is given the unchanged samples are written there under the new rate; a
/// failed write leaves no file behind and surfaces as [`Error::Persist`].
///
/// Returns the samples with the adjusted rate, whether or not a file was
/// written.
pub fn stretch_audio(
    source: AudioSource,
    factor: f64,
    output: Option<&Path>,
) -> Result<(SampleBuffer, SampleRate)> {
    source.validate()?;
    let factor = Factor::new(factor)?;
    adjust(source, factor, output, &ExportOptions::default())
}

/// Speed `source` up by `factor`. Values below 1 slow it down.
///
/// Equivalent to [`stretch_audio`] with `1 / factor`.
pub fn speedup_audio(
    source: AudioSource,
    factor: f64,
    output: Option<&Path>,
) -> Result<(SampleBuffer, SampleRate)> {
    let factor = Factor::from_speed(factor)?;
    source.validate()?;
    adjust(source, factor, output, &ExportOptions::default())
}

fn adjust(
    source: AudioSource,
    factor: Factor,
    output: Option<&Path>,
    options: &ExportOptions,
) -> Result<(SampleBuffer, SampleRate)> {
    let (buffer, rate) = match source {
        AudioSource::FilePath(path) => simplestretch_decode::decode_file(&path)
            .map_err(|source| Error::Decode { path, source })?,
        AudioSource::RawBuffer {
            buffer,
            sample_rate,
        } => (buffer, sample_rate),
    };

    let adjusted = rate.stretched(factor)?;
    tracing::debug!("Stretching by {}: {} -> {}", factor, rate, adjusted);

    if let Some(path) = output {
        simplestretch_export::export_to_file(path, &buffer, adjusted, options).map_err(
            |source| {
                tracing::warn!("Could not write {}: {}", path.display(), source);
                Error::Persist {
                    path: path.to_path_buf(),
                    source,
                }
            },
        )?;
    }

    Ok((buffer, adjusted))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent front end for [`stretch_audio`] and [`speedup_audio`].
///
/// Accepts a path or raw samples, an optional sample rate, and an optional
/// output file. Nothing is validated or read until a terminal call.
///
/// ```ignore
/// let (samples, rate) = Stretch::new(samples)
///     .sample_rate(48000)
///     .output("out.flac")
///     .bit_depth(BitDepth::Int16)
///     .stretch(1.25)?;
/// ```
#[derive(Debug, Clone)]
pub struct Stretch {
    audio: AudioInput,
    sample_rate: Option<simplestretch_core::Result<SampleRate>>,
    output: Option<PathBuf>,
    options: ExportOptions,
}

impl Stretch {
    pub fn new(audio: impl Into<AudioInput>) -> Self {
        Self {
            audio: audio.into(),
            sample_rate: None,
            output: None,
            options: ExportOptions::default(),
        }
    }

    /// Sample rate of raw samples. Ignored for files.
    ///
    /// A value that is not a valid rate is reported by the terminal call.
    pub fn sample_rate<R>(mut self, rate: R) -> Self
    where
        R: TryInto<SampleRate>,
        R::Error: Into<simplestretch_core::Error>,
    {
        self.sample_rate = Some(rate.try_into().map_err(Into::into));
        self
    }

    /// Write the result to `path`. The extension picks the format.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Sample format of the written file.
    ///
    /// Default: the format's native depth (32-bit float WAV, 24-bit FLAC)
    pub fn bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.options.bit_depth = Some(bit_depth);
        self
    }

    /// Make the audio play `factor` times as long.
    pub fn stretch(self, factor: f64) -> Result<(SampleBuffer, SampleRate)> {
        self.audio.validate()?;
        let factor = Factor::new(factor)?;
        self.run(factor)
    }

    /// Make the audio play `factor` times as fast.
    pub fn speedup(self, factor: f64) -> Result<(SampleBuffer, SampleRate)> {
        let factor = Factor::from_speed(factor)?;
        self.run(factor)
    }

    fn run(self, factor: Factor) -> Result<(SampleBuffer, SampleRate)> {
        let source = AudioSource::resolve(self.audio, self.sample_rate)?;
        adjust(source, factor, self.output.as_deref(), &self.options)
    }
}
