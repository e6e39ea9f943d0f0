//! Where the audio comes from.

use crate::buffer::SampleBuffer;
use crate::error::{Error, Result};
use crate::rate::SampleRate;
use std::path::{Path, PathBuf};

/// Audio as a caller hands it over, before a sample rate is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioInput {
    /// Path to an encoded audio file
    Path(PathBuf),
    /// Already decoded samples
    Samples(SampleBuffer),
}

impl AudioInput {
    /// Reject inputs that cannot name any audio.
    pub fn validate(&self) -> Result<()> {
        match self {
            AudioInput::Path(path) if path.as_os_str().is_empty() => {
                Err(Error::InvalidAudioSource("empty path".into()))
            }
            _ => Ok(()),
        }
    }
}

impl From<PathBuf> for AudioInput {
    fn from(path: PathBuf) -> Self {
        AudioInput::Path(path)
    }
}

impl From<&Path> for AudioInput {
    fn from(path: &Path) -> Self {
        AudioInput::Path(path.to_path_buf())
    }
}

impl From<&str> for AudioInput {
    fn from(path: &str) -> Self {
        AudioInput::Path(PathBuf::from(path))
    }
}

impl From<String> for AudioInput {
    fn from(path: String) -> Self {
        AudioInput::Path(PathBuf::from(path))
    }
}

impl From<SampleBuffer> for AudioInput {
    fn from(buffer: SampleBuffer) -> Self {
        AudioInput::Samples(buffer)
    }
}

impl From<Vec<f32>> for AudioInput {
    fn from(samples: Vec<f32>) -> Self {
        AudioInput::Samples(SampleBuffer::mono(samples))
    }
}

/// Audio with everything needed to compute a new sample rate.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    /// Encoded file; samples and rate come from the decoder
    FilePath(PathBuf),
    /// Decoded samples with their rate
    RawBuffer {
        buffer: SampleBuffer,
        sample_rate: SampleRate,
    },
}

impl AudioSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        AudioSource::FilePath(path.into())
    }

    pub fn raw(buffer: SampleBuffer, sample_rate: SampleRate) -> Self {
        AudioSource::RawBuffer {
            buffer,
            sample_rate,
        }
    }

    /// Pair an input with the sample rate the caller supplied, if any.
    ///
    /// `sample_rate` is the outcome of converting the caller's value, so a
    /// rate that failed to convert is still reported here. For file inputs
    /// the supplied rate is ignored: the decoded file always decides.
    pub fn resolve(input: AudioInput, sample_rate: Option<Result<SampleRate>>) -> Result<Self> {
        input.validate()?;

        match input {
            AudioInput::Path(path) => Ok(AudioSource::FilePath(path)),
            AudioInput::Samples(buffer) => {
                let sample_rate = sample_rate.ok_or(Error::MissingSampleRate)??;
                Ok(AudioSource::raw(buffer, sample_rate))
            }
        }
    }

    /// Reject a file source with an empty path.
    ///
    /// Raw buffers are always valid: their rate was checked when the
    /// [`SampleRate`] was built.
    pub fn validate(&self) -> Result<()> {
        match self {
            AudioSource::FilePath(path) if path.as_os_str().is_empty() => {
                Err(Error::InvalidAudioSource("empty path".into()))
            }
            _ => Ok(()),
        }
    }

    /// File path, for file sources.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AudioSource::FilePath(path) => Some(path),
            AudioSource::RawBuffer { .. } => None,
        }
    }
}
