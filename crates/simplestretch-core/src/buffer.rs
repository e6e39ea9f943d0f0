//! Interleaved sample buffer.

use crate::error::{Error, Result};
use crate::rate::SampleRate;

/// Decoded audio: interleaved `f32` samples and a channel count.
///
/// Nothing in simplestretch changes the samples. Only the sample rate the
/// buffer is paired with changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    channels: u16,
}

impl SampleBuffer {
    /// Create a buffer from interleaved samples.
    pub fn new(samples: Vec<f32>, channels: u16) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidBuffer("channel count must be at least 1".into()));
        }
        if samples.len() % channels as usize != 0 {
            return Err(Error::InvalidBuffer(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self { samples, channels })
    }

    /// Create a single-channel buffer.
    pub fn mono(samples: Vec<f32>) -> Self {
        Self {
            samples,
            channels: 1,
        }
    }

    /// Interleave planar channels into one buffer.
    ///
    /// All channels must have the same length.
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Result<Self> {
        let count = channels.len();
        if count == 0 {
            return Err(Error::InvalidBuffer("no channels given".into()));
        }
        let count = u16::try_from(count)
            .map_err(|_| Error::InvalidBuffer(format!("too many channels: {}", count)))?;

        let frames = channels[0].len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(Error::InvalidBuffer(
                "channels have different lengths".into(),
            ));
        }

        let mut samples = Vec::with_capacity(frames * count as usize);
        for frame in 0..frames {
            for channel in &channels {
                samples.push(channel[frame]);
            }
        }

        Ok(Self {
            samples,
            channels: count,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples of one channel.
    ///
    /// Yields nothing if `index` is not a valid channel.
    pub fn channel(&self, index: u16) -> impl Iterator<Item = f32> + '_ {
        let step = self.channels as usize;
        let skip = if index < self.channels {
            index as usize
        } else {
            self.samples.len()
        };
        self.samples.iter().skip(skip).step_by(step).copied()
    }

    /// Playback duration in seconds when interpreted at `rate`.
    pub fn duration_secs(&self, rate: SampleRate) -> f64 {
        self.frames() as f64 / rate.get() as f64
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
