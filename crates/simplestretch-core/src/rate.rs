//! Sample rates, factors and the rate arithmetic that does the stretching.

use crate::error::{Error, Result};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Samples per second. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleRate(NonZeroU32);

impl SampleRate {
    /// Create a sample rate. Zero is rejected.
    pub fn new(hz: u32) -> Result<Self> {
        NonZeroU32::new(hz)
            .map(Self)
            .ok_or_else(|| Error::InvalidSampleRate("sample rate must be positive".into()))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Reinterpret this rate for a clip whose length is multiplied by `factor`.
    ///
    /// Returns `round(rate / factor)`, rounding half to even. A factor above 1
    /// lowers the rate (longer playback), below 1 raises it (shorter playback).
    pub fn stretched(self, factor: Factor) -> Result<SampleRate> {
        let adjusted = (self.get() as f64 / factor.get()).round_ties_even();

        if !(1.0..=u32::MAX as f64).contains(&adjusted) {
            return Err(Error::RateOutOfRange {
                rate: self.get(),
                factor: factor.get(),
            });
        }

        Self::new(adjusted as u32)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.get())
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> Self {
        rate.get()
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = Error;

    fn try_from(hz: u32) -> Result<Self> {
        Self::new(hz)
    }
}

impl TryFrom<u64> for SampleRate {
    type Error = Error;

    fn try_from(hz: u64) -> Result<Self> {
        u32::try_from(hz)
            .map_err(|_| Error::InvalidSampleRate(format!("{} does not fit in 32 bits", hz)))
            .and_then(Self::new)
    }
}

impl TryFrom<i32> for SampleRate {
    type Error = Error;

    fn try_from(hz: i32) -> Result<Self> {
        Self::try_from(hz as i64)
    }
}

impl TryFrom<i64> for SampleRate {
    type Error = Error;

    fn try_from(hz: i64) -> Result<Self> {
        u32::try_from(hz)
            .map_err(|_| Error::InvalidSampleRate(format!("{} is not a positive integer", hz)))
            .and_then(Self::new)
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = Error;

    /// Accepts any finite value whose nearest integer is a valid rate,
    /// so `44100.0` converts cleanly.
    fn try_from(hz: f64) -> Result<Self> {
        if !hz.is_finite() {
            return Err(Error::InvalidSampleRate(format!("{} is not finite", hz)));
        }
        let rounded = hz.round_ties_even();
        if !(1.0..=u32::MAX as f64).contains(&rounded) {
            return Err(Error::InvalidSampleRate(format!(
                "{} is not a positive integer",
                hz
            )));
        }
        Self::new(rounded as u32)
    }
}

impl FromStr for SampleRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(hz) = trimmed.parse::<u32>() {
            return Self::new(hz);
        }
        match trimmed.parse::<f64>() {
            Ok(hz) => Self::try_from(hz),
            Err(_) => Err(Error::InvalidSampleRate(format!("{:?} is not a number", s))),
        }
    }
}

impl TryFrom<&str> for SampleRate {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Length multiplier: 2.0 plays twice as long, 0.5 half as long.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Factor(f64);

impl Factor {
    /// Neutral factor; keeps the rate as it is.
    pub const IDENTITY: Factor = Factor(1.0);

    pub fn new(factor: f64) -> Result<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(Error::InvalidFactor(factor))
        }
    }

    /// Convert a speed multiplier (2.0 = twice as fast) into a length factor.
    pub fn from_speed(speed: f64) -> Result<Self> {
        Self::new(speed)?.recip()
    }

    /// `1 / factor`. Fails if the reciprocal overflows to infinity.
    pub fn recip(self) -> Result<Self> {
        let recip = 1.0 / self.0;
        if recip.is_finite() {
            Ok(Self(recip))
        } else {
            Err(Error::FactorOutOfRange(self.0))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Factor {
    type Error = Error;

    fn try_from(factor: f64) -> Result<Self> {
        Self::new(factor)
    }
}
