//! Error types for simplestretch-core

use thiserror::Error;

/// Broad class of a usage error.
///
/// `Value` covers numbers that are the right kind of thing but out of range
/// (a zero factor). `Type` covers inputs of the wrong shape (raw samples
/// without a sample rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageClass {
    Value,
    Type,
}

/// Usage error raised before any I/O happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Factor is zero, negative or not finite
    #[error("'factor' must be greater than 0 (got {0})")]
    InvalidFactor(f64),

    /// Factor is valid but its reciprocal does not fit an `f64`
    #[error("'factor' {0} is too small to invert")]
    FactorOutOfRange(f64),

    /// Sample rate could not be converted to a positive integer
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(String),

    /// Raw samples were given without a sample rate
    #[error("a valid sample rate is required when working with raw audio data")]
    MissingSampleRate,

    /// Audio source is neither a file path nor a sample buffer
    #[error("'audio' must be the path to an audio file or a sample buffer: {0}")]
    InvalidAudioSource(String),

    /// Sample buffer shape is inconsistent
    #[error("invalid sample buffer: {0}")]
    InvalidBuffer(String),

    /// Adjusted sample rate does not fit a positive 32-bit integer
    #[error("factor {factor} moves sample rate {rate} Hz out of range")]
    RateOutOfRange { rate: u32, factor: f64 },
}

impl Error {
    pub fn class(&self) -> UsageClass {
        match self {
            Error::InvalidFactor(_)
            | Error::FactorOutOfRange(_)
            | Error::RateOutOfRange { .. } => UsageClass::Value,
            Error::InvalidSampleRate(_)
            | Error::MissingSampleRate
            | Error::InvalidAudioSource(_)
            | Error::InvalidBuffer(_) => UsageClass::Type,
        }
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
