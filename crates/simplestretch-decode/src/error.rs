//! Error types for audio decoding.

use std::io;
use symphonia::core::errors::Error as SymphoniaError;
use thiserror::Error;

/// Errors that can occur while reading an audio file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Container or codec not recognized, or its feature is disabled
    #[error("Unsupported format: {0}")]
    Unsupported(String),

    #[error("No decodable audio track")]
    NoTrack,

    #[error("Stream does not declare a sample rate")]
    MissingSampleRate,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Decoder error: {0}")]
    Backend(String),
}

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl From<SymphoniaError> for DecodeError {
    fn from(e: SymphoniaError) -> Self {
        match e {
            SymphoniaError::IoError(io) => DecodeError::Io(io),
            SymphoniaError::Unsupported(what) => DecodeError::Unsupported(what.to_string()),
            other => DecodeError::Backend(other.to_string()),
        }
    }
}
