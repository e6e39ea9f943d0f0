//! Centralized error type for the simplestretch umbrella crate.
//!
//! Wraps the subsystem errors so `?` propagates naturally across crate
//! boundaries, and tags each failure with the [`ErrorKind`] callers branch on.

use std::path::PathBuf;
use thiserror::Error;

/// Suggestion attached to every failed write.
pub const PERSIST_HINT: &str = "try saving it as a .wav file instead";

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid arguments, raised before any file is touched.
    #[error(transparent)]
    Usage(#[from] simplestretch_core::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: simplestretch_decode::DecodeError,
    },

    /// The encoder rejected the output. The partial file is already gone.
    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: simplestretch_export::ExportError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Decode,
    Persistence,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Persist { .. } => ErrorKind::Persistence,
        }
    }

    /// Remediation hint, if the failure has one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Persist { .. } => Some(PERSIST_HINT),
            _ => None,
        }
    }

    /// The underlying usage error, for usage failures.
    pub fn as_usage(&self) -> Option<&simplestretch_core::Error> {
        match self {
            Error::Usage(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
