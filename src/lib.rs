//! # simplestretch - Stretch audio by rewriting its sample rate
//!
//! Changes how long a clip plays without touching a single sample: the
//! samples are kept and only the sample rate they are played back at
//! changes. Pitch moves with speed, like a tape slowed down.
//!
//! ## Architecture
//!
//! simplestretch is an umbrella crate that coordinates:
//! - **simplestretch-core** - Sample buffers, sample rates, factors, audio sources
//! - **simplestretch-decode** - Reading audio files (symphonia)
//! - **simplestretch-export** - Writing WAV/FLAC with cleanup on failure
//!
//! ## Quick Start
//!
//! ```ignore
//! use simplestretch::prelude::*;
//!
//! // Twice as long, half the pitch
//! let (samples, rate) = stretch_audio(AudioSource::file("voice.wav"), 2.0, Some("slow.wav".as_ref()))?;
//!
//! // Raw samples need their rate
//! let (_, rate) = Stretch::new(samples).sample_rate(rate).speedup(2.0)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - All formats plus the command-line tool
//! - `files` - All audio formats
//! - `wav` - WAV read and write
//! - `flac` - FLAC read and write
//! - `mp3` - MP3 read
//! - `ogg` - Ogg/Vorbis read
//! - `cli` - The `simplestretch` binary

/// Re-export of simplestretch-core for direct access
pub use simplestretch_core as core;

/// Audio file decoding
pub use simplestretch_decode as decode;

/// Audio file writing
pub use simplestretch_export as export;

// Core types
pub use simplestretch_core::{AudioInput, AudioSource, Factor, SampleBuffer, SampleRate};

// Export configuration
pub use simplestretch_export::{AudioFormat, BitDepth, ExportOptions};

mod error;
mod stretch;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, ErrorKind, Result, PERSIST_HINT};
pub use stretch::{speedup_audio, stretch_audio, Stretch};

/// Convenience prelude for common imports
pub mod prelude {
    // Operations
    pub use crate::{speedup_audio, stretch_audio, Stretch};

    // Essential types
    pub use crate::core::{AudioSource, SampleBuffer, SampleRate};

    // Output
    pub use crate::export::{BitDepth, ExportOptions};

    // Errors
    pub use crate::{Error, ErrorKind};
}
