//! # simplestretch-core
//!
//! Data model shared by the simplestretch crates:
//! - [`SampleBuffer`]: interleaved samples, never modified
//! - [`SampleRate`] and [`Factor`]: validated numbers
//! - [`AudioSource`]: a file path or a buffer with its rate
//!
//! The stretch itself is [`SampleRate::stretched`]: the same samples are
//! reinterpreted at `round(rate / factor)` samples per second.

pub mod buffer;
pub mod error;
pub mod rate;
pub mod source;

pub use buffer::SampleBuffer;
pub use error::{Error, Result, UsageClass};
pub use rate::{Factor, SampleRate};
pub use source::{AudioInput, AudioSource};
