//! Tolerance constants for audio testing.
//!
//! Different output formats keep different precision.

/// Floating point rounding errors.
/// Use for 32-bit float files, which should round-trip exactly.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// 16-bit quantization step size.
/// Use when testing bit-depth conversion to 16-bit.
pub const INT16_EPSILON: f32 = 1.0 / 32768.0;

/// 24-bit quantization step size.
/// Use when testing bit-depth conversion to 24-bit.
pub const INT24_EPSILON: f32 = 1.0 / 8388608.0;
