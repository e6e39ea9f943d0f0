//! Test helpers and fixtures for simplestretch integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Float WAV round trips
//! - `INT16_EPSILON`: 16-bit quantization
//! - `INT24_EPSILON`: 24-bit quantization

#![allow(dead_code)]

pub mod tolerances;

use std::path::{Path, PathBuf};

/// Default test sample rate (CD audio)
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: u32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (0.5 * (2.0 * std::f64::consts::PI * frequency * t).sin()) as f32
        })
        .collect()
}

/// One second of 440 Hz at [`TEST_SAMPLE_RATE`].
pub fn a440() -> Vec<f32> {
    generate_sine(440.0, TEST_SAMPLE_RATE, TEST_SAMPLE_RATE as usize)
}

/// Interleave per-channel signals.
pub fn interleave(channels: &[Vec<f32>]) -> Vec<f32> {
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..frames)
        .flat_map(|i| channels.iter().map(move |c| c[i]))
        .collect()
}

/// Write a 32-bit float WAV file.
pub fn write_float_wav(path: &Path, samples: &[f32], channels: u16, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Read a WAV file back with hound, independently of the decoder.
///
/// Integer samples are scaled to -1..1.
pub fn read_wav(path: &Path) -> (hound::WavSpec, Vec<f32>) {
    let mut reader = hound::WavReader::open(path).expect("Failed to open WAV");
    let spec = reader.spec();
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.expect("Failed to read sample"))
            .collect(),
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.expect("Failed to read sample") as f32 / scale)
                .collect()
        }
    };
    (spec, samples)
}

/// Fresh scratch directory, removed when the guard drops.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// `dir/name`
pub fn scratch_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Check if two signals are approximately equal within tolerance.
pub fn signals_approx_equal(a: &[f32], b: &[f32], tolerance: f32) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Number of entries in `dir`.
pub fn count_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .count()
}
