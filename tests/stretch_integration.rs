//! Rate adjuster integration tests
//!
//! Stretches raw buffers and files end to end, reading written files back
//! with hound rather than the crate's own decoder.
//!
//! Run with:
//! ```bash
//! cargo test -p simplestretch --test stretch_integration
//! ```

#![cfg(feature = "wav")]

#[path = "helpers/mod.rs"]
mod helpers;

use approx::assert_relative_eq;
use helpers::tolerances::*;
use helpers::{
    a440, count_entries, generate_sine, interleave, read_wav, scratch_dir, scratch_path,
    signals_approx_equal, write_float_wav, TEST_SAMPLE_RATE,
};
use proptest::prelude::*;
use simplestretch::core::UsageClass;
use simplestretch::prelude::*;

fn raw(samples: Vec<f32>, hz: u32) -> AudioSource {
    AudioSource::raw(SampleBuffer::mono(samples), SampleRate::new(hz).unwrap())
}

fn usage_class(err: &Error) -> UsageClass {
    err.as_usage().expect("expected a usage error").class()
}

// =============================================================================
// Raw buffers
// =============================================================================

#[test]
fn test_a440_stretched_by_two() {
    let (buffer, rate) = stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 2.0, None).unwrap();

    assert_eq!(rate.get(), 22050);
    assert_eq!(buffer.samples(), a440().as_slice());
    // Same samples, twice the playback time
    assert_relative_eq!(buffer.duration_secs(rate), 2.0, epsilon = 1e-9);
}

#[test]
fn test_zero_factor_rejected() {
    let err = stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 0.0, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(usage_class(&err), UsageClass::Value);
}

#[test]
fn test_fractional_factor_raises_rate() {
    let (_, rate) = stretch_audio(raw(a440(), 48000), 0.5, None).unwrap();
    assert_eq!(rate.get(), 96000);
}

#[test]
fn test_multichannel_buffer_untouched() {
    let left = generate_sine(440.0, 48000, 480);
    let right = generate_sine(660.0, 48000, 480);
    let buffer = SampleBuffer::from_channels(vec![left.clone(), right.clone()]).unwrap();
    let source = AudioSource::raw(buffer.clone(), SampleRate::new(48000).unwrap());

    let (out, rate) = stretch_audio(source, 3.0, None).unwrap();

    assert_eq!(rate.get(), 16000);
    assert_eq!(out, buffer);
    assert_eq!(out.samples(), interleave(&[left, right]).as_slice());
}

#[test]
fn test_raw_samples_without_rate() {
    let err = Stretch::new(a440()).stretch(2.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert_eq!(usage_class(&err), UsageClass::Type);
}

#[test]
fn test_raw_samples_with_unusable_rate() {
    for err in [
        Stretch::new(a440()).sample_rate(-44100i64).stretch(2.0).unwrap_err(),
        Stretch::new(a440()).sample_rate(f64::NAN).stretch(2.0).unwrap_err(),
        Stretch::new(a440()).sample_rate("44.1k").stretch(2.0).unwrap_err(),
    ] {
        assert_eq!(usage_class(&err), UsageClass::Type);
    }
}

#[test]
fn test_empty_path_is_invalid_source() {
    let err = Stretch::new("").stretch(2.0).unwrap_err();
    assert!(matches!(
        err.as_usage(),
        Some(simplestretch::core::Error::InvalidAudioSource(_))
    ));
    assert_eq!(usage_class(&err), UsageClass::Type);

    // Same answer without the builder, and before the factor is looked at
    let err = stretch_audio(AudioSource::file(""), 0.0, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(matches!(
        err.as_usage(),
        Some(simplestretch::core::Error::InvalidAudioSource(_))
    ));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_file_round_trip() {
    let dir = scratch_dir();
    let input = scratch_path(&dir, "a440.wav");
    let output = scratch_path(&dir, "slow.wav");
    write_float_wav(&input, &a440(), 1, TEST_SAMPLE_RATE);

    let (buffer, rate) =
        stretch_audio(AudioSource::file(&input), 2.0, Some(output.as_path())).unwrap();

    assert_eq!(rate.get(), 22050);
    let (spec, samples) = read_wav(&output);
    assert_eq!(spec.sample_rate, 22050);
    assert_eq!(spec.channels, 1);
    assert!(signals_approx_equal(&samples, &a440(), FLOAT_EPSILON));
    assert!(signals_approx_equal(buffer.samples(), &a440(), FLOAT_EPSILON));
}

#[test]
fn test_file_rate_wins_over_supplied_rate() {
    let dir = scratch_dir();
    let input = scratch_path(&dir, "tone.wav");
    write_float_wav(&input, &generate_sine(440.0, 32000, 3200), 1, 32000);

    let (_, rate) = Stretch::new(input.as_path())
        .sample_rate(96000)
        .stretch(2.0)
        .unwrap();

    assert_eq!(rate.get(), 16000);
}

#[test]
fn test_stereo_file_keeps_channels() {
    let dir = scratch_dir();
    let input = scratch_path(&dir, "stereo.wav");
    let output = scratch_path(&dir, "stereo_out.wav");
    let samples = interleave(&[
        generate_sine(440.0, 48000, 4800),
        generate_sine(880.0, 48000, 4800),
    ]);
    write_float_wav(&input, &samples, 2, 48000);

    stretch_audio(AudioSource::file(&input), 1.5, Some(output.as_path())).unwrap();

    let (spec, written) = read_wav(&output);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 32000);
    assert!(signals_approx_equal(&written, &samples, FLOAT_EPSILON));
}

#[test]
fn test_int16_output() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "pcm16.wav");

    Stretch::new(a440())
        .sample_rate(TEST_SAMPLE_RATE)
        .output(&output)
        .bit_depth(BitDepth::Int16)
        .stretch(1.0)
        .unwrap();

    let (spec, samples) = read_wav(&output);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, TEST_SAMPLE_RATE);
    assert!(signals_approx_equal(&samples, &a440(), 3.0 * INT16_EPSILON));
}

#[cfg(feature = "flac")]
#[test]
fn test_flac_output_decodes_at_new_rate() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "slow.flac");

    stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 2.0, Some(output.as_path())).unwrap();

    let (buffer, rate) = simplestretch::decode::decode_file(&output).unwrap();
    assert_eq!(rate.get(), 22050);
    assert!(signals_approx_equal(
        buffer.samples(),
        &a440(),
        3.0 * INT24_EPSILON
    ));
}

#[test]
fn test_missing_input_file() {
    let dir = scratch_dir();
    let input = scratch_path(&dir, "nope.wav");
    let output = scratch_path(&dir, "out.wav");

    let err = stretch_audio(AudioSource::file(&input), 2.0, Some(output.as_path())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(count_entries(dir.path()), 0);
}

// =============================================================================
// Failed persistence
// =============================================================================

#[cfg(feature = "flac")]
#[test]
fn test_failed_flac_write_leaves_nothing() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "tiny.flac");

    // 44100 / 0.05 = 882000 Hz, beyond what FLAC can store
    let err = stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 0.05, Some(output.as_path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert_eq!(err.hint(), Some("try saving it as a .wav file instead"));
    assert!(!output.exists());
    assert_eq!(count_entries(dir.path()), 0);
}

#[test]
fn test_high_rate_wav_succeeds() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "tiny.wav");

    let (_, rate) =
        stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 0.05, Some(output.as_path())).unwrap();

    assert_eq!(rate.get(), 882000);
    assert_eq!(read_wav(&output).0.sample_rate, 882000);
}

#[test]
fn test_wav_byte_rate_overflow_is_persistence_error() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "huge.wav");

    // 44100 / 0.00002 = 2_205_000_000 Hz, too many bytes per second for RIFF
    let err = stretch_audio(raw(vec![0.1; 8], TEST_SAMPLE_RATE), 0.00002, Some(output.as_path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert!(err.hint().is_some());
    assert!(!output.exists());
}

#[cfg(feature = "flac")]
#[test]
fn test_rejected_write_keeps_existing_output() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "keep.flac");
    std::fs::write(&output, b"previous take").unwrap();

    let err = stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 0.05, Some(output.as_path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert_eq!(std::fs::read(&output).unwrap(), b"previous take");
}

#[test]
fn test_unsupported_output_extension() {
    let dir = scratch_dir();
    let output = scratch_path(&dir, "out.mp3");

    let err =
        stretch_audio(raw(a440(), TEST_SAMPLE_RATE), 2.0, Some(output.as_path())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    assert!(!output.exists());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_rate_is_rounded_quotient(hz in 1_000u32..400_000, factor in 0.1f64..10.0) {
        let (buffer, rate) = stretch_audio(raw(vec![0.25; 16], hz), factor, None).unwrap();

        prop_assert_eq!(rate.get() as f64, (hz as f64 / factor).round_ties_even());
        prop_assert_eq!(buffer.samples(), &[0.25f32; 16][..]);
    }

    #[test]
    fn prop_non_positive_factor_always_rejected(factor in -1e6f64..=0.0) {
        let err = stretch_audio(raw(vec![0.0; 4], 44100), factor, None).unwrap_err();
        prop_assert_eq!(usage_class(&err), UsageClass::Value);
    }
}
