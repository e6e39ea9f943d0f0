//! # simplestretch-decode
//!
//! Reads an encoded audio file into a [`SampleBuffer`] and the sample rate
//! it was recorded at, using symphonia. All channels are kept, interleaved,
//! as `f32`.
//!
//! ## Feature Flags
//!
//! - `wav`: WAV/PCM
//! - `flac`: FLAC
//! - `mp3`: MP3
//! - `ogg`: Ogg/Vorbis

pub mod error;

pub use error::{DecodeError, Result};

use simplestretch_core::{SampleBuffer, SampleRate};
use std::fs::File;
use std::io::{self, Cursor};
use std::path::Path;
use symphonia::core::audio::SampleBuffer as PcmBuffer;
use symphonia::core::codecs::{CodecParameters, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decode the audio file at `path`.
///
/// The file extension is passed to the prober as a hint; the content decides.
pub fn decode_file(path: impl AsRef<Path>) -> Result<(SampleBuffer, SampleRate)> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let (buffer, rate) = decode_source(Box::new(file), &hint)?;
    log::debug!(
        "decoded {}: {} frames x {} channels at {}",
        path.display(),
        buffer.frames(),
        buffer.channels(),
        rate
    );
    Ok((buffer, rate))
}

/// Decode an in-memory encoded file.
pub fn decode_bytes(bytes: Vec<u8>, extension: Option<&str>) -> Result<(SampleBuffer, SampleRate)> {
    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }
    decode_source(Box::new(Cursor::new(bytes)), &hint)
}

fn decode_source(source: Box<dyn MediaSource>, hint: &Hint) -> Result<(SampleBuffer, SampleRate)> {
    let mss = MediaSourceStream::new(source, Default::default());

    let probed = symphonia::default::get_probe().format(
        hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let (track_id, params) = select_track(&*format)?;
    let mut decoder = symphonia::default::get_codecs().make(&params, &DecoderOptions::default())?;

    let mut sample_rate = params.sample_rate;
    let mut channels = params.channels.map(|c| c.count());
    let mut samples: Vec<f32> = match (params.n_frames, channels) {
        (Some(frames), Some(count)) => usize::try_from(frames)
            .map(|frames| Vec::with_capacity(frames.saturating_mul(count)))
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => {
                log::debug!("track list changed, stopping at end of first stream");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                sample_rate = sample_rate.or(Some(spec.rate));

                let count = spec.channels.count();
                match channels {
                    None => channels = Some(count),
                    Some(expected) if expected != count => {
                        return Err(DecodeError::InvalidData(format!(
                            "channel count changed from {} to {} mid-stream",
                            expected, count
                        )));
                    }
                    Some(_) => {}
                }

                let mut pcm = PcmBuffer::<f32>::new(decoded.capacity() as u64, spec);
                pcm.copy_interleaved_ref(decoded);
                samples.extend_from_slice(pcm.samples());
            }
            Err(SymphoniaError::DecodeError(err)) => {
                log::warn!("skipping corrupt packet: {}", err);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let sample_rate = sample_rate
        .and_then(|hz| SampleRate::new(hz).ok())
        .ok_or(DecodeError::MissingSampleRate)?;

    let channels = channels.unwrap_or(1);
    let channels = u16::try_from(channels)
        .map_err(|_| DecodeError::InvalidData(format!("too many channels: {}", channels)))?;

    let buffer = SampleBuffer::new(samples, channels)
        .map_err(|e| DecodeError::InvalidData(e.to_string()))?;

    Ok((buffer, sample_rate))
}

/// First track with a real codec, preferring the container's default.
fn select_track(format: &dyn FormatReader) -> Result<(u32, CodecParameters)> {
    let track = format
        .default_track()
        .filter(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .or_else(|| {
            format
                .tracks()
                .iter()
                .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        })
        .ok_or(DecodeError::NoTrack)?;

    Ok((track.id, track.codec_params.clone()))
}
