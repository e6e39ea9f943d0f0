//! Command-line front end.

use crate::{Error, Stretch};
use clap::Parser;
use std::path::PathBuf;

/// Change the length of an audio file by rewriting its sample rate.
///
/// Pitch moves with speed. The output format follows the output extension
/// (.wav or .flac).
#[derive(Debug, Parser)]
#[command(name = "simplestretch", version)]
pub struct Cli {
    /// Audio file to read
    #[arg(short, long, value_name = "PATH")]
    pub audio: PathBuf,

    /// Length multiplier (speed multiplier with --speed)
    #[arg(short, long, value_name = "F", allow_negative_numbers = true)]
    pub factor: f64,

    /// Where to write the result
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Treat the factor as a speed change instead of a length change
    #[arg(short, long)]
    pub speed: bool,
}

/// Run one invocation.
pub fn run(cli: &Cli) -> Result<(), Error> {
    let builder = Stretch::new(cli.audio.as_path()).output(&cli.output);

    let (buffer, rate) = if cli.speed {
        builder.speedup(cli.factor)?
    } else {
        builder.stretch(cli.factor)?
    };

    tracing::info!(
        "Wrote {} at {} ({} frames, {:.2}s)",
        cli.output.display(),
        rate,
        buffer.frames(),
        buffer.duration_secs(rate)
    );
    Ok(())
}
