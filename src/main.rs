//! simplestretch binary.

use clap::Parser;
use simplestretch::cli::{run, Cli};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}
