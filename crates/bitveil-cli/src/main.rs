use std::process::ExitCode;

use bitveil_core::bitveil_dct::DctError;
use bitveil_core::SteganoError;
use clap::Parser;
use log::error;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    let result = match args.command {
        Commands::Encode(encode) => encode.run(options),
        Commands::Decode(decode) => decode.run(options),
        Commands::Capacity(capacity) => capacity.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            if let Some(hint) = hint(&e) {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn hint(e: &SteganoError) -> Option<&'static str> {
    match e {
        SteganoError::Dct(DctError::UnstableBlock { .. }) => Some(
            "the carrier has flat black or white areas (common in screenshots), pick a photo or another image with texture",
        ),
        SteganoError::CapacityExceeded { .. } => {
            Some("run `bitveil capacity <input>` to see how many bytes fit")
        }
        _ => None,
    }
}
