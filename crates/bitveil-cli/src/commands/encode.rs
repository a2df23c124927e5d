use std::io;
use std::path::PathBuf;

use bitveil_core::{api, CodecOptions, SteganoError};
use clap::Args;
use dialoguer::Input;

use crate::CliResult;

/// Hides a message in a BMP, PNG or JPEG image
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Carrier image, used readonly
    #[arg(value_name = "input")]
    pub input: PathBuf,

    /// The image with the hidden message will be stored as this file
    #[arg(value_name = "output")]
    pub output: PathBuf,

    /// A text message that will be hidden, prompted for when neither this nor a message file is given
    #[arg(short, long, value_name = "text message", conflicts_with = "message_file")]
    pub message: Option<String>,

    /// A file whose content will be hidden
    #[arg(short = 'f', long, value_name = "message file")]
    pub message_file: Option<PathBuf>,
}

impl EncodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = match (self.message, &self.message_file) {
            (None, None) => Some(prompt_message()?),
            (message, _) => message,
        };

        let report = api::hide::prepare()
            .use_message(message)
            .use_message_file(self.message_file)
            .with_image(&self.input)
            .with_output(&self.output)
            .with_options(options)
            .execute()?;

        println!(
            "{} of {} carrier units changed, mean squared error {:.6}",
            report.changes,
            report.carrier_units,
            report.mean_squared_error()
        );

        Ok(())
    }
}

fn prompt_message() -> CliResult<String> {
    Input::<String>::new()
        .with_prompt("Message to hide")
        .interact_text()
        .map_err(|e| SteganoError::ReadError {
            source: io::Error::new(io::ErrorKind::Other, e),
        })
}
