use std::io::{self, Write};
use std::path::PathBuf;

use bitveil_core::{api, CodecOptions, SteganoError};
use clap::Args;

use crate::CliResult;

/// Unveils a message hidden in a BMP, PNG or JPEG image
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Image that contains the hidden message
    #[arg(value_name = "input")]
    pub input: PathBuf,

    /// The message will be stored in this file, printed to stdout if omitted
    #[arg(value_name = "output")]
    pub output: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let to_stdout = self.output.is_none();
        let message = api::unveil::prepare()
            .from_secret_file(&self.input)
            .use_file(self.output)
            .with_options(options)
            .execute()?;

        if to_stdout {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&message)
                .and_then(|_| stdout.flush())
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(())
    }
}
