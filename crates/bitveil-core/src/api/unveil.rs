use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::types::Media;
use crate::media::write_atomically;
use crate::{CodecOptions, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret media that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Also write the unveiled message to this file
    pub fn into_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file<A: AsRef<Path>>(mut self, output_file: Option<A>) -> Self {
        self.output_file = output_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the message bytes
    pub fn execute(self) -> Result<Vec<u8>, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let message = media.unveil_data(&self.options)?;
        info!("unveiled {} bytes from {secret_media:?}", message.len());

        if let Some(output_file) = self.output_file {
            write_atomically(&output_file, |w| {
                w.write_all(&message)
                    .map_err(|source| SteganoError::WriteError { source })
            })?;
        }

        Ok(message)
    }
}
