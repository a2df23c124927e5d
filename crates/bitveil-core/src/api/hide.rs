use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::media::types::Media;
use crate::{CodecOptions, HideReport, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    message_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.as_bytes().to_vec());
        self
    }

    /// Hide arbitrary bytes, the message does not need to be text.
    pub fn with_message_bytes(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().as_bytes().to_vec());
        self
    }

    /// The whole content of `message_file` becomes the message.
    pub fn use_message_file<A: AsRef<Path>>(mut self, message_file: Option<A>) -> Self {
        self.message_file = message_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Hide the message and write the carrier to the output.
    /// The output is only created when hiding succeeded.
    pub fn execute(self) -> Result<HideReport, SteganoError> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let message = match (self.message, self.message_file) {
            (Some(message), _) => message,
            (None, Some(file)) => {
                fs::read(&file).map_err(|source| SteganoError::ReadError { source })?
            }
            (None, None) => return Err(SteganoError::MissingMessage),
        };

        let media = Media::from_file(&image)?;
        debug!("hiding {} bytes in {image:?}", message.len());
        let (secret, report) = media.hide_data(&message, &self.options)?;
        secret.save_with_options(&output, &self.options)?;
        info!(
            "hid {} bytes in {output:?}, {} of {} carrier units changed",
            message.len(),
            report.changes,
            report.carrier_units
        );

        Ok(report)
    }

    fn validate(&self) -> Result<(), SteganoError> {
        if self.message.is_none() && self.message_file.is_none() {
            return Err(SteganoError::MissingMessage);
        }

        Ok(())
    }
}
