use std::path::{Path, PathBuf};

use crate::media::{Media, MAX_CARRIER_FILE_SIZE};
use crate::PixelveilError;

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Option<Password>,
    max_carrier_size: Option<u64>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was masked with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the default carrier file size limit (in bytes)
    pub fn with_carrier_limit(mut self, max_carrier_size: u64) -> Self {
        self.max_carrier_size = Some(max_carrier_size);
        self
    }

    /// Execute the unveil process and blocks until it is finished,
    /// returning the revealed message text
    pub fn execute(self) -> Result<String, PixelveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(password) = self.password else {
            return Err(PixelveilError::MissingPassword);
        };

        let media = Media::from_file_with_limit(
            &secret_media,
            self.max_carrier_size.unwrap_or(MAX_CARRIER_FILE_SIZE),
        )?;
        let message = media.unveil_message(password.as_str())?;

        Ok(message.text)
    }
}
