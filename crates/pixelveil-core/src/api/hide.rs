use std::path::{Path, PathBuf};

use crate::media::{Media, Persist, MAX_CARRIER_FILE_SIZE};
use crate::message::Message;
use crate::PixelveilError;

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Option<Password>,
    max_carrier_size: Option<u64>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// This is the carrier image the message will be hidden in
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image with the embedded message will be written here, always as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used to mask the message
    pub fn with_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the default carrier file size limit (in bytes)
    pub fn with_carrier_limit(mut self, max_carrier_size: u64) -> Self {
        self.max_carrier_size = Some(max_carrier_size);
        self
    }

    /// Execute the hide process and blocks until it is finished
    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(message) = self.message else {
            return Err(PixelveilError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };
        let Some(password) = self.password else {
            return Err(PixelveilError::MissingPassword);
        };

        let message = Message::new(message)?;
        let mut media = Media::from_file_with_limit(
            &image,
            self.max_carrier_size.unwrap_or(MAX_CARRIER_FILE_SIZE),
        )?;

        media
            .hide_message(&message, password.as_str())?
            .save_as(&output)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::RgbImage;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        RgbImage::from_pixel(32, 32, image::Rgb([1, 2, 3]))
            .save(&carrier)
            .expect("Failed to write carrier image");

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn should_require_all_arguments() {
        match prepare().execute() {
            Err(PixelveilError::MissingMessage) => (),
            other => panic!("expected missing-message error, got {other:?}"),
        }

        match prepare().with_message("hi").execute() {
            Err(PixelveilError::CarrierNotSet) => (),
            other => panic!("expected carrier-not-set error, got {other:?}"),
        }

        match prepare().with_message("hi").with_image("in.png").execute() {
            Err(PixelveilError::TargetNotSet) => (),
            other => panic!("expected target-not-set error, got {other:?}"),
        }

        match prepare()
            .with_message("hi")
            .with_image("in.png")
            .with_output("out.png")
            .execute()
        {
            Err(PixelveilError::MissingPassword) => (),
            other => panic!("expected missing-password error, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_empty_message_before_touching_the_carrier() {
        match prepare()
            .with_message("")
            .with_image("does-not-even-exist.png")
            .with_output("out.png")
            .with_password("pw")
            .execute()
        {
            Err(PixelveilError::EmptyMessage) => (),
            other => panic!("expected empty-message error, got {other:?}"),
        }
    }
}
