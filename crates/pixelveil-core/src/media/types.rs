use std::fs::File;
use std::path::Path;

pub use image::RgbImage;
use log::{debug, error};

use crate::error::PixelveilError;
use crate::lsb_codec::LsbCodec;
use crate::message::Message;
use crate::result::Result;

use super::Persist;

/// carrier file extensions accepted for loading
const CARRIER_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// default upper bound for carrier files read from disk
pub const MAX_CARRIER_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// a media container for steganography
///
/// Whatever the source format was, the pixel data is held as 3-channel RGB,
/// row-major and channel-interleaved, so the codec sees a flat sequence of
/// `width * height * 3` samples.
#[derive(Debug)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        Self::from_file_with_limit(f, MAX_CARRIER_FILE_SIZE)
    }

    pub fn from_file_with_limit(f: &Path, max_file_size: u64) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or(PixelveilError::UnsupportedMedia)?;
        if !CARRIER_EXTENSIONS.contains(&ext.as_str()) {
            return Err(PixelveilError::UnsupportedMedia);
        }

        let size = std::fs::metadata(f)
            .map_err(|source| PixelveilError::ReadError { source })?
            .len();
        if size > max_file_size {
            return Err(PixelveilError::CarrierTooLarge {
                size,
                limit: max_file_size,
            });
        }

        let image = image::open(f)
            .map_err(|e| {
                error!("Error opening carrier image {f:?}: {e}");
                PixelveilError::InvalidImageMedia
            })?
            .to_rgb8();

        Ok(Self::from_image(image))
    }

    /// Embeds the masked message into the least significant bits of the
    /// pixel samples. The image keeps its dimensions; on failure it is left
    /// untouched.
    pub fn hide_message(&mut self, message: &Message, password: &str) -> Result<&mut Self> {
        let data = message.to_raw_data(password);
        debug!("embedding {} payload byte(s)", data.len());

        let samples = self.image.as_flat_samples_mut();
        LsbCodec::embed(samples.samples, &data).map_err(|e| {
            error!("Error embedding message: {e}");
            e
        })?;

        Ok(self)
    }

    /// Extracts and unmasks the message hidden in the pixel samples.
    pub fn unveil_message(&self, password: &str) -> Result<Message> {
        let samples = self.image.as_flat_samples();
        let data = LsbCodec::extract(samples.samples)?;

        Message::from_raw_data(&data, password)
    }

    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        // PNG is lossless, any lossy re-compression would shred the LSBs
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixelveilError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelveilError::WriteError { source: e }
        })?;

        self.save_to_writer(f)
    }
}
