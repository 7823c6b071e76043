use std::path::Path;

use crate::PixelveilError;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: String,
    password: String,
    max_carrier_size: u64,
) -> Result<(), PixelveilError> {
    crate::api::hide::prepare()
        .with_message(&message)
        .with_image(media)
        .with_output(write_to_file)
        .with_password(password)
        .with_carrier_limit(max_carrier_size)
        .execute()
}
