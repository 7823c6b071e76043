use std::path::Path;

use crate::PixelveilError;

pub fn unveil(
    secret_media: &Path,
    password: String,
    max_carrier_size: u64,
) -> Result<String, PixelveilError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .using_password(password)
        .with_carrier_limit(max_carrier_size)
        .execute()
}
