use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a raster image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to mask the message, prompted for when absent
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG, JPEG, BMP or GIF, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, always PNG encoded
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, max_carrier_size: u64) -> CliResult<()> {
        let password = super::read_password(self.password, true)?;

        pixelveil_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.message,
            password,
            max_carrier_size,
        )
    }
}
