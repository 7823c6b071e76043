use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message hidden in a raster image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password the message was masked with, prompted for when absent
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains a hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the message into this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, max_carrier_size: u64) -> CliResult<()> {
        let password = super::read_password(self.password, false)?;
        let message = pixelveil_core::commands::unveil(&self.media, password, max_carrier_size)?;

        match self.output_file {
            Some(file) => std::fs::write(&file, message)
                .map_err(|source| pixelveil_core::PixelveilError::WriteError { source })?,
            None => println!("{message}"),
        }

        Ok(())
    }
}
