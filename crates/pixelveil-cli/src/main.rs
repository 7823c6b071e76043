use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = std::result::Result<T, pixelveil_core::PixelveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let cli = CliArgs::parse();
    let max_carrier_size = cli.max_carrier_size * 1024 * 1024;
    debug!("accepting carrier files up to {max_carrier_size} bytes");

    match cli.command {
        Commands::Hide(args) => args.run(max_carrier_size),
        Commands::Unveil(args) => args.run(max_carrier_size),
    }
}
