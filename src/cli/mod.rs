//! Command-line interface.

pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;

/// Linksec - generates the wallet link secret and persists it to disk.
#[derive(Parser)]
#[command(
    name = "linksec",
    about = "Generates the wallet link secret and persists it to disk",
    version
)]
pub struct Cli {
    /// Directory the secret file is written into (must already exist)
    #[arg(long, value_name = "DIR", default_value = constants::DEFAULT_DATA_DIR)]
    pub dir: PathBuf,

    /// Name of the secret file
    #[arg(long = "file", value_name = "NAME", default_value = constants::LINK_SECRET_FILE)]
    pub file_name: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the generate-and-write operation with the parsed arguments.
pub fn execute(cli: &Cli) -> crate::error::Result<()> {
    generate::execute(&cli.dir, &cli.file_name)
}
