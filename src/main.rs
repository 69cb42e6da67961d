//! Linksec - generates the wallet link secret and persists it to disk.

use clap::Parser;
use std::io::ErrorKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linksec::cli::{execute, output, Cli};
use linksec::error::LinksecError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("LINKSEC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("linksec=debug")
        } else {
            EnvFilter::new("linksec=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            LinksecError::Write { source, .. } if source.kind() == ErrorKind::NotFound => {
                Some(format!("create the directory first: mkdir -p {}", cli.dir.display()))
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
