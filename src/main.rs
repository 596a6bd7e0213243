//! Spanner CLI
//!
//! Drives the cart and the vehicle compatibility resolver against a file-backed store.

use std::io;

use clap::Parser;
use spanner::{config, observability};

use crate::cli::Cli;

mod cli;

fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    let cli = Cli::parse();

    observability::init_logging(&cli.config.logging)?;

    cli.run(&mut io::stdout().lock())
}
