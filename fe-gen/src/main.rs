#![deny(
    // Pedantic on purpose: an inline allow is the way to flag "this is fine, but take a second look."
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! Factory Events test-data generator
//!
//! Prints a batch of synthetic manufacturing events as a JSON array on stdout, suitable for
//! feeding the batch ingestion endpoint. The batch size, spacing and value ranges are fixed; see
//! the `fe_gen::generator` constants.

use std::io::{
    self,
    BufWriter,
};

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// fe-gen command-line interface: writes a fixed batch of synthetic factory events to stdout
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`). Logs go to stderr.
    #[arg(short, long, default_value = fe_gen::DEFAULT_VERBOSITY)]
    verbosity: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Conform to crate-standard logging.
    fe_core::logging::setup(&args.verbosity);
    info!("Generating synthetic factory events");

    let mut out = BufWriter::new(io::stdout().lock());
    fe_gen::run(&mut out)?;
    Ok(())
}
