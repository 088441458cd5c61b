//! Binary crate for the `toolkit` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and dispatching to one handler
//! - Logging setup
//! - Text and JSON output formatting

use anyhow::Context;
use clap::Parser;

mod cli;
mod logging;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose).context("Failed to initialize logging")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cmd.run(&mut out).await
}
