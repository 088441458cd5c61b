//! Diagnostic logging on stderr.
//!
//! Stdout carries only command output, so the subscriber always writes to
//! stderr. The level comes from the `-v` count; the environment is not read.

use anyhow::anyhow;
use tracing::level_filters::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("{err}"))
}
