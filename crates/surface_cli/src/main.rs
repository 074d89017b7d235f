//! extract-surface: API surface extraction from the command line
//!
//! ```text
//! extract-surface [OPTIONS] <INPUT>...
//! ```
//!
//! Log verbosity is controlled through the `SURFACE_LOG` environment
//! variable (default `info`).

mod extract;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Use SURFACE_LOG env var for log level configuration, default to "info"
    let filter =
        EnvFilter::try_from_env("SURFACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    extract::run(extract::ExtractArgs::parse())
}
