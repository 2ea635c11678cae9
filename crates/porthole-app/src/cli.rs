use std::path::PathBuf;

use clap::Parser;

/// Porthole: a minimal desktop shell around a web front-end.
#[derive(Parser, Debug)]
#[command(name = "porthole", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `porthole=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load from the development server and open devtools.
    #[arg(long)]
    pub dev: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
