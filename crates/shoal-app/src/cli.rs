use std::path::PathBuf;

use clap::Parser;

/// Shoal: a desktop shell for your web communities.
#[derive(Parser, Debug)]
#[command(name = "shoal", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `shoal_shell=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Root directory for per-server web data.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
