use clap::Parser;
use tracing_subscriber::EnvFilter;
use anyhow::Result;

use test_imports::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志 (stderr, one line per event)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::handle(args)
}
