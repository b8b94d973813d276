//! CLI 模式处理器
//!
//! Parses flags into a [`Config`], runs the orchestrator and prints the
//! summary. `--json` switches the summary to a JSON document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{resolve_project_root, Config, FileConfig};
use crate::orchestrator;

/// Generate wildcard imports in Java test classes from the matching main
/// source packages.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project root
    #[arg(long)]
    pub project_path: PathBuf,

    /// Main source root, relative to the project root [default: src/main/java]
    #[arg(long)]
    pub main_root: Option<PathBuf>,

    /// Test source root, relative to the project root [default: src/test/java]
    #[arg(long)]
    pub test_root: Option<PathBuf>,

    /// Maximum number of files processed at once [default: 12]
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Defaults, then the config file, then explicit flags.
pub fn build_config(args: &Args) -> Result<Config> {
    let root = resolve_project_root(&args.project_path)?;
    let mut config = Config::new(root);

    if let Some(path) = &args.config {
        let file = FileConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        config.merge_file(file);
    }
    if let Some(main_root) = &args.main_root {
        config.main_root = main_root.clone();
    }
    if let Some(test_root) = &args.test_root {
        config.test_root = test_root.clone();
    }
    if let Some(n) = args.max_concurrency {
        config.max_concurrency = n;
    }
    config.dry_run = args.dry_run;

    config.validate()?;
    Ok(config)
}

/// 处理 CLI 命令
pub fn handle(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let report = orchestrator::run(&config)
        .with_context(|| format!("processing {}", config.project_root.display()))?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
