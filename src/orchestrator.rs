//! Orchestrator
//!
//! Collects test files, then runs the per-file pipeline
//! (path mapping -> import generation -> rewrite) on a bounded rayon pool.
//! Every worker returns its own [`FileOutcome`]; nothing is shared between
//! workers except the read-only [`Config`].

use std::path::Path;

use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::collector::collect_test_files;
use crate::config::Config;
use crate::error::{ImportError, Result};
use crate::import_gen::generate_imports;
use crate::path_mapper;
use crate::report::{FileOutcome, RunReport};
use crate::rewriter::rewrite_file;

/// Process the whole project.
///
/// Errors only when the run cannot start (bad config, missing test root,
/// pool construction); per-file failures end up in the report.
pub fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;

    let test_root = config.test_source_root();
    if !test_root.is_dir() {
        return Err(ImportError::RootPathInvalid {
            path: test_root,
            reason: "test source root does not exist".into(),
        });
    }

    let test_files = collect_test_files(config);
    info!("Found {} test classes", test_files.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_concurrency)
        .thread_name(|i| format!("import-worker-{i}"))
        .build()
        .map_err(|e| ImportError::Config(format!("failed to build worker pool: {e}")))?;

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        test_files
            .par_iter()
            .map(|file| process_test_file(file, config))
            .collect()
    });

    let report = RunReport::new(config.project_root.clone(), config.dry_run, outcomes);
    info!(
        "Done: {} updated, {} skipped, {} failed",
        report.updated(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

/// Run the pipeline for one file and log its status line.
pub fn process_test_file(test_file: &Path, config: &Config) -> FileOutcome {
    match update_imports(test_file, config) {
        Ok(count) => {
            if config.dry_run {
                info!("[OK] Would insert {count} imports into {}", test_file.display());
            } else {
                info!("[OK] Updated imports in {}", test_file.display());
            }
            FileOutcome::updated(test_file.to_path_buf(), count)
        }
        Err(e) => {
            if e.is_warning() {
                warn!("[WARN] {e}");
            } else {
                error!("[ERROR] {e}");
            }
            FileOutcome::failed(test_file.to_path_buf(), &e)
        }
    }
}

fn update_imports(test_file: &Path, config: &Config) -> Result<usize> {
    let mapping = path_mapper::resolve(test_file, config)?;
    let imports = generate_imports(&mapping.main_dir, &mapping.package, &config.source_file_suffix())?;
    rewrite_file(test_file, &imports, config.dry_run)?;
    Ok(imports.len())
}
