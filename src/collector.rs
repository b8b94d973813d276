// ============================================================================
// Test file collection
// ============================================================================

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Recursively collect every `*Test.java` file under the test source root.
///
/// Directory symlinks are not descended into; file symlinks are kept. Paths
/// that resolve to the same physical file are collected once, so no file is
/// handed to two workers. A missing root yields an empty list; unreadable
/// entries are skipped. The result is sorted so log output is stable.
pub fn collect_test_files(config: &Config) -> Vec<PathBuf> {
    let test_root = config.test_source_root();
    let suffix = config.test_file_suffix();

    let mut files: Vec<PathBuf> = WalkDir::new(&test_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(is_regular_file)
        .filter(|e| e.file_name().to_string_lossy().ends_with(&suffix))
        .map(|e| e.into_path())
        .collect();
    files.sort();

    let mut seen = HashSet::new();
    files.retain(|path| {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        let first = seen.insert(key);
        if !first {
            debug!("skipping {}: same file already collected", path.display());
        }
        first
    });

    debug!("collected {} test files under {}", files.len(), test_root.display());
    files
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false)
    } else {
        file_type.is_file()
    }
}
