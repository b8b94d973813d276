// ============================================================================
// Test path -> main directory / package mapping
// ============================================================================

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::error::{ImportError, Result};

/// Where a test file's imports come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMapping {
    /// Directory of the test file relative to the test source root.
    pub module_path: PathBuf,
    /// Matching directory under the main source root.
    pub main_dir: PathBuf,
    /// Dotted package, empty for the root package.
    pub package: String,
}

/// Compute the mapping without touching the filesystem.
pub fn map_test_file(test_file: &Path, config: &Config) -> Result<PackageMapping> {
    let test_root = config.test_source_root();
    let relative = test_file
        .strip_prefix(&test_root)
        .map_err(|_| ImportError::NotUnderTestRoot { path: test_file.to_path_buf() })?;

    let module_path = relative.parent().map(Path::to_path_buf).unwrap_or_default();
    let main_dir = config.main_source_root().join(&module_path);
    let package = module_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".");

    Ok(PackageMapping { module_path, main_dir, package })
}

/// Map the test file and require the main directory to exist.
pub fn resolve(test_file: &Path, config: &Config) -> Result<PackageMapping> {
    let mapping = map_test_file(test_file, config)?;
    if !mapping.main_dir.is_dir() {
        return Err(ImportError::MissingMainDirectory {
            test_file: test_file.to_path_buf(),
            main_dir: mapping.main_dir,
        });
    }
    Ok(mapping)
}
