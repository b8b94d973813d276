// ============================================================================
// Error taxonomy
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while generating imports.
///
/// Per-file variants are caught by the orchestrator and turned into a
/// [`crate::report::FileOutcome`]; only `RootPathInvalid` and `Config` abort a
/// run, and they can only happen before any file is dispatched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("main source directory {} not found, skipping {}", .main_dir.display(), .test_file.display())]
    MissingMainDirectory { test_file: PathBuf, main_dir: PathBuf },

    #[error("no package declaration found in {}", .path.display())]
    MissingPackageDeclaration { path: PathBuf },

    #[error("{} is not under the test source root", .path.display())]
    NotUnderTestRoot { path: PathBuf },

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project path {}: {reason}", .path.display())]
    RootPathInvalid { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io { path: path.into(), source }
    }

    /// Warnings skip the file quietly; everything else is reported as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ImportError::MissingMainDirectory { .. })
    }
}

pub type Result<T, E = ImportError> = std::result::Result<T, E>;
