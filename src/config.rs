// ============================================================================
// Run configuration
// ============================================================================
//
// Layering: compiled defaults < YAML file (--config) < CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ImportError, Result};

pub const DEFAULT_MAIN_ROOT: &str = "src/main/java";
pub const DEFAULT_TEST_ROOT: &str = "src/test/java";
pub const DEFAULT_MAX_CONCURRENCY: usize = 12;
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";
pub const DEFAULT_TEST_SUFFIX: &str = "Test";

/// Immutable settings shared read-only by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute project root.
    pub project_root: PathBuf,
    /// Main source root, relative to `project_root`.
    pub main_root: PathBuf,
    /// Test source root, relative to `project_root`.
    pub test_root: PathBuf,
    pub max_concurrency: usize,
    /// Source file extension without the leading dot.
    pub source_extension: String,
    /// File stem suffix that marks a test class.
    pub test_suffix: String,
    /// Compute new contents but leave files untouched.
    pub dry_run: bool,
}

impl Config {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Config {
            project_root: project_root.into(),
            main_root: PathBuf::from(DEFAULT_MAIN_ROOT),
            test_root: PathBuf::from(DEFAULT_TEST_ROOT),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
            dry_run: false,
        }
    }

    pub fn main_source_root(&self) -> PathBuf {
        self.project_root.join(&self.main_root)
    }

    pub fn test_source_root(&self) -> PathBuf {
        self.project_root.join(&self.test_root)
    }

    /// `.java`
    pub fn source_file_suffix(&self) -> String {
        format!(".{}", self.source_extension)
    }

    /// `Test.java`
    pub fn test_file_suffix(&self) -> String {
        format!("{}.{}", self.test_suffix, self.source_extension)
    }

    /// Apply the values present in a config file.
    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(main_root) = file.main_root {
            self.main_root = main_root;
        }
        if let Some(test_root) = file.test_root {
            self.test_root = test_root;
        }
        if let Some(n) = file.max_concurrency {
            self.max_concurrency = n;
        }
        if let Some(ext) = file.source_extension {
            self.source_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(suffix) = file.test_suffix {
            self.test_suffix = suffix;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(ImportError::Config("max_concurrency must be at least 1".into()));
        }
        if self.source_extension.is_empty() {
            return Err(ImportError::Config("source_extension must not be empty".into()));
        }
        for (name, rel) in [("main_root", &self.main_root), ("test_root", &self.test_root)] {
            if rel.is_absolute() {
                return Err(ImportError::Config(format!(
                    "{name} must be relative to the project root, got {}",
                    rel.display()
                )));
            }
        }
        Ok(())
    }
}

/// On-disk config file. Every field is optional; missing fields keep the
/// compiled defaults.
///
/// ```yaml
/// main_root: src/main/java
/// test_root: src/test/java
/// max_concurrency: 8
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub main_root: Option<PathBuf>,
    pub test_root: Option<PathBuf>,
    pub max_concurrency: Option<usize>,
    pub source_extension: Option<String>,
    pub test_suffix: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
        Self::parse(&content)
            .map_err(|e| ImportError::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Resolve a user supplied project path to an absolute, existing directory.
pub fn resolve_project_root(path: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(path).map_err(|e| ImportError::RootPathInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !root.is_dir() {
        return Err(ImportError::RootPathInvalid {
            path: path.to_path_buf(),
            reason: "not a directory".into(),
        });
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::new("/proj");
        assert_eq!(config.main_source_root(), PathBuf::from("/proj/src/main/java"));
        assert_eq!(config.test_source_root(), PathBuf::from("/proj/src/test/java"));
        assert_eq!(config.max_concurrency, 12);
        assert_eq!(config.source_file_suffix(), ".java");
        assert_eq!(config.test_file_suffix(), "Test.java");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_file_overrides_only_present_fields() {
        let file = FileConfig::parse("test_root: tests/java\nmax_concurrency: 3\nsource_extension: .kt\n").unwrap();
        let mut config = Config::new("/proj");
        config.merge_file(file);

        assert_eq!(config.main_root, PathBuf::from(DEFAULT_MAIN_ROOT));
        assert_eq!(config.test_root, PathBuf::from("tests/java"));
        assert_eq!(config.max_concurrency, 3);
        assert_eq!(config.source_extension, "kt");
        assert_eq!(config.test_file_suffix(), "Test.kt");
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = FileConfig::parse("  \n").unwrap();
        assert!(file.main_root.is_none());
        assert!(file.max_concurrency.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(FileConfig::parse("workers: 4\n").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let mut config = Config::new("/proj");
        config.max_concurrency = 0;
        assert!(matches!(config.validate(), Err(ImportError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_absolute_roots() {
        let mut config = Config::new("/proj");
        config.test_root = PathBuf::from("/elsewhere");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_project_root() {
        let dir = tempdir().unwrap();
        let resolved = resolve_project_root(dir.path()).unwrap();
        assert!(resolved.is_absolute());

        let missing = dir.path().join("nope");
        assert!(matches!(
            resolve_project_root(&missing),
            Err(ImportError::RootPathInvalid { .. })
        ));

        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(resolve_project_root(&file).is_err());
    }
}
