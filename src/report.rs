// ============================================================================
// Per-file outcomes and run summary
// ============================================================================

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Warn,
    Error,
}

impl FileStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            FileStatus::Ok => "[OK]",
            FileStatus::Warn => "[WARN]",
            FileStatus::Error => "[ERROR]",
        }
    }
}

/// Result of processing a single test file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Number of import lines inserted (0 unless `status` is `Ok`).
    pub imports: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileOutcome {
    pub fn updated(path: PathBuf, imports: usize) -> Self {
        FileOutcome { path, status: FileStatus::Ok, imports, message: None }
    }

    pub fn failed(path: PathBuf, err: &ImportError) -> Self {
        let status = if err.is_warning() { FileStatus::Warn } else { FileStatus::Error };
        FileOutcome { path, status, imports: 0, message: Some(err.to_string()) }
    }
}

/// Everything a run produced, sorted by path.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub project_root: PathBuf,
    pub dry_run: bool,
    pub discovered: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(project_root: PathBuf, dry_run: bool, mut outcomes: Vec<FileOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.path.cmp(&b.path));
        RunReport { project_root, dry_run, discovered: outcomes.len(), outcomes }
    }

    fn count(&self, status: FileStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn updated(&self) -> usize {
        self.count(FileStatus::Ok)
    }

    pub fn skipped(&self) -> usize {
        self.count(FileStatus::Warn)
    }

    pub fn failed(&self) -> usize {
        self.count(FileStatus::Error)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let value = serde_json::json!({
            "project_root": self.project_root,
            "dry_run": self.dry_run,
            "summary": {
                "discovered": self.discovered,
                "updated": self.updated(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "files": self.outcomes,
        });
        serde_json::to_string_pretty(&value)
    }

    /// Human readable summary printed after the per-file log lines.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Test imports: {}\n\
            ----------------------------------------\n\
            Discovered: {}\n\
            Updated:    {}\n\
            Skipped:    {}\n\
            Failed:     {}\n",
            self.project_root.display(),
            self.discovered,
            self.updated(),
            self.skipped(),
            self.failed(),
        );
        if self.dry_run {
            out.push_str("(dry run, no files were written)\n");
        }
        for outcome in self.outcomes.iter().filter(|o| o.status != FileStatus::Ok) {
            out.push_str(&format!(
                "{} {}: {}\n",
                outcome.status.tag(),
                outcome.path.display(),
                outcome.message.as_deref().unwrap_or("")
            ));
        }
        out
    }
}
