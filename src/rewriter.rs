// ============================================================================
// Import block insertion
// ============================================================================
//
// Lines keep their own terminators so everything outside the inserted block
// is written back byte for byte.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ImportError, Result};

const PACKAGE_KEYWORD: &str = "package ";

/// Index of the first line that declares the package.
pub fn find_package_line<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.as_ref().trim().starts_with(PACKAGE_KEYWORD))
}

/// Insert `imports` after the package line, wrapped in one blank line on each
/// side. Returns `None` when there is no package line.
pub fn insert_imports(content: &str, imports: &[String]) -> Option<String> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let anchor = find_package_line(&lines)?;

    let extra: usize = imports.iter().map(String::len).sum();
    let mut out = String::with_capacity(content.len() + extra + 3);
    for line in &lines[..=anchor] {
        out.push_str(line);
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    for import in imports {
        out.push_str(import);
    }
    out.push('\n');
    for line in &lines[anchor + 1..] {
        out.push_str(line);
    }
    Some(out)
}

/// Rewrite `path` in place with the import block inserted.
///
/// The file is untouched on any error. With `dry_run` the new content is
/// returned but never written.
pub fn rewrite_file(path: &Path, imports: &[String], dry_run: bool) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
    let updated = insert_imports(&content, imports)
        .ok_or_else(|| ImportError::MissingPackageDeclaration { path: path.to_path_buf() })?;

    if !dry_run {
        write_atomic(path, &updated)?;
    }
    Ok(updated)
}

/// Write to a temp file next to the real target, then rename it over the
/// target. Symlinks are resolved first so the link itself survives.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| ImportError::io(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ImportError::io(dir, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| ImportError::io(tmp.path(), e))?;

    let meta = fs::metadata(&target).map_err(|e| ImportError::io(&target, e))?;
    fs::set_permissions(tmp.path(), meta.permissions()).map_err(|e| ImportError::io(tmp.path(), e))?;

    tmp.persist(&target).map_err(|e| ImportError::io(&target, e.error))?;
    Ok(())
}
