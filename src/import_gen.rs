// ============================================================================
// Wildcard import generation
// ============================================================================

use std::fs;
use std::path::Path;

use crate::error::{ImportError, Result};

/// Render one import line, newline terminated.
///
/// An empty package yields an unqualified root-package import.
pub fn import_line(package: &str, class_name: &str) -> String {
    if package.is_empty() {
        format!("import {class_name}.*;\n")
    } else {
        format!("import {package}.{class_name}.*;\n")
    }
}

/// One `import <package>.<Class>.*;` per source file directly inside
/// `main_dir`, sorted by file name. Subdirectories are not descended into.
pub fn generate_imports(main_dir: &Path, package: &str, source_suffix: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(main_dir).map_err(|e| ImportError::io(main_dir, e))?;

    let mut class_names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ImportError::io(main_dir, e))?;
        // follows symlinks
        let is_file = fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(class_name) = name.strip_suffix(source_suffix) {
            if !class_name.is_empty() {
                class_names.push(class_name.to_string());
            }
        }
    }

    class_names.sort();
    Ok(class_names.iter().map(|c| import_line(package, c)).collect())
}
