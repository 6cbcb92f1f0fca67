// 📂 Input Discovery - Find record files under a directory

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect regular files carrying the given extension (no dot).
///
/// The list is sorted so dispatch order is reproducible run to run; the
/// pipeline's result does not depend on it either way. A directory that
/// cannot be read fails the discovery.
pub fn find_input_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
