//! Recursive discovery of JSON input files.

use crate::error::{EtlError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const JSON_EXTENSION: &str = "json";

/// Returns the absolute paths of every `*.json` file under `root`, sorted.
///
/// A missing root is not an error: it yields no files, like walking an empty
/// directory.
pub fn find_json_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        warn!("Data directory {} does not exist", root.display());
        return Ok(Vec::new());
    }
    let root = root
        .canonicalize()
        .map_err(|e| EtlError::io(root, e))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root.as_path()).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            EtlError::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if is_json_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Glob-style `*.json` match: exact, case-sensitive extension and no hidden files.
pub fn is_json_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == JSON_EXTENSION)
        .unwrap_or(false)
}
