//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, RoutepackError};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RoutepackError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Copy a single file, creating parent directories of the target as needed
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::copy(source, target).map_err(|e| RoutepackError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Calculate directory size recursively
pub fn dir_size(path: &Path) -> u64 {
    let mut size = 0u64;
    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            if let Ok(meta) = entry.metadata() {
                size += meta.len();
            }
        }
    }
    size
}

/// List all files under a root, as forward-slash paths relative to the root,
/// sorted for stable output.
pub fn relative_file_list(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|rel| to_forward_slashes(rel))
        })
        .collect();
    files.sort();
    files
}

/// Render a path with forward slashes regardless of platform
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a forward-slash relative path onto a root directory
pub fn from_forward_slashes(root: &Path, rel: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for part in rel.split('/').filter(|p| !p.is_empty()) {
        path.push(part);
    }
    path
}
