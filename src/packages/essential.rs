//! Essential-file classification for package installs
//!
//! An allow-list of glob patterns keeps library sources, framework
//! integration files, and top-level docs. Everything else — build
//! artifacts, test suites, vendored sub-dependencies — falls out simply by
//! not matching.

use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use crate::common::fs::relative_file_list;

/// Patterns a file must match to be considered essential
const ESSENTIAL_PATTERNS: &[&str] = &[
    "lib/**",
    "app/**",
    "config/**",
    "rails/**",
    "README*",
    "LICENSE*",
    "CHANGELOG*",
];

/// Check one relative path against the allow-list
pub fn is_essential(relative_path: &str) -> bool {
    let candidate = CandidatePath::from(relative_path);
    ESSENTIAL_PATTERNS.iter().any(|pattern| {
        Glob::new(pattern)
            .map(|glob| glob.matched(&candidate).is_some())
            .unwrap_or(false)
    })
}

/// Essential files inside an install, as sorted forward-slash relative paths
pub fn essential_files(install_dir: &Path) -> Vec<String> {
    relative_file_list(install_dir)
        .into_iter()
        .filter(|rel| is_essential(rel))
        .collect()
}
