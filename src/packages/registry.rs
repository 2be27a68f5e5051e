//! Installed-package registry
//!
//! The registry is consumed through a narrow trait so the analyzer never
//! depends on a concrete install layout. The shipped implementation scans
//! a directory of `{name}-{version}` installs, the layout produced by
//! vendoring package installs into the application tree.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// One installed package, as the registry reports it
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
    pub install_dir: PathBuf,
    pub dependencies: Vec<String>,
}

/// Lookup interface the analyzer depends on
pub trait PackageRegistry {
    /// Find an installed package by name; `None` when absent
    fn find_by_name(&self, name: &str) -> Option<InstalledPackage>;
}

/// Optional per-package metadata file inside an install
const PACKAGE_SPEC_FILE: &str = "package.yaml";

#[derive(Debug, Default, Deserialize)]
struct PackageSpec {
    #[serde(default)]
    dependencies: Vec<String>,
}

/// Registry over a directory of `{name}-{version}` installs
pub struct DirRegistry {
    root: PathBuf,
}

impl DirRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackageRegistry for DirRegistry {
    fn find_by_name(&self, name: &str) -> Option<InstalledPackage> {
        let entries = std::fs::read_dir(&self.root).ok()?;

        let mut best: Option<(String, PathBuf)> = None;
        for entry in entries.filter_map(|e| e.ok()) {
            if !entry.path().is_dir() {
                continue;
            }
            let dir_name = entry.file_name();
            let Some((candidate, version)) = split_name_version(&dir_name.to_string_lossy())
            else {
                continue;
            };
            if candidate != name {
                continue;
            }
            let newer = match &best {
                Some((current, _)) => version_gt(&version, current),
                None => true,
            };
            if newer {
                best = Some((version, entry.path()));
            }
        }

        let (version, install_dir) = best?;
        let dependencies = read_dependencies(&install_dir);
        Some(InstalledPackage {
            name: name.to_string(),
            version,
            install_dir,
            dependencies,
        })
    }
}

/// Split `kaminari-1.2.2` into (`kaminari`, `1.2.2`)
///
/// The version starts at the first dash-separated segment that begins with
/// a digit, so multi-dash names like `pg_search` or `will-paginate-3.1`
/// resolve correctly.
fn split_name_version(dir_name: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = dir_name.split('-').collect();
    let version_start = segments
        .iter()
        .position(|s| s.chars().next().is_some_and(|c| c.is_ascii_digit()))?;
    if version_start == 0 {
        return None;
    }
    Some((
        segments[..version_start].join("-"),
        segments[version_start..].join("-"),
    ))
}

/// Numeric-aware version comparison; non-numeric parts compare as zero
fn version_gt(a: &str, b: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.split(['.', '-'])
            .map(|part| part.parse::<u64>().unwrap_or(0))
            .collect()
    };
    parse(a) > parse(b)
}

fn read_dependencies(install_dir: &Path) -> Vec<String> {
    let spec_path = install_dir.join(PACKAGE_SPEC_FILE);
    let Ok(content) = std::fs::read_to_string(&spec_path) else {
        return Vec::new();
    };
    match serde_yaml::from_str::<PackageSpec>(&content) {
        Ok(spec) => spec.dependencies,
        Err(e) => {
            debug!(path = %spec_path.display(), error = %e, "ignoring unparseable package spec");
            Vec::new()
        }
    }
}
