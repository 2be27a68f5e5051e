//! Bundle store lifecycle: enumeration, validation, statistics, pruning
//!
//! The store root holds one immediate subdirectory (or `.zip` archive) per
//! bundle. Every age- or order-sensitive operation works from the
//! timestamp encoded in the bundle name, never from file-system metadata,
//! which copying and archiving can alter.

pub mod prune;
pub mod validate;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::common::fs::dir_size;
use crate::error::Result;
use crate::extractor::ExtractionManifest;
use crate::extractor::bundle_name::parse_timestamp;

pub use prune::{PrunePolicy, PruneReport, parse_duration};
pub use validate::Validation;

/// One bundle as the store sees it
#[derive(Debug, Clone)]
pub struct BundleInfo {
    /// Bundle name (directory name, or archive name without `.zip`)
    pub name: String,
    pub path: PathBuf,
    pub compressed: bool,
    /// Creation time encoded in the name; `None` for undated names
    pub created_at: Option<NaiveDateTime>,
    pub size_bytes: u64,
    pub validation: Validation,
    /// `grouping#action` from the manifest, when it validated
    pub route: Option<String>,
    pub file_count: Option<usize>,
}

/// Aggregate statistics over the store
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    pub count: usize,
    pub total_size_bytes: u64,
    pub oldest: Option<NaiveDateTime>,
    pub newest: Option<NaiveDateTime>,
}

/// Enumerates, validates, and prunes bundles under one store root
pub struct BundleStore {
    root: PathBuf,
}

impl BundleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate every bundle, newest first; undated bundles sort last
    ///
    /// Directories are validated against their manifests; archives are
    /// listed as compressed and not manifest-validated. A missing store
    /// root is an empty store, not an error.
    pub fn list(&self) -> Result<Vec<BundleInfo>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut bundles = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if path.is_dir() {
                bundles.push(inspect_directory(path, file_name));
            } else if file_name.ends_with(".zip") {
                let name = file_name.trim_end_matches(".zip").to_string();
                let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
                bundles.push(BundleInfo {
                    created_at: parse_timestamp(&name),
                    name,
                    path,
                    compressed: true,
                    size_bytes,
                    validation: Validation::NotValidated,
                    route: None,
                    file_count: None,
                });
            }
        }

        bundles.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        });
        Ok(bundles)
    }

    /// Look one bundle up by name (with or without `.zip`)
    pub fn find(&self, name: &str) -> Result<Option<BundleInfo>> {
        let wanted = name.trim_end_matches(".zip");
        Ok(self.list()?.into_iter().find(|b| b.name == wanted))
    }

    /// Aggregate count, total size, and the oldest/newest encoded timestamps
    pub fn statistics(&self) -> Result<StoreStats> {
        let bundles = self.list()?;
        let mut stats = StoreStats {
            count: bundles.len(),
            ..Default::default()
        };
        for bundle in &bundles {
            stats.total_size_bytes += bundle.size_bytes;
            if let Some(created) = bundle.created_at {
                stats.oldest = Some(stats.oldest.map_or(created, |t| t.min(created)));
                stats.newest = Some(stats.newest.map_or(created, |t| t.max(created)));
            }
        }
        Ok(stats)
    }
}

fn inspect_directory(path: PathBuf, name: String) -> BundleInfo {
    let validation = validate::validate_bundle(&path);
    let (route, file_count) = if validation.is_valid() {
        match ExtractionManifest::load(&path) {
            Ok(manifest) => (
                Some(format!(
                    "{}#{}",
                    manifest.route.grouping, manifest.route.action
                )),
                Some(manifest.files.count),
            ),
            Err(_) => (None, None),
        }
    } else {
        (None, None)
    };

    BundleInfo {
        created_at: parse_timestamp(&name),
        size_bytes: dir_size(&path),
        name,
        path,
        compressed: false,
        validation,
        route,
        file_count,
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    //! Fixture bundles for store tests

    use std::path::Path;

    use chrono::Utc;

    use crate::extractor::manifest::{
        ExtractionManifest, ManifestFiles, ManifestOptions, ManifestRoute, ManifestSize,
        compute_checksum, file_type_histogram,
    };

    /// Write a well-formed bundle: files plus a matching manifest.
    /// The name encodes route and timestamp, `{grouping}_{action}_{ts}`.
    pub fn make_bundle(store_root: &Path, name: &str, files: &[(&str, &str)]) {
        let bundle = store_root.join(name);
        let mut list: Vec<String> = Vec::new();
        for (rel, content) in files {
            let path = crate::common::fs::from_forward_slashes(&bundle, rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
            list.push((*rel).to_string());
        }
        list.sort();

        let mut segments = name.split('_');
        let grouping = segments.next().unwrap_or("unknown").to_string();
        let action = segments.next().unwrap_or("unknown").to_string();

        let checksum = compute_checksum(&bundle, &list);
        let manifest = ExtractionManifest {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            route: ManifestRoute {
                display_name: grouping.clone(),
                raw_path: format!("/{grouping}"),
                grouping,
                action,
                http_method: "GET".to_string(),
                helper_name: None,
            },
            options: ManifestOptions {
                mode: "mvc".to_string(),
                include_packages: true,
                include_tests: false,
                categories: vec!["models".to_string()],
            },
            files: ManifestFiles {
                count: list.len(),
                list: list.clone(),
            },
            size: ManifestSize {
                total_formatted: "1 B".to_string(),
                by_type: file_type_histogram(&list),
            },
            checksum: Some(checksum),
        };
        manifest.write(&bundle).unwrap();
    }

    /// A directory that is not a bundle: undated name, no manifest
    pub fn make_undated_dir(store_root: &Path, name: &str) {
        std::fs::create_dir_all(store_root.join(name)).unwrap();
    }
}
