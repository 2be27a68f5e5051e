//! Bundle manifest (manifest.json)
//!
//! One manifest per bundle, written once at extraction time and immutable
//! afterwards. Validation re-reads it: a bundle is valid iff the manifest
//! parses, carries the required top-level keys, and every listed file
//! exists under the bundle root.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::fs::from_forward_slashes;
use crate::error::{Result, RoutepackError, bundle as bundle_error};
use crate::routes::RouteDescriptor;

/// Manifest file name at the bundle root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Top-level keys a manifest must carry to be considered well-formed
pub const REQUIRED_KEYS: &[&str] = &["version", "generated_at", "route", "files"];

/// The manifest document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionManifest {
    /// routepack version that produced the bundle
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub route: ManifestRoute,
    pub options: ManifestOptions,
    pub files: ManifestFiles,
    pub size: ManifestSize,
    /// blake3 over sorted relative paths and file contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Route descriptor fields recorded for provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRoute {
    pub grouping: String,
    pub action: String,
    pub http_method: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_name: Option<String>,
    pub raw_path: String,
}

impl From<&RouteDescriptor> for ManifestRoute {
    fn from(route: &RouteDescriptor) -> Self {
        Self {
            grouping: route.grouping.clone(),
            action: route.action.clone(),
            http_method: route.http_method.clone(),
            display_name: route.display_name.clone(),
            helper_name: route.helper_name.clone(),
            raw_path: route.raw_path.clone(),
        }
    }
}

/// Extraction options in effect when the bundle was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestOptions {
    pub mode: String,
    pub include_packages: bool,
    pub include_tests: bool,
    pub categories: Vec<String>,
}

/// Bundle contents: count plus sorted relative paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFiles {
    pub count: usize,
    pub list: Vec<String>,
}

/// Aggregate size and the file-type histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSize {
    pub total_formatted: String,
    pub by_type: BTreeMap<String, usize>,
}

impl ExtractionManifest {
    /// Write the manifest to the bundle root, pretty-printed
    pub fn write(&self, bundle_root: &Path) -> Result<()> {
        let path = bundle_root.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            bundle_error::manifest_invalid(path.display().to_string(), e.to_string())
        })?;
        std::fs::write(&path, json).map_err(|e| RoutepackError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Read a bundle's manifest back
    pub fn load(bundle_root: &Path) -> Result<Self> {
        let path = bundle_root.join(MANIFEST_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|e| RoutepackError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&content)
            .map_err(|e| bundle_error::manifest_invalid(path.display().to_string(), e.to_string()))
    }
}

/// Histogram of file extensions across a relative path list
pub fn file_type_histogram(relative_paths: &[String]) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for path in relative_paths {
        let name = path.rsplit('/').next().unwrap_or(path);
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!(".{ext}"),
            _ => "(none)".to_string(),
        };
        *histogram.entry(extension).or_insert(0) += 1;
    }
    histogram
}

/// Content checksum over sorted relative paths and file bytes
pub fn compute_checksum(bundle_root: &Path, sorted_relative_paths: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    for rel in sorted_relative_paths {
        hasher.update(rel.as_bytes());
        hasher.update(b"\0");
        if let Ok(bytes) = std::fs::read(from_forward_slashes(bundle_root, rel)) {
            hasher.update(&bytes);
        }
    }
    hasher.finalize().to_hex().to_string()
}
