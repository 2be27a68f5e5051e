//! Third-party package analysis
//!
//! Resolves a detected package name to its install metadata through a
//! [`PackageRegistry`] and classifies which files inside the install are
//! worth carrying into a bundle. Absent packages are an expected, frequent
//! condition: a detected signature says nothing about what is installed,
//! so lookup failure is a structured report, not an error.

pub mod essential;
pub mod registry;

use crate::common::fs::dir_size;

pub use registry::{DirRegistry, InstalledPackage, PackageRegistry};

/// Install metadata plus the essential-file classification
#[derive(Debug, Clone)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub install_dir: std::path::PathBuf,
    /// Names declared by the package's own metadata file
    pub dependencies: Vec<String>,
    /// Relative paths (forward slashes) classified as essential
    pub essential_files: Vec<String>,
    pub total_size_bytes: u64,
}

/// Outcome of analyzing one package name
#[derive(Debug, Clone)]
pub enum PackageReport {
    Found(Box<PackageMetadata>),
    Missing { name: String, reason: String },
}

impl PackageReport {
    pub fn is_found(&self) -> bool {
        matches!(self, PackageReport::Found(_))
    }
}

/// Analyzes packages against a registry
pub struct PackageAnalyzer<R: PackageRegistry> {
    registry: R,
}

impl<R: PackageRegistry> PackageAnalyzer<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Resolve install metadata and classify essential files
    pub fn analyze(&self, name: &str) -> PackageReport {
        let Some(package) = self.registry.find_by_name(name) else {
            return PackageReport::Missing {
                name: name.to_string(),
                reason: "not present in the package registry".to_string(),
            };
        };

        let essential_files = essential::essential_files(&package.install_dir);
        let total_size_bytes = dir_size(&package.install_dir);

        PackageReport::Found(Box::new(PackageMetadata {
            name: package.name,
            version: package.version,
            install_dir: package.install_dir,
            dependencies: package.dependencies,
            essential_files,
            total_size_bytes,
        }))
    }
}
