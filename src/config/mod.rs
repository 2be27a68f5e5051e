//! Configuration for routepack
//!
//! A single explicit [`Config`] value is constructed once in `main` and
//! passed by reference into every component. Defaults describe a
//! conventional MVC source tree; an optional `routepack.yaml` at the
//! application root overrides individual fields.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, RoutepackError, config as config_error};

/// Optional configuration file name at the application root
pub const CONFIG_FILE: &str = "routepack.yaml";

/// Resolved configuration: application root plus source-tree layout
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized application root
    pub app_root: PathBuf,
    /// Models directory, relative to the application root
    pub models_path: String,
    /// Views directory, relative to the application root
    pub views_path: String,
    /// Controllers directory, relative to the application root
    pub controllers_path: String,
    /// Helpers directory, relative to the application root
    pub helpers_path: String,
    /// Route table export, relative to the application root
    pub routes_file: String,
    /// Installed-package registry root, relative to the application root
    pub registry_path: String,
    /// Bundle store root, relative to the application root
    pub extract_base: String,
    /// Upper bound on transitive scan depth, regardless of per-call options
    pub max_scan_depth: usize,
}

/// `routepack.yaml` contents; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    models_path: Option<String>,
    #[serde(default)]
    views_path: Option<String>,
    #[serde(default)]
    controllers_path: Option<String>,
    #[serde(default)]
    helpers_path: Option<String>,
    #[serde(default)]
    routes_file: Option<String>,
    #[serde(default)]
    registry_path: Option<String>,
    #[serde(default)]
    extract_base: Option<String>,
    #[serde(default)]
    max_scan_depth: Option<usize>,
}

impl Config {
    /// Build a configuration for an application root, overlaying
    /// `routepack.yaml` when present.
    ///
    /// The root must exist; it is canonicalized so that every derived path
    /// is stable regardless of the working directory.
    pub fn load(app_root: &Path) -> Result<Self> {
        let app_root = dunce::canonicalize(app_root)
            .map_err(|_| config_error::app_root_not_found(app_root.display().to_string()))?;

        let mut config = Self::with_root(app_root);

        let config_path = config.app_root.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| {
                RoutepackError::FileReadFailed {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let overlay: FileConfig = serde_yaml::from_str(&content).map_err(|e| {
                config_error::parse_failed(config_path.display().to_string(), e.to_string())
            })?;
            config.apply(overlay);
        }

        if config.max_scan_depth == 0 {
            return Err(config_error::invalid("max_scan_depth must be at least 1"));
        }

        Ok(config)
    }

    fn with_root(app_root: PathBuf) -> Self {
        Self {
            app_root,
            models_path: "app/models".to_string(),
            views_path: "app/views".to_string(),
            controllers_path: "app/controllers".to_string(),
            helpers_path: "app/helpers".to_string(),
            routes_file: "config/routes.json".to_string(),
            registry_path: "vendor/packages".to_string(),
            extract_base: "route_extracts".to_string(),
            max_scan_depth: 3,
        }
    }

    fn apply(&mut self, overlay: FileConfig) {
        if let Some(v) = overlay.models_path {
            self.models_path = v;
        }
        if let Some(v) = overlay.views_path {
            self.views_path = v;
        }
        if let Some(v) = overlay.controllers_path {
            self.controllers_path = v;
        }
        if let Some(v) = overlay.helpers_path {
            self.helpers_path = v;
        }
        if let Some(v) = overlay.routes_file {
            self.routes_file = v;
        }
        if let Some(v) = overlay.registry_path {
            self.registry_path = v;
        }
        if let Some(v) = overlay.extract_base {
            self.extract_base = v;
        }
        if let Some(v) = overlay.max_scan_depth {
            self.max_scan_depth = v;
        }
    }

    /// Models source root
    pub fn models_dir(&self) -> PathBuf {
        self.app_root.join(&self.models_path)
    }

    /// Views source root
    pub fn views_dir(&self) -> PathBuf {
        self.app_root.join(&self.views_path)
    }

    /// Controllers source root
    pub fn controllers_dir(&self) -> PathBuf {
        self.app_root.join(&self.controllers_path)
    }

    /// Helpers source root
    pub fn helpers_dir(&self) -> PathBuf {
        self.app_root.join(&self.helpers_path)
    }

    /// Controller concerns directory
    pub fn controller_concerns_dir(&self) -> PathBuf {
        self.controllers_dir().join("concerns")
    }

    /// Model concerns directory
    pub fn model_concerns_dir(&self) -> PathBuf {
        self.models_dir().join("concerns")
    }

    /// Route table export path
    pub fn routes_file_path(&self) -> PathBuf {
        self.app_root.join(&self.routes_file)
    }

    /// Installed-package registry root
    pub fn registry_dir(&self) -> PathBuf {
        self.app_root.join(&self.registry_path)
    }

    /// Bundle store root
    pub fn extract_root(&self) -> PathBuf {
        self.app_root.join(&self.extract_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.models_path, "app/models");
        assert_eq!(config.extract_base, "route_extracts");
        assert!(config.models_dir().ends_with("app/models"));
        assert!(config.extract_root().ends_with("route_extracts"));
    }

    #[test]
    fn test_load_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = Config::load(&missing).unwrap_err();
        assert!(matches!(err, RoutepackError::AppRootNotFound { .. }));
    }

    #[test]
    fn test_load_overlay() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "models_path: lib/models\nextract_base: bundles\n",
        )
        .unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.models_path, "lib/models");
        assert_eq!(config.extract_base, "bundles");
        // Untouched fields keep their defaults
        assert_eq!(config.views_path, "app/views");
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "no_such_field: 1\n").unwrap();
        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, RoutepackError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_load_rejects_zero_depth() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "max_scan_depth: 0\n").unwrap();
        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, RoutepackError::ConfigInvalid { .. }));
    }
}
