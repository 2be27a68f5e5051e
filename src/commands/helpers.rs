//! Command helper utilities

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::store::BundleStore;

/// Build the configuration for a command, defaulting to the current
/// directory when no application root was given.
pub fn load_config(app_root: Option<PathBuf>) -> Result<Config> {
    let root = match app_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    Config::load(&root)
}

/// Apply a `--base-path` override onto the configuration
///
/// Absolute overrides win outright; relative ones stay relative to the
/// application root, matching how the config file field behaves.
pub fn apply_base_path(config: &mut Config, base_path: Option<PathBuf>) {
    if let Some(path) = base_path {
        config.extract_base = path.to_string_lossy().into_owned();
    }
}

/// The bundle store a command operates on
pub fn store_for(config: &Config) -> BundleStore {
    BundleStore::new(config.extract_root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_base_path_absolute_override() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::load(temp.path()).unwrap();
        let elsewhere = temp.path().join("elsewhere");
        apply_base_path(&mut config, Some(elsewhere.clone()));
        assert_eq!(config.extract_root(), elsewhere);
    }

    #[test]
    fn test_apply_base_path_none_keeps_default() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::load(temp.path()).unwrap();
        apply_base_path(&mut config, None);
        assert!(config.extract_root().ends_with("route_extracts"));
    }
}
