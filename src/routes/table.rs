//! Route table export (config/routes.json) data structures
//!
//! The export is an array of entries mirroring what the host framework
//! declares. Entries are frequently partial; the loader keeps whatever
//! parses and leaves interpretation to the resolver.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, route as route_error};

/// Path prefixes the host framework reserves for itself
const INTERNAL_PATH_PREFIXES: &[&str] = &["/rails", "/assets", "/cable"];

/// Controller namespaces that belong to the framework, not the application
const INTERNAL_GROUPING_PREFIXES: &[&str] = &["rails/", "active_storage/", "action_mailbox/"];

/// One declared route, as exported by the host application
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteEntry {
    /// Declared path pattern, e.g. `/users/:id(.:format)`
    #[serde(default)]
    pub path: Option<String>,

    /// HTTP verb; missing or unparseable verbs resolve to GET
    #[serde(default)]
    pub verb: Option<String>,

    /// Declared route name, e.g. `user`
    #[serde(default)]
    pub name: Option<String>,

    /// Defaults mapping; `controller` and `action` keys drive resolution
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,

    /// Requirements mapping, consulted when defaults are incomplete
    #[serde(default)]
    pub requirements: BTreeMap<String, String>,
}

impl RouteEntry {
    /// Controller/module path from defaults, falling back to requirements
    pub fn grouping(&self) -> Option<&str> {
        self.defaults
            .get("controller")
            .or_else(|| self.requirements.get("controller"))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Action name from defaults, falling back to requirements
    pub fn action(&self) -> Option<&str> {
        self.defaults
            .get("action")
            .or_else(|| self.requirements.get("action"))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether this entry belongs to the framework rather than the application
    pub fn is_internal(&self) -> bool {
        if let Some(path) = &self.path {
            if INTERNAL_PATH_PREFIXES.iter().any(|p| path.starts_with(p)) {
                return true;
            }
        }
        if let Some(grouping) = self.grouping() {
            if INTERNAL_GROUPING_PREFIXES
                .iter()
                .any(|p| grouping.starts_with(p))
            {
                return true;
            }
        }
        false
    }
}

/// The full route table, in declared order
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    pub entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Load the route table export from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(route_error::table_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| route_error::table_invalid(path.display().to_string(), e.to_string()))?;
        Self::from_json(&content)
            .map_err(|e| route_error::table_invalid(path.display().to_string(), e.to_string()))
    }

    /// Parse the route table from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let entries: Vec<RouteEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_entries() {
        let json = r#"[
            {"path": "/users(.:format)", "verb": "GET", "name": "users",
             "defaults": {"controller": "users", "action": "index"}},
            {"path": "/broken"},
            {"verb": "POST", "requirements": {"controller": "sessions", "action": "create"}}
        ]"#;
        let table = RouteTable::from_json(json).unwrap();
        assert_eq!(table.entries.len(), 3);
        assert_eq!(table.entries[0].grouping(), Some("users"));
        assert_eq!(table.entries[0].action(), Some("index"));
        assert_eq!(table.entries[1].grouping(), None);
        // Requirements back-fill missing defaults
        assert_eq!(table.entries[2].grouping(), Some("sessions"));
    }

    #[test]
    fn test_is_internal() {
        let internal_path = RouteEntry {
            path: Some("/rails/info/properties".to_string()),
            ..Default::default()
        };
        assert!(internal_path.is_internal());

        let internal_grouping = RouteEntry {
            path: Some("/storage/blobs".to_string()),
            defaults: [
                ("controller".to_string(), "active_storage/blobs".to_string()),
                ("action".to_string(), "show".to_string()),
            ]
            .into(),
            ..Default::default()
        };
        assert!(internal_grouping.is_internal());

        let app_route = RouteEntry {
            path: Some("/users".to_string()),
            defaults: [
                ("controller".to_string(), "users".to_string()),
                ("action".to_string(), "index".to_string()),
            ]
            .into(),
            ..Default::default()
        };
        assert!(!app_route.is_internal());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = RouteTable::load(&temp.path().join("routes.json")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RoutepackError::RouteTableNotFound { .. }
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("routes.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = RouteTable::load(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RoutepackError::RouteTableInvalid { .. }
        ));
    }
}
