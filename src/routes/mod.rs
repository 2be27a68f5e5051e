//! Route table consumption and route pattern resolution
//!
//! The host framework's route table is consumed as an exported JSON document
//! (see [`table::RouteTable`]); the resolver only depends on the narrow
//! capability set each entry exposes (verb, path, name, defaults,
//! requirements), never on a concrete host type.

pub mod resolver;
pub mod table;

pub use resolver::{RouteResolver, SkippedRoute};
pub use table::{RouteEntry, RouteTable};

/// A resolved route endpoint
///
/// Identity is the `(grouping, action)` pair. The route table may contain
/// duplicates; resolution picks the first match in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Controller/module path, e.g. `users` or `admin/users`
    pub grouping: String,
    /// Action name, e.g. `index`
    pub action: String,
    /// Normalized HTTP method, defaulting to GET
    pub http_method: String,
    /// Display path with format suffix and leading slash stripped
    pub display_name: String,
    /// URL helper name derived from the declared route name, when present
    pub helper_name: Option<String>,
    /// Declared path pattern as found in the route table
    pub raw_path: String,
}

impl RouteDescriptor {
    /// The `grouping#action` pattern identifying this route
    pub fn pattern(&self) -> String {
        format!("{}#{}", self.grouping, self.action)
    }
}

impl std::fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}#{}", self.http_method, self.grouping, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern() {
        let descriptor = RouteDescriptor {
            grouping: "admin/users".to_string(),
            action: "index".to_string(),
            http_method: "GET".to_string(),
            display_name: "admin/users".to_string(),
            helper_name: Some("admin_users_path".to_string()),
            raw_path: "/admin/users(.:format)".to_string(),
        };
        assert_eq!(descriptor.pattern(), "admin/users#index");
        assert_eq!(descriptor.to_string(), "GET admin/users#index");
    }
}
