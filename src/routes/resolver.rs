//! Route pattern resolution against the route table
//!
//! Resolution enumerates the table once per call. Entries that cannot be
//! interpreted are skipped and reported alongside the result, never fatal
//! to the enumeration.

use tracing::debug;

use super::table::{RouteEntry, RouteTable};
use super::RouteDescriptor;
use crate::error::{Result, route as route_error};

/// A table entry the resolver could not interpret, with the reason
#[derive(Debug, Clone)]
pub struct SkippedRoute {
    pub path: String,
    pub reason: String,
}

/// Resolves route patterns against a loaded route table
pub struct RouteResolver<'a> {
    table: &'a RouteTable,
}

impl<'a> RouteResolver<'a> {
    pub fn new(table: &'a RouteTable) -> Self {
        Self { table }
    }

    /// All resolvable descriptors in declared order, plus the entries that
    /// were skipped (internal routes, entries with no derivable
    /// grouping/action).
    pub fn descriptors(&self) -> (Vec<RouteDescriptor>, Vec<SkippedRoute>) {
        let mut descriptors = Vec::new();
        let mut skipped = Vec::new();

        for entry in &self.table.entries {
            let display_path = entry.path.clone().unwrap_or_default();
            if entry.is_internal() {
                debug!(path = %display_path, "skipping framework-internal route");
                skipped.push(SkippedRoute {
                    path: display_path,
                    reason: "framework-internal route".to_string(),
                });
                continue;
            }
            match descriptor_from_entry(entry) {
                Some(descriptor) => descriptors.push(descriptor),
                None => {
                    debug!(path = %display_path, "skipping route without grouping/action");
                    skipped.push(SkippedRoute {
                        path: display_path,
                        reason: "no grouping/action derivable".to_string(),
                    });
                }
            }
        }

        (descriptors, skipped)
    }

    /// Resolve a single route: exact `grouping#action` match, or the first
    /// name/substring match for a bare pattern.
    pub fn resolve(&self, pattern: &str) -> Result<RouteDescriptor> {
        self.find_matches(pattern)
            .into_iter()
            .next()
            .ok_or_else(|| route_error::not_found(pattern))
    }

    /// All descriptors matching a pattern, in declared order.
    ///
    /// Patterns containing `#` match grouping and action exactly. Bare
    /// patterns match the declared route name exactly first; failing that,
    /// they match case-insensitively as a substring of the display path,
    /// grouping, or action.
    pub fn find_matches(&self, pattern: &str) -> Vec<RouteDescriptor> {
        let resolvable: Vec<(&RouteEntry, RouteDescriptor)> = self
            .table
            .entries
            .iter()
            .filter(|e| !e.is_internal())
            .filter_map(|e| descriptor_from_entry(e).map(|d| (e, d)))
            .collect();

        if let Some((grouping, action)) = pattern.split_once('#') {
            return resolvable
                .into_iter()
                .filter(|(_, d)| d.grouping == grouping && d.action == action)
                .map(|(_, d)| d)
                .collect();
        }

        let by_name: Vec<RouteDescriptor> = resolvable
            .iter()
            .filter(|(e, _)| e.name.as_deref() == Some(pattern))
            .map(|(_, d)| d.clone())
            .collect();
        if !by_name.is_empty() {
            return by_name;
        }

        let needle = pattern.to_lowercase();
        resolvable
            .into_iter()
            .filter(|(_, d)| {
                d.display_name.to_lowercase().contains(&needle)
                    || d.grouping.to_lowercase().contains(&needle)
                    || d.action.to_lowercase().contains(&needle)
            })
            .map(|(_, d)| d)
            .collect()
    }
}

/// Build a descriptor from one table entry, or None when the entry has no
/// derivable grouping/action.
fn descriptor_from_entry(entry: &RouteEntry) -> Option<RouteDescriptor> {
    let grouping = entry.grouping()?.to_string();
    let action = entry.action()?.to_string();

    let raw_path = entry.path.clone().unwrap_or_default();
    let http_method = entry
        .verb
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| "GET".to_string());

    let display_name = raw_path
        .trim_end_matches("(.:format)")
        .trim_start_matches('/')
        .to_string();

    let helper_name = entry
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(|n| format!("{n}_path"));

    Some(RouteDescriptor {
        grouping,
        action,
        http_method,
        display_name,
        helper_name,
        raw_path,
    })
}
