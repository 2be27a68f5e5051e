//! Dependency closure resolution for routes
//!
//! Combines naming-convention lookup with transitive idiom scanning:
//! conventional files are seeded first, then every discovered controller
//! and view file is scanned for references, which are mapped back to files
//! through the same conventions. Scanning recurses into discovered files
//! only when association following is enabled, bounded by a depth limit and
//! a visited set.

pub mod closure;
pub mod conventions;

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::routes::RouteDescriptor;
use crate::scanner::{self, ScanReport};

pub use closure::{Category, DependencyClosure};

/// Options bounding a closure resolution
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Scan discovered dependents transitively
    pub follow_associations: bool,
    /// Depth bound when following associations; depth 1 scans only the
    /// route's own controller and view files
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            follow_associations: false,
            max_depth: 1,
        }
    }
}

/// Resolves route descriptors to dependency closures
pub struct DependencyResolver<'a> {
    config: &'a Config,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Build the full dependency closure for a route
    ///
    /// Never fails: files that cannot be read are skipped, and a route
    /// matching nothing yields an empty closure.
    pub fn resolve_closure(
        &self,
        route: &RouteDescriptor,
        options: &ResolveOptions,
    ) -> DependencyClosure {
        let mut closure = DependencyClosure::default();
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::new();

        let effective_max = if options.follow_associations {
            options.max_depth.min(self.config.max_scan_depth)
        } else {
            1
        };

        // Conventional seeds, existence-filtered. Controllers and views are
        // the depth-1 scan set; the model and helper are scanned only when
        // following associations.
        let controller = conventions::controller_file(self.config, &route.grouping);
        if controller.is_file() {
            closure.push(Category::Controllers, &controller);
            queue.push_back((controller, 1));
        }
        for view in conventions::view_files(self.config, &route.grouping, &route.action) {
            closure.push(Category::Views, &view);
            queue.push_back((view, 1));
        }
        let model = conventions::model_file(self.config, &route.grouping);
        if model.is_file() {
            closure.push(Category::Models, &model);
            queue.push_back((model, 2));
        }
        let helper = conventions::helper_file(self.config, &route.grouping);
        if helper.is_file() {
            closure.push(Category::Helpers, &helper);
            queue.push_back((helper, 2));
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        while let Some((file, depth)) = queue.pop_front() {
            if depth > effective_max || !visited.insert(file.clone()) {
                continue;
            }
            let Some(report) = scanner::scan_file(&file) else {
                debug!(file = %file.display(), "omitting unreadable file from scan");
                continue;
            };
            self.merge_report(&report, route, depth, &mut closure, &mut queue);
        }

        closure.finish();
        closure
    }

    /// Fold one file's scan report into the closure, enqueueing discovered
    /// files one level deeper.
    fn merge_report(
        &self,
        report: &ScanReport,
        route: &RouteDescriptor,
        depth: usize,
        closure: &mut DependencyClosure,
        queue: &mut VecDeque<(PathBuf, usize)>,
    ) {
        for name in &report.models {
            let path = conventions::model_file_for_constant(self.config, name);
            if path.is_file() {
                closure.push(Category::Models, &path);
                queue.push_back((path, depth + 1));
            }
        }
        for mixin in &report.mixins {
            for path in conventions::concern_files(self.config, mixin) {
                if path.is_file() {
                    closure.push(Category::Concerns, &path);
                    queue.push_back((path, depth + 1));
                }
            }
        }
        for reference in &report.partials {
            for path in conventions::partial_files(self.config, &route.grouping, reference) {
                closure.push(Category::Views, &path);
                queue.push_back((path, depth + 1));
            }
        }
        for helper in &report.helpers {
            let path = conventions::helper_file_for_constant(self.config, helper);
            if path.is_file() {
                closure.push(Category::Helpers, &path);
                queue.push_back((path, depth + 1));
            }
        }
        for package in &report.packages {
            closure.push_package(package);
        }
        // Bare imports name package candidates; relative and nested paths
        // point inside the application and are already covered by the
        // convention lookups.
        for import in &report.imports {
            if !import.contains('/') && !import.starts_with('.') {
                closure.push_package(import);
            }
        }
    }
}
