//! Extraction orchestration
//!
//! Resolves a route, builds its dependency closure, and materializes the
//! closure into a fresh bundle directory: category subdirectories with the
//! copied files, essential files of detected packages, convention-located
//! tests, and the manifest. Any failure while populating rolls the bundle
//! directory back — no partial bundles are left behind. Batch extraction
//! attempts every route independently; each completed bundle is durably on
//! disk (manifest written) before the next begins.

pub mod archive;
pub mod bundle_name;
pub mod manifest;
pub mod options;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, Utc};
use tracing::debug;

use crate::common::format::format_size;
use crate::common::fs::{copy_file, from_forward_slashes, to_forward_slashes};
use crate::config::Config;
use crate::error::{Result, RoutepackError, bundle as bundle_error, route as route_error};
use crate::packages::{DirRegistry, PackageAnalyzer, PackageReport};
use crate::progress::ExtractProgress;
use crate::resolver::{
    Category, DependencyClosure, DependencyResolver, ResolveOptions, conventions,
};
use crate::routes::{RouteDescriptor, RouteResolver, RouteTable};

pub use manifest::{ExtractionManifest, MANIFEST_FILE};
pub use options::{ExtractOptions, Mode};

/// Result of one successful extraction
#[derive(Debug)]
pub struct ExtractionSummary {
    /// The pattern that selected the route
    pub pattern: String,
    pub route: RouteDescriptor,
    /// Bundle directory, or the archive when compression was requested
    pub bundle_path: PathBuf,
    pub file_count: usize,
    pub total_size_bytes: u64,
    /// Detected packages that were not present in the registry
    pub missing_packages: Vec<String>,
}

/// Aggregate result of a batch extraction
///
/// Every route is attempted independently; failures never abort siblings.
/// Aggregate counts and sizes sum over successes only.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: Vec<ExtractionSummary>,
    pub failed: Vec<(String, RoutepackError)>,
}

impl BatchOutcome {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn fail_count(&self) -> usize {
        self.failed.len()
    }

    pub fn total_files(&self) -> usize {
        self.succeeded.iter().map(|s| s.file_count).sum()
    }

    pub fn total_size_bytes(&self) -> u64 {
        self.succeeded.iter().map(|s| s.total_size_bytes).sum()
    }
}

/// Orchestrates route resolution, closure building, and bundle creation
pub struct Extractor<'a> {
    config: &'a Config,
    table: RouteTable,
}

impl<'a> Extractor<'a> {
    /// Load the route table and build an extractor
    pub fn new(config: &'a Config) -> Result<Self> {
        let table = RouteTable::load(&config.routes_file_path())?;
        Ok(Self { config, table })
    }

    /// Extract a single route (first match for the pattern)
    pub fn extract(&self, pattern: &str, options: &ExtractOptions) -> Result<ExtractionSummary> {
        let route = RouteResolver::new(&self.table).resolve(pattern)?;
        self.extract_route_at(&route, pattern, options, Local::now().naive_local())
    }

    /// Extract every route matching any of the given patterns
    pub fn extract_many(
        &self,
        patterns: &[String],
        options: &ExtractOptions,
        show_progress: bool,
    ) -> BatchOutcome {
        let resolver = RouteResolver::new(&self.table);

        // Expand patterns up front so the total is known before work starts
        let mut work: Vec<(String, Option<RouteDescriptor>)> = Vec::new();
        for pattern in patterns {
            let matches = resolver.find_matches(pattern);
            if matches.is_empty() {
                work.push((pattern.clone(), None));
            } else {
                for route in matches {
                    work.push((pattern.clone(), Some(route)));
                }
            }
        }

        let total = work.len();
        let progress = show_progress.then(|| ExtractProgress::new(total as u64));
        let progress = progress.as_ref();
        let mut outcome = BatchOutcome::default();
        for (index, (pattern, maybe_route)) in work.into_iter().enumerate() {
            match maybe_route {
                None => {
                    let err = route_error::not_found(&pattern);
                    outcome.failed.push((pattern, err));
                }
                Some(route) => {
                    if let Some(p) = progress {
                        p.update_route(&route.pattern(), index + 1, total);
                    }
                    let created_at = Local::now().naive_local();
                    match self.extract_route_at(&route, &pattern, options, created_at) {
                        Ok(summary) => outcome.succeeded.push(summary),
                        Err(e) => outcome.failed.push((route.pattern(), e)),
                    }
                }
            }
            if let Some(p) = progress {
                p.inc();
            }
        }
        if let Some(p) = progress {
            p.finish();
        }
        outcome
    }

    /// Extract one resolved route with an explicit creation time
    fn extract_route_at(
        &self,
        route: &RouteDescriptor,
        pattern: &str,
        options: &ExtractOptions,
        created_at: NaiveDateTime,
    ) -> Result<ExtractionSummary> {
        let resolve_options = ResolveOptions {
            follow_associations: options.follow_associations,
            max_depth: options.max_depth,
        };
        let closure =
            DependencyResolver::new(self.config).resolve_closure(route, &resolve_options);

        let store_root = self.config.extract_root();
        std::fs::create_dir_all(&store_root).map_err(|e| RoutepackError::FileWriteFailed {
            path: store_root.display().to_string(),
            reason: e.to_string(),
        })?;

        let name = bundle_name::bundle_dir_name(&route.grouping, &route.action, created_at);
        let bundle_dir = store_root.join(&name);
        if bundle_dir.exists() || bundle_dir.with_extension("zip").exists() {
            return Err(bundle_error::exists(bundle_dir.display().to_string()));
        }
        std::fs::create_dir(&bundle_dir).map_err(|e| RoutepackError::FileWriteFailed {
            path: bundle_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let populated = self.populate(&bundle_dir, route, &closure, options);
        let (file_count, total_size_bytes, missing_packages) = match populated {
            Ok(parts) => parts,
            Err(e) => {
                // No partial bundles are left behind
                let _ = std::fs::remove_dir_all(&bundle_dir);
                return Err(e);
            }
        };

        let bundle_path = if options.compress {
            match archive::compress_bundle(&bundle_dir) {
                Ok(path) => path,
                Err(e) => {
                    let _ = std::fs::remove_dir_all(&bundle_dir);
                    let _ = std::fs::remove_file(bundle_dir.with_extension("zip"));
                    return Err(e);
                }
            }
        } else {
            bundle_dir
        };

        Ok(ExtractionSummary {
            pattern: pattern.to_string(),
            route: route.clone(),
            bundle_path,
            file_count,
            total_size_bytes,
            missing_packages,
        })
    }

    /// Copy everything the options enable and write the manifest
    fn populate(
        &self,
        bundle_dir: &Path,
        route: &RouteDescriptor,
        closure: &DependencyClosure,
        options: &ExtractOptions,
    ) -> Result<(usize, u64, Vec<String>)> {
        let mut relative_paths: Vec<String> = Vec::new();
        let mut total_size: u64 = 0;

        for category in Category::ALL {
            if !options.includes(category) {
                continue;
            }
            for file in closure.files(category) {
                let rel = format!(
                    "{}/{}",
                    category.dir_name(),
                    self.category_relative(category, file)
                );
                total_size += self.copy_into_bundle(bundle_dir, file, &rel)?;
                relative_paths.push(rel);
            }
        }

        if options.include_tests {
            for category in [Category::Models, Category::Controllers] {
                if !options.includes(category) {
                    continue;
                }
                for file in closure.files(category) {
                    for test_file in conventions::test_counterparts(self.config, category, file) {
                        let rel_app = test_file
                            .strip_prefix(&self.config.app_root)
                            .map(to_forward_slashes)
                            .unwrap_or_else(|_| {
                                test_file
                                    .file_name()
                                    .map(|n| n.to_string_lossy().into_owned())
                                    .unwrap_or_default()
                            });
                        let rel = format!("tests/{rel_app}");
                        total_size += self.copy_into_bundle(bundle_dir, &test_file, &rel)?;
                        relative_paths.push(rel);
                    }
                }
            }
        }

        let mut missing_packages = Vec::new();
        if options.include_packages {
            let analyzer = PackageAnalyzer::new(DirRegistry::new(self.config.registry_dir()));
            for name in &closure.packages {
                match analyzer.analyze(name) {
                    PackageReport::Found(metadata) => {
                        for pkg_rel in &metadata.essential_files {
                            let source = from_forward_slashes(&metadata.install_dir, pkg_rel);
                            let rel = format!("packages/{}/{}", metadata.name, pkg_rel);
                            total_size += self.copy_into_bundle(bundle_dir, &source, &rel)?;
                            relative_paths.push(rel);
                        }
                    }
                    PackageReport::Missing { name, reason } => {
                        debug!(package = %name, %reason, "skipping uninstalled package");
                        missing_packages.push(name);
                    }
                }
            }
        }

        relative_paths.sort();
        relative_paths.dedup();

        let checksum = manifest::compute_checksum(bundle_dir, &relative_paths);
        let document = ExtractionManifest {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            route: route.into(),
            options: manifest::ManifestOptions {
                mode: options.mode_label(),
                include_packages: options.include_packages,
                include_tests: options.include_tests,
                categories: options.category_names(),
            },
            files: manifest::ManifestFiles {
                count: relative_paths.len(),
                list: relative_paths.clone(),
            },
            size: manifest::ManifestSize {
                total_formatted: format_size(total_size),
                by_type: manifest::file_type_histogram(&relative_paths),
            },
            checksum: Some(checksum),
        };
        document.write(bundle_dir)?;

        Ok((relative_paths.len(), total_size, missing_packages))
    }

    /// Copy one file to a bundle-relative destination, returning its size
    fn copy_into_bundle(&self, bundle_dir: &Path, source: &Path, rel: &str) -> Result<u64> {
        let target = from_forward_slashes(bundle_dir, rel);
        copy_file(source, &target)?;
        Ok(std::fs::metadata(&target).map(|m| m.len()).unwrap_or(0))
    }

    /// Path of a closure file relative to its category's source root
    fn category_relative(&self, category: Category, file: &Path) -> String {
        for root in category.source_roots(self.config) {
            if let Ok(rel) = file.strip_prefix(&root) {
                return to_forward_slashes(rel);
            }
        }
        file.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn write(temp: &TempDir, rel: &str, content: &str) {
        let path = temp.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn fixture_app() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            "config/routes.json",
            r#"[
                {"path": "/users(.:format)", "verb": "GET", "name": "users",
                 "defaults": {"controller": "users", "action": "index"}},
                {"path": "/users/:id(.:format)", "verb": "GET", "name": "user",
                 "defaults": {"controller": "users", "action": "show"}}
            ]"#,
        );
        write(
            &temp,
            "app/controllers/users_controller.rb",
            "class UsersController\n  def index\n    @users = User.all.page(1)\n  end\nend\n",
        );
        write(&temp, "app/views/users/index.html.erb", "<h1>Users</h1>");
        write(&temp, "app/models/user.rb", "class User\nend\n");
        temp
    }

    fn ts(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(12, 0, second)
            .unwrap()
    }

    #[test]
    fn test_extract_convention_matched_route() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();

        let summary = extractor
            .extract("users#index", &ExtractOptions::default())
            .unwrap();
        assert_eq!(summary.file_count, 3);
        assert!(summary.bundle_path.is_dir());
        assert!(summary.total_size_bytes > 0);

        let loaded = ExtractionManifest::load(&summary.bundle_path).unwrap();
        assert_eq!(loaded.files.count, 3);
        assert_eq!(
            loaded.files.list,
            vec![
                "controllers/users_controller.rb",
                "models/user.rb",
                "views/users/index.html.erb",
            ]
        );
        assert_eq!(loaded.route.grouping, "users");
        // Every listed file exists under the bundle root
        for rel in &loaded.files.list {
            assert!(from_forward_slashes(&summary.bundle_path, rel).is_file());
        }
    }

    #[test]
    fn test_extract_unknown_route() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let err = extractor
            .extract("missing#route", &ExtractOptions::default())
            .unwrap_err();
        assert!(matches!(err, RoutepackError::RouteNotFound { .. }));
    }

    #[test]
    fn test_extract_mode_gates_categories() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let options = ExtractOptions {
            mode: "v".parse().unwrap(),
            ..Default::default()
        };
        let summary = extractor.extract("users#index", &options).unwrap();
        let loaded = ExtractionManifest::load(&summary.bundle_path).unwrap();
        assert_eq!(loaded.files.list, vec!["views/users/index.html.erb"]);
        assert_eq!(loaded.options.mode, "v");
    }

    #[test]
    fn test_extract_records_missing_packages() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        // The controller uses .page() but kaminari is not installed
        let summary = extractor
            .extract("users#index", &ExtractOptions::default())
            .unwrap();
        assert_eq!(summary.missing_packages, vec!["kaminari"]);
    }

    #[test]
    fn test_extract_inlines_installed_package_files() {
        let temp = fixture_app();
        write(
            &temp,
            "vendor/packages/kaminari-1.2.2/lib/kaminari.rb",
            "module Kaminari; end",
        );
        write(&temp, "vendor/packages/kaminari-1.2.2/Rakefile", "task :x");
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();

        let summary = extractor
            .extract("users#index", &ExtractOptions::default())
            .unwrap();
        assert!(summary.missing_packages.is_empty());
        let loaded = ExtractionManifest::load(&summary.bundle_path).unwrap();
        assert!(
            loaded
                .files
                .list
                .contains(&"packages/kaminari/lib/kaminari.rb".to_string())
        );
        // Non-essential files stay out
        assert!(
            !loaded
                .files
                .list
                .iter()
                .any(|f| f.ends_with("Rakefile"))
        );
    }

    #[test]
    fn test_extract_includes_tests_when_asked() {
        let temp = fixture_app();
        write(&temp, "spec/models/user_spec.rb", "describe User do\nend\n");
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let options = ExtractOptions {
            include_tests: true,
            ..Default::default()
        };
        let summary = extractor.extract("users#index", &options).unwrap();
        let loaded = ExtractionManifest::load(&summary.bundle_path).unwrap();
        assert!(
            loaded
                .files
                .list
                .contains(&"tests/spec/models/user_spec.rb".to_string())
        );
    }

    #[test]
    fn test_extract_compress_replaces_directory() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let options = ExtractOptions {
            compress: true,
            ..Default::default()
        };
        let summary = extractor.extract("users#index", &options).unwrap();
        assert_eq!(
            summary.bundle_path.extension().and_then(|e| e.to_str()),
            Some("zip")
        );
        assert!(summary.bundle_path.is_file());
        assert!(!summary.bundle_path.with_extension("").exists());
    }

    #[test]
    fn test_extract_name_collision_is_fatal() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let route = RouteResolver::new(&extractor.table)
            .resolve("users#index")
            .unwrap();

        let first = extractor
            .extract_route_at(&route, "users#index", &ExtractOptions::default(), ts(0))
            .unwrap();
        assert!(first.bundle_path.is_dir());

        let err = extractor
            .extract_route_at(&route, "users#index", &ExtractOptions::default(), ts(0))
            .unwrap_err();
        assert!(matches!(err, RoutepackError::BundleExists { .. }));
        // The colliding call must not have touched the existing bundle
        assert!(first.bundle_path.is_dir());
    }

    #[test]
    fn test_extract_many_continues_past_failures() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        let patterns = vec!["users#index".to_string(), "missing#y".to_string()];
        let outcome = extractor.extract_many(&patterns, &ExtractOptions::default(), false);

        assert_eq!(outcome.success_count(), 1);
        assert_eq!(outcome.fail_count(), 1);
        assert_eq!(outcome.failed[0].0, "missing#y");
        // The successful bundle exists and carries a manifest
        let bundle = &outcome.succeeded[0].bundle_path;
        assert!(bundle.join(MANIFEST_FILE).is_file());
        assert_eq!(outcome.total_files(), outcome.succeeded[0].file_count);
    }

    #[test]
    fn test_extract_many_expands_bare_patterns() {
        let temp = fixture_app();
        let config = Config::load(temp.path()).unwrap();
        let extractor = Extractor::new(&config).unwrap();
        // "Users" is no declared route name, so it matches both users
        // routes by substring; bundle names differ by action so both
        // extract cleanly
        let outcome =
            extractor.extract_many(&["Users".to_string()], &ExtractOptions::default(), false);
        assert_eq!(outcome.success_count(), 2);
        assert_eq!(outcome.fail_count(), 0);
        let actions: Vec<&str> = outcome
            .succeeded
            .iter()
            .map(|s| s.route.action.as_str())
            .collect();
        assert!(actions.contains(&"index"));
        assert!(actions.contains(&"show"));
    }
}
