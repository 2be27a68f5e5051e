//! Idiom-pattern scanning of source file content
//!
//! A pure, stateless scan over a fixed table of regular expressions that
//! recognize framework idioms: data-access calls, mixin declarations,
//! template-include directives, helper references, and import statements.
//! Third-party packages are detected separately through the signature table
//! in [`signatures`]. This is heuristic text matching, not parsing; false
//! positives and negatives are an accepted tradeoff.

pub mod signatures;

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Category a matched idiom belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    DataAccess,
    Mixin,
    TemplatePartial,
    HelperRef,
    Import,
}

/// The idiom table: one regex per pattern, first capture group is the
/// referenced name. Extending detection means adding a row, not branching.
const IDIOM_PATTERNS: &[(PatternKind, &str)] = &[
    (
        PatternKind::DataAccess,
        r"\b([A-Z][A-Za-z0-9]*)\.(?:find_by|find_each|find|where|create|update|destroy|delete_all|all|new|count|first|last|pluck|order|includes)\b",
    ),
    (
        PatternKind::Mixin,
        r"(?m)^\s*(?:include|extend)\s+([A-Z][A-Za-z0-9:]*)",
    ),
    (
        PatternKind::TemplatePartial,
        r#"\brender[\s(]+(?:partial:\s*)?["']([A-Za-z0-9_/]+)["']"#,
    ),
    (PatternKind::HelperRef, r"\b([A-Z][A-Za-z0-9]*Helper)\b"),
    (
        PatternKind::Import,
        r#"(?m)^\s*(?:require_relative|require|import)\s+["']([^"']+)["']"#,
    ),
];

/// Constants that match the data-access shape but never name an
/// application model.
const NON_MODEL_CONSTANTS: &[&str] = &[
    "Array", "Date", "DateTime", "Dir", "File", "Float", "Hash", "Integer", "JSON", "Kernel",
    "Logger", "Marshal", "Pathname", "Proc", "Rails", "Regexp", "String", "Struct", "Thread",
    "Time", "YAML",
];

static COMPILED_IDIOMS: LazyLock<Vec<(PatternKind, Regex)>> = LazyLock::new(|| {
    IDIOM_PATTERNS
        .iter()
        .filter_map(|(kind, pattern)| Regex::new(pattern).ok().map(|re| (*kind, re)))
        .collect()
});

/// Categorized references found in one file's content
///
/// Each list is deduplicated within the scan, preserving first-seen order.
/// Cross-file deduplication is the resolver's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Data-model constant names, e.g. `User`
    pub models: Vec<String>,
    /// Mixin/concern constant names, e.g. `Searchable`
    pub mixins: Vec<String>,
    /// Template partial references, e.g. `users/form` or `form`
    pub partials: Vec<String>,
    /// Helper module names, e.g. `UsersHelper`
    pub helpers: Vec<String>,
    /// Detected third-party package names
    pub packages: Vec<String>,
    /// Free-form import paths
    pub imports: Vec<String>,
}

impl ScanReport {
    /// True when the scan found nothing in any category
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
            && self.mixins.is_empty()
            && self.partials.is_empty()
            && self.helpers.is_empty()
            && self.packages.is_empty()
            && self.imports.is_empty()
    }
}

/// Scan file content for framework idioms
pub fn scan(content: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for (kind, regex) in COMPILED_IDIOMS.iter() {
        let bucket = match kind {
            PatternKind::DataAccess => &mut report.models,
            PatternKind::Mixin => &mut report.mixins,
            PatternKind::TemplatePartial => &mut report.partials,
            PatternKind::HelperRef => &mut report.helpers,
            PatternKind::Import => &mut report.imports,
        };
        for captures in regex.captures_iter(content) {
            if let Some(name) = captures.get(1) {
                let name = name.as_str();
                if *kind == PatternKind::DataAccess && NON_MODEL_CONSTANTS.contains(&name) {
                    continue;
                }
                bucket.push(name.to_string());
            }
        }
    }

    report.packages = signatures::detect_packages(content);

    // Per-scan dedup, first occurrence wins
    for bucket in [
        &mut report.models,
        &mut report.mixins,
        &mut report.partials,
        &mut report.helpers,
        &mut report.imports,
    ] {
        let mut seen = HashSet::new();
        bucket.retain(|item| seen.insert(item.clone()));
    }

    report
}

/// Scan a file on disk; unreadable files yield `None` rather than an error
pub fn scan_file(path: &Path) -> Option<ScanReport> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(scan(&content)),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unscannable file");
            None
        }
    }
}
