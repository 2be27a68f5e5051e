//! Retention policies over the bundle store
//!
//! Three mutually exclusive policies: remove bundles older than a
//! duration, keep only the N most recent, or remove everything. Selection
//! works from name-encoded timestamps; undated bundles are never selected
//! by age and are neither ranked nor removed by retention count — only
//! `All` touches them. Removal failures are logged and skipped, never
//! fatal to the rest of the prune.

use chrono::{Duration, Local};
use tracing::warn;

use super::{BundleInfo, BundleStore};
use crate::error::{Result, config as config_error};

/// Which bundles a prune removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrunePolicy {
    /// Bundles whose encoded timestamp is strictly older than now minus
    /// the duration
    OlderThan(Duration),
    /// Keep the N most recently timestamped bundles, remove the rest
    KeepLatest(usize),
    /// Remove every bundle, dated or not
    All,
}

/// What a prune actually did
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Names of removed bundles
    pub removed: Vec<String>,
    /// Cumulative size of the removed bundles
    pub space_freed: u64,
    /// Bundles that could not be removed, with the reason
    pub skipped: Vec<(String, String)>,
}

impl PruneReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Parse a retention duration: a number followed by `m`, `h`, `d`, or `w`
pub fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();
    let Some(unit) = input.chars().last() else {
        return Err(config_error::invalid_duration(input));
    };
    let amount: i64 = input[..input.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| config_error::invalid_duration(input))?;
    if amount < 0 {
        return Err(config_error::invalid_duration(input));
    }
    match unit {
        'm' => Ok(Duration::minutes(amount)),
        'h' => Ok(Duration::hours(amount)),
        'd' => Ok(Duration::days(amount)),
        'w' => Ok(Duration::weeks(amount)),
        _ => Err(config_error::invalid_duration(input)),
    }
}

impl BundleStore {
    /// Select the bundles a policy would remove, without removing anything
    pub fn plan_prune(&self, policy: &PrunePolicy) -> Result<Vec<BundleInfo>> {
        let bundles = self.list()?;
        let selected = match policy {
            PrunePolicy::All => bundles,
            PrunePolicy::OlderThan(duration) => {
                let cutoff = Local::now().naive_local() - *duration;
                bundles
                    .into_iter()
                    .filter(|b| b.created_at.is_some_and(|t| t < cutoff))
                    .collect()
            }
            PrunePolicy::KeepLatest(keep) => {
                // list() is already newest-first; undated bundles sort last
                // and are excluded from ranking
                bundles
                    .into_iter()
                    .filter(|b| b.created_at.is_some())
                    .skip(*keep)
                    .collect()
            }
        };
        Ok(selected)
    }

    /// Remove the selected bundles, skipping (and reporting) failures
    pub fn execute_prune(&self, candidates: &[BundleInfo]) -> PruneReport {
        let mut report = PruneReport::default();
        for bundle in candidates {
            let result = if bundle.path.is_dir() {
                std::fs::remove_dir_all(&bundle.path)
            } else {
                std::fs::remove_file(&bundle.path)
            };
            match result {
                Ok(()) => {
                    report.removed.push(bundle.name.clone());
                    report.space_freed += bundle.size_bytes;
                }
                Err(e) => {
                    warn!(bundle = %bundle.name, error = %e, "failed to remove bundle");
                    report.skipped.push((bundle.name.clone(), e.to_string()));
                }
            }
        }
        report
    }
}
