//! Prune command implementation
//!
//! Safe by default: shows what a policy would remove and asks for
//! confirmation unless `--force` was given.

use std::path::PathBuf;

use console::Style;
use inquire::Confirm;

use super::helpers;
use crate::cli::PruneArgs;
use crate::common::format::{count_noun, format_size};
use crate::error::Result;
use crate::store::{PrunePolicy, parse_duration};

/// Run prune command
pub fn run(app_root: Option<PathBuf>, args: PruneArgs) -> Result<()> {
    let mut config = helpers::load_config(app_root)?;
    helpers::apply_base_path(&mut config, args.base_path);
    let store = helpers::store_for(&config);

    let policy = if let Some(duration) = &args.older_than {
        PrunePolicy::OlderThan(parse_duration(duration)?)
    } else if let Some(keep) = args.keep_latest {
        PrunePolicy::KeepLatest(keep)
    } else {
        PrunePolicy::All
    };

    let candidates = store.plan_prune(&policy)?;
    if candidates.is_empty() {
        println!("Nothing to prune.");
        return Ok(());
    }

    let total_size: u64 = candidates.iter().map(|b| b.size_bytes).sum();
    println!(
        "The following {} ({}) will be removed:",
        count_noun(candidates.len(), "bundle"),
        format_size(total_size),
    );
    for bundle in &candidates {
        println!("  - {}", bundle.name);
    }

    if !args.force {
        let confirmed = Confirm::new("Proceed with prune?")
            .with_default(false)
            .with_help_message("Press 'y' to confirm, Enter to cancel")
            .prompt()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let report = store.execute_prune(&candidates);
    println!(
        "{} {} removed, {} freed",
        Style::new().bold().apply_to("Prune complete:"),
        count_noun(report.removed_count(), "bundle"),
        format_size(report.space_freed),
    );
    for (name, reason) in &report.skipped {
        println!(
            "  {} {}: {}",
            Style::new().yellow().apply_to("skipped"),
            name,
            reason,
        );
    }

    Ok(())
}
