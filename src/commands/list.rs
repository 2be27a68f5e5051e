//! List command implementation
//!
//! Lists every bundle in the store newest-first with its validation
//! status, then an aggregate statistics footer.

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::ListArgs;
use crate::common::format::format_size;
use crate::error::Result;
use crate::extractor::bundle_name::TIMESTAMP_FORMAT;
use crate::store::Validation;

/// Run list command
pub fn run(app_root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let mut config = helpers::load_config(app_root)?;
    helpers::apply_base_path(&mut config, args.base_path);
    let store = helpers::store_for(&config);

    let bundles = store.list()?;
    if bundles.is_empty() {
        println!("No bundles in {}.", store.root().display());
        println!("Run 'routepack extract <pattern>' to create one.");
        return Ok(());
    }

    println!("Bundles in {}:", store.root().display());
    for bundle in &bundles {
        let marker = match &bundle.validation {
            Validation::Valid { checksum_ok } => {
                if checksum_ok == &Some(false) {
                    Style::new().yellow().apply_to("~").to_string()
                } else {
                    Style::new().green().apply_to("+").to_string()
                }
            }
            Validation::Invalid { .. } => Style::new().red().apply_to("!").to_string(),
            Validation::NotValidated => Style::new().dim().apply_to("#").to_string(),
        };
        println!(
            "  {} {} ({})",
            marker,
            Style::new().bold().apply_to(&bundle.name),
            format_size(bundle.size_bytes),
        );
        if let Some(route) = &bundle.route {
            let files = bundle
                .file_count
                .map(|c| format!(", {c} files"))
                .unwrap_or_default();
            println!("      {route}{files}");
        }
        match &bundle.validation {
            Validation::Invalid { reason } => {
                println!("      {}", Style::new().red().apply_to(reason));
            }
            Validation::Valid {
                checksum_ok: Some(false),
            } => {
                println!(
                    "      {}",
                    Style::new().yellow().apply_to("checksum mismatch")
                );
            }
            _ => {}
        }
        if bundle.compressed {
            println!("      {}", Style::new().dim().apply_to("compressed archive"));
        }
    }

    let stats = store.statistics()?;
    println!();
    println!("Statistics:");
    println!("  Bundles: {}", stats.count);
    println!("  Size: {}", format_size(stats.total_size_bytes));
    if let Some(oldest) = stats.oldest {
        println!("  Oldest: {}", oldest.format(TIMESTAMP_FORMAT));
    }
    if let Some(newest) = stats.newest {
        println!("  Newest: {}", newest.format(TIMESTAMP_FORMAT));
    }

    Ok(())
}
