//! Extract command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::ExtractArgs;
use crate::common::format::{count_noun, format_size};
use crate::error::Result;
use crate::extractor::{ExtractOptions, ExtractionSummary, Extractor, Mode};

/// Run extract command
pub fn run(app_root: Option<PathBuf>, args: ExtractArgs) -> Result<()> {
    let mut config = helpers::load_config(app_root)?;
    helpers::apply_base_path(&mut config, args.base_path.clone());

    let mode: Mode = args.mode.parse()?;
    let options = ExtractOptions {
        mode,
        include_helpers: !args.no_helpers,
        include_concerns: !args.no_concerns,
        include_packages: !args.no_packages,
        include_tests: args.include_tests,
        compress: args.compress,
        follow_associations: args.follow_associations,
        max_depth: args.max_depth,
    };

    let extractor = Extractor::new(&config)?;

    if let [pattern] = args.patterns.as_slice() {
        let summary = extractor.extract(pattern, &options)?;
        print_summary(&summary);
        return Ok(());
    }

    let outcome = extractor.extract_many(&args.patterns, &options, true);
    println!(
        "{} {} extracted, {} failed",
        Style::new().bold().apply_to("Batch complete:"),
        count_noun(outcome.success_count(), "route"),
        outcome.fail_count(),
    );
    if outcome.success_count() > 0 {
        println!(
            "  {} across {}",
            count_noun(outcome.total_files(), "file"),
            format_size(outcome.total_size_bytes()),
        );
    }
    for summary in &outcome.succeeded {
        println!(
            "  {} {} -> {}",
            Style::new().green().apply_to("+"),
            summary.route.pattern(),
            summary.bundle_path.display(),
        );
    }
    for (pattern, error) in &outcome.failed {
        println!(
            "  {} {}: {}",
            Style::new().red().apply_to("-"),
            pattern,
            error,
        );
    }

    Ok(())
}

fn print_summary(summary: &ExtractionSummary) {
    println!(
        "Extracted {} ({})",
        Style::new().bold().yellow().apply_to(summary.route.pattern()),
        summary.route.http_method,
    );
    println!("  Bundle: {}", summary.bundle_path.display());
    println!(
        "  {} ({})",
        count_noun(summary.file_count, "file"),
        format_size(summary.total_size_bytes),
    );
    if !summary.missing_packages.is_empty() {
        println!(
            "  Detected but not installed: {}",
            summary.missing_packages.join(", ")
        );
    }
}
