//! Show command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::ShowArgs;
use crate::common::format::format_size;
use crate::error::{Result, bundle as bundle_error};
use crate::extractor::ExtractionManifest;
use crate::store::Validation;

/// Run show command
pub fn run(app_root: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let mut config = helpers::load_config(app_root)?;
    helpers::apply_base_path(&mut config, args.base_path);
    let store = helpers::store_for(&config);

    let bundle = store
        .find(&args.bundle)?
        .ok_or_else(|| bundle_error::not_found(&args.bundle))?;

    println!("{}", Style::new().bold().yellow().apply_to(&bundle.name));
    println!("  Path: {}", bundle.path.display());
    println!("  Size: {}", format_size(bundle.size_bytes));
    if let Some(created) = bundle.created_at {
        println!("  Created: {created}");
    }

    if bundle.compressed {
        println!("  Compressed archive (manifest not validated)");
        return Ok(());
    }

    match &bundle.validation {
        Validation::Invalid { reason } => {
            println!("  {} {}", Style::new().red().apply_to("Invalid:"), reason);
            return Ok(());
        }
        Validation::Valid {
            checksum_ok: Some(false),
        } => {
            println!("  {}", Style::new().yellow().apply_to("Checksum mismatch"));
        }
        _ => {}
    }

    let manifest = ExtractionManifest::load(&bundle.path)?;
    println!("  Route: {}#{}", manifest.route.grouping, manifest.route.action);
    println!("  Method: {}", manifest.route.http_method);
    println!("  Path pattern: {}", manifest.route.raw_path);
    println!("  Extracted at: {}", manifest.generated_at);
    println!("  Mode: {}", manifest.options.mode);
    println!("  Categories: {}", manifest.options.categories.join(", "));
    println!("  Total: {}", manifest.size.total_formatted);

    if !manifest.size.by_type.is_empty() {
        println!("  File types:");
        for (extension, count) in &manifest.size.by_type {
            println!("    {extension}: {count}");
        }
    }

    println!("  Files ({}):", manifest.files.count);
    for file in &manifest.files.list {
        println!("    {file}");
    }

    Ok(())
}
