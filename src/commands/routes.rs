//! Routes command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::RoutesArgs;
use crate::error::Result;
use crate::routes::{RouteResolver, RouteTable};

/// Run routes command
pub fn run(app_root: Option<PathBuf>, args: RoutesArgs) -> Result<()> {
    let config = helpers::load_config(app_root)?;
    let table = RouteTable::load(&config.routes_file_path())?;
    let resolver = RouteResolver::new(&table);

    let (descriptors, skipped) = match &args.filter {
        Some(filter) => (resolver.find_matches(filter), Vec::new()),
        None => resolver.descriptors(),
    };

    if descriptors.is_empty() {
        match &args.filter {
            Some(filter) => println!("No routes match '{filter}'."),
            None => println!("No resolvable routes."),
        }
        return Ok(());
    }

    let width = descriptors
        .iter()
        .map(|d| d.http_method.len())
        .max()
        .unwrap_or(3);
    for descriptor in &descriptors {
        println!(
            "  {:width$} {}  {}",
            Style::new().cyan().apply_to(&descriptor.http_method),
            Style::new().bold().apply_to(descriptor.pattern()),
            Style::new().dim().apply_to(&descriptor.display_name),
        );
    }
    println!();
    println!("{} route(s)", descriptors.len());
    if !skipped.is_empty() {
        println!(
            "{} entries skipped (framework-internal or incomplete); run with -v for details",
            skipped.len()
        );
    }

    Ok(())
}
