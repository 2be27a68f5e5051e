//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - extract: Extract command arguments
//! - routes: Routes listing arguments
//! - list: Bundle listing arguments
//! - show: Bundle detail arguments
//! - prune: Prune command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod extract;
pub mod list;
pub mod prune;
pub mod routes;
pub mod show;

pub use completions::CompletionsArgs;
pub use extract::ExtractArgs;
pub use list::ListArgs;
pub use prune::PruneArgs;
pub use routes::RoutesArgs;
pub use show::ShowArgs;

/// routepack - route source extraction
///
/// Resolve route endpoints to the source files that implement them and
/// package the result into versioned bundles.
#[derive(Parser, Debug)]
#[command(
    name = "routepack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract route endpoint source closures into versioned bundles",
    long_about = "routepack resolves a route pattern (e.g. users#index) to the closure of \
                  models, views, controllers, helpers, concerns, and third-party packages \
                  that implement it, and copies that closure into a manifested, timestamped \
                  bundle directory for sharing or archival.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  routepack extract users#index            \x1b[90m# Extract one route\x1b[0m\n   \
                  routepack extract users#index --mode mv  \x1b[90m# Models and views only\x1b[0m\n   \
                  routepack extract admin users --compress \x1b[90m# Batch extract, zipped\x1b[0m\n   \
                  routepack routes                         \x1b[90m# List resolvable routes\x1b[0m\n   \
                  routepack list                           \x1b[90m# List produced bundles\x1b[0m\n   \
                  routepack prune --keep-latest 5          \x1b[90m# Retain the 5 newest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Application root (defaults to current directory)
    #[arg(long = "app-root", short = 'C', global = true, env = "ROUTEPACK_APP_ROOT")]
    pub app_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract route source closures into bundles
    Extract(ExtractArgs),

    /// List resolvable routes
    Routes(RoutesArgs),

    /// List produced bundles
    List(ListArgs),

    /// Show one bundle's manifest
    Show(ShowArgs),

    /// Remove bundles by age or retention count
    Prune(PruneArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
