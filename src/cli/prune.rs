use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Arguments for the prune command
#[derive(Parser, Debug)]
#[command(group(
    ArgGroup::new("policy")
        .required(true)
        .args(["older_than", "keep_latest", "all"]),
))]
#[command(after_help = "EXAMPLES:\n  \
                   Remove bundles older than 30 days:\n    routepack prune --older-than 30d\n\n\
                   Keep only the 5 newest bundles:\n    routepack prune --keep-latest 5\n\n\
                   Remove everything without prompting:\n    routepack prune --all --force")]
pub struct PruneArgs {
    /// Remove bundles older than a duration (e.g. 45m, 12h, 30d, 4w)
    #[arg(long = "older-than", value_name = "DURATION")]
    pub older_than: Option<String>,

    /// Keep only the N most recent bundles
    #[arg(long = "keep-latest", value_name = "N")]
    pub keep_latest: Option<usize>,

    /// Remove all bundles
    #[arg(long)]
    pub all: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Bundle store directory (defaults to route_extracts under the app root)
    #[arg(long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,
}
