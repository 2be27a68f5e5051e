use clap::Parser;
use std::path::PathBuf;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Bundle store directory (defaults to route_extracts under the app root)
    #[arg(long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,
}
