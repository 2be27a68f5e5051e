use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Bundle name as printed by 'routepack list'
    pub bundle: String,

    /// Bundle store directory (defaults to route_extracts under the app root)
    #[arg(long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,
}
