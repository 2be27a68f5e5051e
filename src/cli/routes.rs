use clap::Parser;

/// Arguments for the routes command
#[derive(Parser, Debug)]
pub struct RoutesArgs {
    /// Only show routes matching this pattern (case-insensitive substring)
    pub filter: Option<String>,
}
