use clap::Parser;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Extract one route:\n    routepack extract users#index\n\n\
                   Models and views only:\n    routepack extract users#index --mode mv\n\n\
                   Batch extract every matching route:\n    routepack extract users sessions#create\n\n\
                   Follow model associations two levels deep:\n    routepack extract users#show --follow-associations --max-depth 2\n\n\
                   Compress the result:\n    routepack extract users#index --compress")]
pub struct ExtractArgs {
    /// Route patterns: grouping#action, a declared route name, or a substring
    #[arg(required = true, value_name = "PATTERN", num_args = 1..)]
    pub patterns: Vec<String>,

    /// Which primary categories to copy: m, v, c, mv, mc, vc, mvc
    #[arg(long, default_value = "mvc")]
    pub mode: String,

    /// Skip helper files
    #[arg(long = "no-helpers")]
    pub no_helpers: bool,

    /// Skip concern files
    #[arg(long = "no-concerns")]
    pub no_concerns: bool,

    /// Skip essential files of detected packages
    #[arg(long = "no-packages")]
    pub no_packages: bool,

    /// Copy convention-located test counterparts
    #[arg(long = "include-tests")]
    pub include_tests: bool,

    /// Replace each bundle directory with a .zip archive
    #[arg(long)]
    pub compress: bool,

    /// Scan discovered dependents transitively
    #[arg(long = "follow-associations")]
    pub follow_associations: bool,

    /// Scan depth bound when following associations
    #[arg(long = "max-depth", default_value_t = 1, value_name = "N")]
    pub max_depth: usize,

    /// Bundle store directory (defaults to route_extracts under the app root)
    #[arg(long = "base-path", value_name = "DIR")]
    pub base_path: Option<PathBuf>,
}
