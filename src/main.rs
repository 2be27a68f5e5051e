//! routepack - route source extraction
//!
//! A command line tool that resolves route endpoints in an MVC-convention
//! application to the source files implementing them, and packages those
//! closures into versioned, manifested bundles.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod extractor;
mod packages;
mod progress;
mod resolver;
mod routes;
mod scanner;
mod store;

use cli::{Cli, Commands};
use error::{Result, RoutepackError};

/// Check that the application root the command will operate on exists
fn check_app_root(app_root: Option<PathBuf>) -> Result<()> {
    let root = match app_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(RoutepackError::AppRootNotFound {
            path: root.display().to_string(),
        });
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("routepack=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Version and completions can run anywhere; everything else operates
    // on an application root
    let needs_app_root = matches!(
        cli.command,
        Commands::Extract(_)
            | Commands::Routes(_)
            | Commands::List(_)
            | Commands::Show(_)
            | Commands::Prune(_)
    );

    if needs_app_root {
        if let Err(e) = check_app_root(cli.app_root.clone()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(cli.app_root, args),
        Commands::Routes(args) => commands::routes::run(cli.app_root, args),
        Commands::List(args) => commands::list::run(cli.app_root, args),
        Commands::Show(args) => commands::show::run(cli.app_root, args),
        Commands::Prune(args) => commands::prune::run(cli.app_root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
