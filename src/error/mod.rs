//! Error types and handling for routepack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`route`]: Route table and resolution errors
//! - [`bundle`]: Bundle and manifest errors
//! - [`package`]: Package registry errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod package;
pub mod route;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for routepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum RoutepackError {
    // Route errors
    #[error("Route '{pattern}' not found")]
    #[diagnostic(
        code(routepack::route::not_found),
        help("Run 'routepack routes' to list resolvable routes")
    )]
    RouteNotFound { pattern: String },

    #[error("Route table not found: {path}")]
    #[diagnostic(
        code(routepack::route::table_not_found),
        help("Export the host route table to config/routes.json, or point routes_file in routepack.yaml at the export")
    )]
    RouteTableNotFound { path: String },

    #[error("Failed to parse route table: {path}")]
    #[diagnostic(code(routepack::route::table_invalid))]
    RouteTableInvalid { path: String, reason: String },

    // Bundle errors
    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(routepack::bundle::not_found),
        help("Run 'routepack list' to see available bundles")
    )]
    BundleNotFound { name: String },

    #[error("Bundle directory already exists: {path}")]
    #[diagnostic(
        code(routepack::bundle::exists),
        help("A bundle for the same route was created within the same second; retry the extraction")
    )]
    BundleExists { path: String },

    #[error("Invalid bundle manifest: {path}")]
    #[diagnostic(code(routepack::bundle::manifest_invalid))]
    ManifestInvalid { path: String, reason: String },

    // Package errors
    #[error("Package '{name}' not installed")]
    #[diagnostic(code(routepack::package::not_found))]
    PackageNotFound { name: String },

    // Configuration errors
    #[error("Invalid extraction mode: {mode}")]
    #[diagnostic(
        code(routepack::config::invalid_mode),
        help("Valid modes: m, v, c, mv, mc, vc, mvc")
    )]
    InvalidMode { mode: String },

    #[error("Invalid duration: {input}")]
    #[diagnostic(
        code(routepack::config::invalid_duration),
        help("Durations are a number followed by a unit: 45m, 12h, 30d, 4w")
    )]
    InvalidDuration { input: String },

    #[error("Application root not found: {path}")]
    #[diagnostic(
        code(routepack::config::app_root_not_found),
        help("Pass --app-root or run routepack from the application root")
    )]
    AppRootNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(routepack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(routepack::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(routepack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(routepack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(routepack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RoutepackError {
    fn from(err: std::io::Error) -> Self {
        RoutepackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RoutepackError {
    fn from(err: serde_yaml::Error) -> Self {
        RoutepackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RoutepackError {
    fn from(err: serde_json::Error) -> Self {
        RoutepackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RoutepackError {
    fn from(err: inquire::InquireError) -> Self {
        RoutepackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = miette::Result<T, RoutepackError>;
