//! Package registry errors

use super::RoutepackError;

/// Creates a package not installed error
pub fn not_found(name: impl Into<String>) -> RoutepackError {
    RoutepackError::PackageNotFound { name: name.into() }
}
