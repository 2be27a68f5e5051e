//! Bundle and manifest errors

use super::RoutepackError;

/// Creates a bundle not found error
pub fn not_found(name: impl Into<String>) -> RoutepackError {
    RoutepackError::BundleNotFound { name: name.into() }
}

/// Creates a bundle directory collision error
pub fn exists(path: impl Into<String>) -> RoutepackError {
    RoutepackError::BundleExists { path: path.into() }
}

/// Creates an invalid manifest error
pub fn manifest_invalid(path: impl Into<String>, reason: impl Into<String>) -> RoutepackError {
    RoutepackError::ManifestInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
