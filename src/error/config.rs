//! Configuration errors

use super::RoutepackError;

/// Creates an invalid extraction mode error
pub fn invalid_mode(mode: impl Into<String>) -> RoutepackError {
    RoutepackError::InvalidMode { mode: mode.into() }
}

/// Creates an invalid duration error
pub fn invalid_duration(input: impl Into<String>) -> RoutepackError {
    RoutepackError::InvalidDuration {
        input: input.into(),
    }
}

/// Creates an application root not found error
pub fn app_root_not_found(path: impl Into<String>) -> RoutepackError {
    RoutepackError::AppRootNotFound { path: path.into() }
}

/// Creates a configuration parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RoutepackError {
    RoutepackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> RoutepackError {
    RoutepackError::ConfigInvalid {
        message: message.into(),
    }
}
