//! File system errors

use super::RoutepackError;

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RoutepackError {
    RoutepackError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> RoutepackError {
    RoutepackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> RoutepackError {
    RoutepackError::IoError {
        message: message.into(),
    }
}
