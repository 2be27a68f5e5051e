//! Route table and resolution errors

use super::RoutepackError;

/// Creates a route not found error
pub fn not_found(pattern: impl Into<String>) -> RoutepackError {
    RoutepackError::RouteNotFound {
        pattern: pattern.into(),
    }
}

/// Creates a route table not found error
pub fn table_not_found(path: impl Into<String>) -> RoutepackError {
    RoutepackError::RouteTableNotFound { path: path.into() }
}

/// Creates a route table parse error
pub fn table_invalid(path: impl Into<String>, reason: impl Into<String>) -> RoutepackError {
    RoutepackError::RouteTableInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
