//! Bundle directory naming
//!
//! Bundle names embed the route identity and a second-precision creation
//! timestamp: `{grouping}_{action}_{YYYYMMDD}_{HHMMSS}`. The encoded
//! timestamp is what retention policies sort and filter on; file-system
//! metadata is never trusted because copying and archiving alter it.

use chrono::NaiveDateTime;

use crate::common::string_utils::path_safe;

/// Timestamp layout inside a bundle name
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Compose a bundle directory name for a route and creation time
pub fn bundle_dir_name(grouping: &str, action: &str, created_at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}",
        path_safe(grouping),
        path_safe(action),
        created_at.format(TIMESTAMP_FORMAT)
    )
}

/// Recover the creation time encoded in a bundle name
///
/// Non-matching names yield `None` — no creation time available, never an
/// error. Archive names may carry a `.zip` suffix.
pub fn parse_timestamp(name: &str) -> Option<NaiveDateTime> {
    let name = name.strip_suffix(".zip").unwrap_or(name);
    let mut parts = name.rsplitn(3, '_');
    let time = parts.next()?;
    let date = parts.next()?;
    parts.next()?;
    NaiveDateTime::parse_from_str(&format!("{date}_{time}"), TIMESTAMP_FORMAT).ok()
}
