//! Bundle validation against the manifest
//!
//! A bundle is valid iff its manifest parses as well-formed JSON, carries
//! the required top-level keys, and every listed file exists under the
//! bundle root. The optional content checksum is re-checked as a warning
//! only; a mismatch does not invalidate the bundle.

use std::path::Path;

use crate::common::fs::from_forward_slashes;
use crate::extractor::manifest::{self, MANIFEST_FILE, REQUIRED_KEYS};

/// Validation verdict for one bundle
#[derive(Debug, Clone)]
pub enum Validation {
    Valid {
        /// Checksum verification outcome; `None` when the manifest carries
        /// no checksum
        checksum_ok: Option<bool>,
    },
    Invalid {
        reason: String,
    },
    /// Compressed archives are listed but not manifest-validated
    NotValidated,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }

    /// The failure reason, when invalid
    pub fn error(&self) -> Option<&str> {
        match self {
            Validation::Invalid { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Validate one bundle directory
pub fn validate_bundle(bundle_root: &Path) -> Validation {
    let manifest_path = bundle_root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Validation::Invalid {
            reason: format!("{MANIFEST_FILE} missing"),
        };
    }

    let content = match std::fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            return Validation::Invalid {
                reason: format!("unreadable manifest: {e}"),
            };
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            return Validation::Invalid {
                reason: format!("malformed manifest: {e}"),
            };
        }
    };

    let Some(object) = value.as_object() else {
        return Validation::Invalid {
            reason: "manifest is not an object".to_string(),
        };
    };
    for key in REQUIRED_KEYS {
        if !object.contains_key(*key) {
            return Validation::Invalid {
                reason: format!("manifest missing required key '{key}'"),
            };
        }
    }

    let document: manifest::ExtractionManifest = match serde_json::from_value(value) {
        Ok(document) => document,
        Err(e) => {
            return Validation::Invalid {
                reason: format!("manifest schema mismatch: {e}"),
            };
        }
    };

    for rel in &document.files.list {
        if !from_forward_slashes(bundle_root, rel).is_file() {
            return Validation::Invalid {
                reason: format!("listed file missing: {rel}"),
            };
        }
    }

    let checksum_ok = document
        .checksum
        .as_ref()
        .map(|expected| manifest::compute_checksum(bundle_root, &document.files.list) == *expected);

    Validation::Valid { checksum_ok }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::make_bundle;
    use tempfile::TempDir;

    #[test]
    fn test_valid_bundle() {
        let temp = TempDir::new().unwrap();
        make_bundle(
            temp.path(),
            "users_index_20260801_120000",
            &[("models/user.rb", "class User; end")],
        );
        let verdict = validate_bundle(&temp.path().join("users_index_20260801_120000"));
        assert!(verdict.is_valid());
        assert!(matches!(
            verdict,
            Validation::Valid {
                checksum_ok: Some(true)
            }
        ));
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let verdict = validate_bundle(temp.path());
        assert!(!verdict.is_valid());
        assert!(verdict.error().unwrap().contains("manifest.json missing"));
    }

    #[test]
    fn test_malformed_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILE), "{truncated").unwrap();
        let verdict = validate_bundle(temp.path());
        assert!(verdict.error().unwrap().contains("malformed manifest"));
    }

    #[test]
    fn test_missing_required_key() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"version": "0.1.0", "generated_at": "2026-08-01T12:00:00Z", "route": {}}"#,
        )
        .unwrap();
        let verdict = validate_bundle(temp.path());
        assert!(verdict.error().unwrap().contains("required key 'files'"));
    }

    #[test]
    fn test_listed_file_missing() {
        let temp = TempDir::new().unwrap();
        make_bundle(
            temp.path(),
            "users_index_20260801_120000",
            &[("models/user.rb", "class User; end")],
        );
        let bundle = temp.path().join("users_index_20260801_120000");
        std::fs::remove_file(bundle.join("models/user.rb")).unwrap();

        let verdict = validate_bundle(&bundle);
        assert!(!verdict.is_valid());
        assert!(
            verdict
                .error()
                .unwrap()
                .contains("listed file missing: models/user.rb")
        );
    }

    #[test]
    fn test_tampered_file_flags_checksum_warning() {
        let temp = TempDir::new().unwrap();
        make_bundle(
            temp.path(),
            "users_index_20260801_120000",
            &[("models/user.rb", "class User; end")],
        );
        let bundle = temp.path().join("users_index_20260801_120000");
        std::fs::write(bundle.join("models/user.rb"), "tampered").unwrap();

        // Still valid per the validity rule; checksum mismatch is a warning
        let verdict = validate_bundle(&bundle);
        assert!(verdict.is_valid());
        assert!(matches!(
            verdict,
            Validation::Valid {
                checksum_ok: Some(false)
            }
        ));
    }
}
