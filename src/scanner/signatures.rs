//! Third-party package signature table
//!
//! Maps a package name to a regex recognizing its characteristic call
//! sites. Unknown packages go undetected; extending coverage means adding
//! a row here. A detected signature says nothing about whether the package
//! is actually installed — that is the registry's verdict.

use std::sync::LazyLock;

use regex::Regex;

/// (package name, signature pattern) pairs
const PACKAGE_SIGNATURES: &[(&str, &str)] = &[
    ("aasm", r"\binclude AASM\b|\baasm\s+do\b"),
    ("cancancan", r"\bload_and_authorize_resource\b|\bauthorize!\s|\bcan\?\s"),
    ("carrierwave", r"\bmount_uploader\b"),
    ("devise", r"\bdevise\s+:|\bauthenticate_user!\b|\bcurrent_user\b|\bdevise_for\b"),
    ("friendly_id", r"\bfriendly_id\b|\bfriendly\.find\b"),
    ("kaminari", r"\.page\(|\.per\(|\bpaginate_array\b"),
    ("paper_trail", r"\bhas_paper_trail\b|\bversions\.last\b"),
    ("paperclip", r"\bhas_attached_file\b"),
    ("pg_search", r"\binclude PgSearch\b|\bpg_search_scope\b"),
    ("pundit", r"\binclude Pundit\b|\bpolicy_scope\b|\bauthorize\s+@"),
    ("ransack", r"\.ransack\(|\bsearch_form_for\b"),
    ("sidekiq", r"\binclude Sidekiq::(?:Worker|Job)\b|\bperform_async\b|\bperform_in\b"),
    ("will_paginate", r"\bwill_paginate\b|\.paginate\("),
];

static COMPILED_SIGNATURES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PACKAGE_SIGNATURES
        .iter()
        .filter_map(|(name, pattern)| Regex::new(pattern).ok().map(|re| (*name, re)))
        .collect()
});

/// Names of packages whose signatures appear in the content, in table order
pub fn detect_packages(content: &str) -> Vec<String> {
    COMPILED_SIGNATURES
        .iter()
        .filter(|(_, regex)| regex.is_match(content))
        .map(|(name, _)| name.to_string())
        .collect()
}
