//! String utility functions for naming-convention lookups.
//!
//! Route groupings use plural snake_case directory names while model files
//! use singular names, and scanned source references use CamelCase constants.
//! These helpers convert between the three forms.

/// Convert a CamelCase constant name to snake_case (e.g. `UserProfile` -> `user_profile`).
///
/// Namespace separators (`::`) become path separators so `Admin::User`
/// maps to `admin/user`.
pub fn underscore(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == ':' {
            if !result.ends_with('/') {
                result.push('/');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    result
}

/// Singularize a plural snake_case word using the conventional English rules
/// (e.g. `users` -> `user`, `categories` -> `category`, `boxes` -> `box`).
///
/// Words already singular pass through unchanged when no rule applies.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() && !stem.ends_with('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Pluralize a singular snake_case word (inverse of [`singularize`] for the
/// conventional cases).
pub fn pluralize(word: &str) -> String {
    if word.ends_with('y')
        && !word.ends_with("ay")
        && !word.ends_with("ey")
        && !word.ends_with("oy")
        && !word.ends_with("uy")
    {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if word.ends_with("ch")
        || word.ends_with("sh")
        || word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Sanitize a route grouping for use in a single directory-name component.
///
/// Namespaced groupings contain path separators (`admin/users`) which are
/// not valid inside a bundle directory name.
pub fn path_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ' ' => '-',
            c => c,
        })
        .collect()
}
