//! Naming-convention file lookup
//!
//! Maps route groupings, actions, and scanned constant names to their
//! expected file locations in the source tree. Lookups return candidate
//! paths; existence filtering is the caller's job.

use std::path::PathBuf;

use crate::common::string_utils::{singularize, underscore};
use crate::config::Config;

/// Expected controller file for a grouping
/// (`admin/users` -> `{controllers}/admin/users_controller.rb`)
pub fn controller_file(config: &Config, grouping: &str) -> PathBuf {
    config
        .controllers_dir()
        .join(format!("{grouping}_controller.rb"))
}

/// Expected model file for a grouping, singularizing the last segment
/// (`admin/users` -> `{models}/user.rb`)
pub fn model_file(config: &Config, grouping: &str) -> PathBuf {
    let resource = grouping.rsplit('/').next().unwrap_or(grouping);
    config
        .models_dir()
        .join(format!("{}.rb", singularize(resource)))
}

/// Expected model file for a scanned constant name
/// (`UserProfile` -> `{models}/user_profile.rb`)
pub fn model_file_for_constant(config: &Config, name: &str) -> PathBuf {
    config.models_dir().join(format!("{}.rb", underscore(name)))
}

/// Expected helper file for a grouping
pub fn helper_file(config: &Config, grouping: &str) -> PathBuf {
    config.helpers_dir().join(format!("{grouping}_helper.rb"))
}

/// Expected helper file for a scanned constant name
/// (`UsersHelper` -> `{helpers}/users_helper.rb`)
pub fn helper_file_for_constant(config: &Config, name: &str) -> PathBuf {
    config
        .helpers_dir()
        .join(format!("{}.rb", underscore(name)))
}

/// Candidate concern files for a scanned mixin name, under both concern
/// roots (`Searchable` -> `concerns/searchable.rb`)
pub fn concern_files(config: &Config, mixin: &str) -> Vec<PathBuf> {
    let file = format!("{}.rb", underscore(mixin));
    vec![
        config.controller_concerns_dir().join(&file),
        config.model_concerns_dir().join(&file),
    ]
}

/// All template files for a route's action
/// (`users`, `index` -> every `{views}/users/index.*`)
pub fn view_files(config: &Config, grouping: &str, action: &str) -> Vec<PathBuf> {
    templates_in(config.views_dir().join(grouping), action)
}

/// All template files for a scanned partial reference
///
/// Qualified references (`shared/header`) resolve under the views root;
/// bare references (`form`) resolve in the route's own view directory.
pub fn partial_files(config: &Config, grouping: &str, reference: &str) -> Vec<PathBuf> {
    let (dir, name) = match reference.rsplit_once('/') {
        Some((prefix, name)) => (config.views_dir().join(prefix), name),
        None => (config.views_dir().join(grouping), reference),
    };
    templates_in(dir, &format!("_{name}"))
}

/// Convention-located test counterparts of a source file
///
/// `app/models/user.rb` maps to `spec/models/user_spec.rb` and
/// `test/models/user_test.rb`; nested paths are mirrored. Only existing
/// files are returned. Template files have no test counterpart.
pub fn test_counterparts(
    config: &Config,
    category: super::closure::Category,
    file: &std::path::Path,
) -> Vec<PathBuf> {
    let Some(rel) = category
        .source_roots(config)
        .iter()
        .find_map(|root| file.strip_prefix(root).ok())
        .map(crate::common::fs::to_forward_slashes)
    else {
        return Vec::new();
    };
    let Some(stem) = rel.strip_suffix(".rb") else {
        return Vec::new();
    };

    let dir = category.dir_name();
    [
        crate::common::fs::from_forward_slashes(
            &config.app_root,
            &format!("spec/{dir}/{stem}_spec.rb"),
        ),
        crate::common::fs::from_forward_slashes(
            &config.app_root,
            &format!("test/{dir}/{stem}_test.rb"),
        ),
    ]
    .into_iter()
    .filter(|p| p.is_file())
    .collect()
}

/// Files in a directory whose name is `{stem}` or starts with `{stem}.`
fn templates_in(dir: PathBuf, stem: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let prefix = format!("{stem}.");
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name == stem || name.starts_with(&prefix)
        })
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}
