//! The categorized dependency closure of a route

use std::path::{Path, PathBuf};

use crate::config::Config;

/// File categories a closure is partitioned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Models,
    Views,
    Controllers,
    Helpers,
    Concerns,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Models,
        Category::Views,
        Category::Controllers,
        Category::Helpers,
        Category::Concerns,
    ];

    /// Subdirectory name inside a bundle
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Models => "models",
            Category::Views => "views",
            Category::Controllers => "controllers",
            Category::Helpers => "helpers",
            Category::Concerns => "concerns",
        }
    }

    /// Source roots files of this category may live under, used to preserve
    /// relative path structure when copying.
    pub fn source_roots(&self, config: &Config) -> Vec<PathBuf> {
        match self {
            Category::Models => vec![config.models_dir()],
            Category::Views => vec![config.views_dir()],
            Category::Controllers => vec![config.controllers_dir()],
            Category::Helpers => vec![config.helpers_dir()],
            Category::Concerns => vec![
                config.controller_concerns_dir(),
                config.model_concerns_dir(),
            ],
        }
    }
}

/// Categorized file lists plus detected package names
///
/// Append-only while a resolution is running; [`finish`](Self::finish)
/// deduplicates and sorts every list. A route with no matching files yields
/// an empty-but-well-formed closure, not an error.
#[derive(Debug, Clone, Default)]
pub struct DependencyClosure {
    pub models: Vec<PathBuf>,
    pub views: Vec<PathBuf>,
    pub controllers: Vec<PathBuf>,
    pub helpers: Vec<PathBuf>,
    pub concerns: Vec<PathBuf>,
    /// Detected third-party package names; detection does not imply the
    /// package is installed
    pub packages: Vec<String>,
}

impl DependencyClosure {
    /// Files of one category
    pub fn files(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::Models => &self.models,
            Category::Views => &self.views,
            Category::Controllers => &self.controllers,
            Category::Helpers => &self.helpers,
            Category::Concerns => &self.concerns,
        }
    }

    fn files_mut(&mut self, category: Category) -> &mut Vec<PathBuf> {
        match category {
            Category::Models => &mut self.models,
            Category::Views => &mut self.views,
            Category::Controllers => &mut self.controllers,
            Category::Helpers => &mut self.helpers,
            Category::Concerns => &mut self.concerns,
        }
    }

    /// Record a file under a category
    pub fn push(&mut self, category: Category, path: impl Into<PathBuf>) {
        self.files_mut(category).push(path.into());
    }

    /// Record a detected package name
    pub fn push_package(&mut self, name: impl Into<String>) {
        self.packages.push(name.into());
    }

    /// Deduplicate and sort every list
    pub fn finish(&mut self) {
        for category in Category::ALL {
            let files = self.files_mut(category);
            files.sort();
            files.dedup();
        }
        self.packages.sort();
        self.packages.dedup();
    }

    /// Total number of files across categories
    pub fn file_count(&self) -> usize {
        Category::ALL.iter().map(|c| self.files(*c).len()).sum()
    }

    /// True when no files and no packages were found
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0 && self.packages.is_empty()
    }

    /// Iterate all (category, file) pairs
    pub fn iter_files(&self) -> impl Iterator<Item = (Category, &Path)> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.files(category)
                .iter()
                .map(move |path| (category, path.as_path()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_dedupes_and_sorts() {
        let mut closure = DependencyClosure::default();
        closure.push(Category::Models, "/app/models/user.rb");
        closure.push(Category::Models, "/app/models/account.rb");
        closure.push(Category::Models, "/app/models/user.rb");
        closure.push_package("kaminari");
        closure.push_package("devise");
        closure.push_package("kaminari");
        closure.finish();

        assert_eq!(
            closure.models,
            vec![
                PathBuf::from("/app/models/account.rb"),
                PathBuf::from("/app/models/user.rb"),
            ]
        );
        assert_eq!(closure.packages, vec!["devise", "kaminari"]);
    }

    #[test]
    fn test_empty_closure_is_well_formed() {
        let mut closure = DependencyClosure::default();
        closure.finish();
        assert!(closure.is_empty());
        assert_eq!(closure.file_count(), 0);
        for category in Category::ALL {
            assert!(closure.files(category).is_empty());
        }
    }

    #[test]
    fn test_file_count_and_iter() {
        let mut closure = DependencyClosure::default();
        closure.push(Category::Models, "/m/user.rb");
        closure.push(Category::Views, "/v/users/index.html.erb");
        closure.push(Category::Controllers, "/c/users_controller.rb");
        assert_eq!(closure.file_count(), 3);
        assert_eq!(closure.iter_files().count(), 3);
    }
}
