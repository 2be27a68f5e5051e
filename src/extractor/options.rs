//! Extraction options and mode semantics
//!
//! The mode string selects which of the three primary categories are
//! copied; auxiliary categories (helpers, concerns) and the package/test
//! switches are independent flags.

use std::fmt;
use std::str::FromStr;

use crate::error::{RoutepackError, config as config_error};
use crate::resolver::Category;

/// Which of models/views/controllers an extraction copies
///
/// Parsed from one of the seven non-empty subsets spelled as short strings:
/// `m`, `v`, `c`, `mv`, `mc`, `vc`, `mvc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub models: bool,
    pub views: bool,
    pub controllers: bool,
}

impl Mode {
    pub const FULL: Mode = Mode {
        models: true,
        views: true,
        controllers: true,
    };
}

impl FromStr for Mode {
    type Err = RoutepackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = Mode {
            models: false,
            views: false,
            controllers: false,
        };
        for c in s.chars() {
            let flag = match c {
                'm' => &mut mode.models,
                'v' => &mut mode.views,
                'c' => &mut mode.controllers,
                _ => return Err(config_error::invalid_mode(s)),
            };
            if *flag {
                // Repeated letters are not a valid spelling
                return Err(config_error::invalid_mode(s));
            }
            *flag = true;
        }
        if !(mode.models || mode.views || mode.controllers) {
            return Err(config_error::invalid_mode(s));
        }
        Ok(mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.models {
            f.write_str("m")?;
        }
        if self.views {
            f.write_str("v")?;
        }
        if self.controllers {
            f.write_str("c")?;
        }
        Ok(())
    }
}

/// Options for one extraction call
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub mode: Mode,
    pub include_helpers: bool,
    pub include_concerns: bool,
    pub include_packages: bool,
    pub include_tests: bool,
    pub compress: bool,
    pub follow_associations: bool,
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: Mode::FULL,
            include_helpers: true,
            include_concerns: true,
            include_packages: true,
            include_tests: false,
            compress: false,
            follow_associations: false,
            max_depth: 1,
        }
    }
}

impl ExtractOptions {
    /// Whether a closure category is copied under these options
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Models => self.mode.models,
            Category::Views => self.mode.views,
            Category::Controllers => self.mode.controllers,
            Category::Helpers => self.include_helpers,
            Category::Concerns => self.include_concerns,
        }
    }

    /// Mode label recorded in the manifest
    ///
    /// The mvc-subset string when the auxiliary category flags are at their
    /// defaults; `custom` when either deviates. Helpers-only is `custom`,
    /// never `none`.
    pub fn mode_label(&self) -> String {
        if self.include_helpers && self.include_concerns {
            self.mode.to_string()
        } else {
            "custom".to_string()
        }
    }

    /// Names of the enabled categories, for the manifest
    pub fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Category::ALL
            .into_iter()
            .filter(|c| self.includes(*c))
            .map(|c| c.dir_name().to_string())
            .collect();
        if self.include_packages {
            names.push("packages".to_string());
        }
        if self.include_tests {
            names.push("tests".to_string());
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_all_seven_subsets() {
        for (input, expected) in [
            ("m", (true, false, false)),
            ("v", (false, true, false)),
            ("c", (false, false, true)),
            ("mv", (true, true, false)),
            ("mc", (true, false, true)),
            ("vc", (false, true, true)),
            ("mvc", (true, true, true)),
        ] {
            let mode: Mode = input.parse().unwrap();
            assert_eq!((mode.models, mode.views, mode.controllers), expected);
        }
    }

    #[test]
    fn test_mode_rejects_invalid_spellings() {
        for input in ["", "x", "mm", "mvcx", "MVC", "cvm "] {
            let err = input.parse::<Mode>().unwrap_err();
            assert!(matches!(err, RoutepackError::InvalidMode { .. }), "{input}");
        }
    }

    #[test]
    fn test_mode_display_is_canonical() {
        let mode: Mode = "vc".parse().unwrap();
        assert_eq!(mode.to_string(), "vc");
        let mode: Mode = "mvc".parse().unwrap();
        assert_eq!(mode.to_string(), "mvc");
    }

    #[test]
    fn test_mode_full_equals_individual_flags() {
        let parsed: Mode = "mvc".parse().unwrap();
        let built = Mode {
            models: true,
            views: true,
            controllers: true,
        };
        assert_eq!(parsed, built);
        let options = ExtractOptions {
            mode: built,
            ..Default::default()
        };
        for category in [Category::Models, Category::Views, Category::Controllers] {
            assert!(options.includes(category));
        }
    }

    #[test]
    fn test_mode_label_defaults_to_subset_string() {
        let options = ExtractOptions::default();
        assert_eq!(options.mode_label(), "mvc");
    }

    #[test]
    fn test_mode_label_custom_when_auxiliary_flags_deviate() {
        let options = ExtractOptions {
            include_helpers: false,
            ..Default::default()
        };
        assert_eq!(options.mode_label(), "custom");

        // Helpers-only: no primary category, helpers deviating still counts
        // as custom rather than none
        let helpers_only = ExtractOptions {
            mode: "m".parse().unwrap(),
            include_concerns: false,
            ..Default::default()
        };
        assert_eq!(helpers_only.mode_label(), "custom");
    }

    #[test]
    fn test_category_names() {
        let options = ExtractOptions {
            mode: "mv".parse().unwrap(),
            include_tests: true,
            ..Default::default()
        };
        let names = options.category_names();
        assert_eq!(
            names,
            vec!["models", "views", "helpers", "concerns", "packages", "tests"]
        );
    }
}
