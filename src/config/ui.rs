//! Terminal UI options

use crate::models::Category;
use serde::Deserialize;

/// UI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Category selected when the page opens
    pub default_category: Category,
    /// Show the latest error message in the status bar
    pub show_errors: bool,
    /// Show the logs panel on startup (toggle with `l`)
    pub show_logs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Programming,
            show_errors: true,
            show_logs: false,
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub default_category: Option<Category>,
    pub show_errors: Option<bool>,
    pub show_logs: Option<bool>,
}

impl UiConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            default_category: file.default_category.unwrap_or(defaults.default_category),
            show_errors: file.show_errors.unwrap_or(defaults.show_errors),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }
}
