//! Data model for the joke API
//!
//! `Joke` mirrors one element of the `/jokes/{category}/ten` response.
//! `Category` is the path parameter picked in the dropdown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single joke as returned by the API
///
/// The live API also sends a `type` field; serde ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: u64,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Human-readable form used for clipboard copy and headless output
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.setup, self.punchline)
    }
}

/// Joke category offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Programming,
    General,
}

impl Category {
    /// All categories in dropdown order
    pub fn all() -> &'static [Category] {
        &[Category::Programming, Category::General]
    }

    /// Value used in the URL path
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Programming => "programming",
            Category::General => "general",
        }
    }

    /// Label shown in the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::General => "General",
        }
    }

    /// Next category (wraps around)
    pub fn next(self) -> Self {
        match self {
            Category::Programming => Category::General,
            Category::General => Category::Programming,
        }
    }

    /// Previous category (wraps around)
    pub fn prev(self) -> Self {
        // Two entries, so prev and next coincide
        self.next()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "programming" => Ok(Category::Programming),
            "general" => Ok(Category::General),
            other => Err(format!(
                "unknown category '{}' (expected 'programming' or 'general')",
                other
            )),
        }
    }
}
