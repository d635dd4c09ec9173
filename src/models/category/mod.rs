//! Event category model.
//!
//! Categories classify events by activity type and supply the fallback
//! block color when an event carries no explicit color override.

use serde::{Deserialize, Serialize};

/// Activity category for a scheduled event.
///
/// Unknown category strings coming from the document store deserialize
/// to [`Category::Other`] rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Exercise,
    Eating,
    Work,
    Relax,
    Family,
    Social,
    #[serde(other)]
    Other,
}

impl Category {
    /// Hex color an event of this category renders with when it has no
    /// explicit color of its own.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Exercise => "#22C55E",
            Category::Eating => "#EAB308",
            Category::Work => "#3B82F6",
            Category::Relax => "#A855F7",
            Category::Family => "#EC4899",
            Category::Social => "#F97316",
            Category::Other => "#6B7280",
        }
    }

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exercise => "exercise",
            Category::Eating => "eating",
            Category::Work => "work",
            Category::Relax => "relax",
            Category::Family => "family",
            Category::Social => "social",
            Category::Other => "other",
        }
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 7] {
        [
            Category::Exercise,
            Category::Eating,
            Category::Work,
            Category::Relax,
            Category::Family,
            Category::Social,
            Category::Other,
        ]
    }
}

impl Default for Category {
    /// Category assigned to events materialized from tasks, which carry
    /// no category of their own.
    fn default() -> Self {
        Category::Work
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a string is a valid hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let color = color.trim();
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    // Accept 3, 6, or 8 character hex codes
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
