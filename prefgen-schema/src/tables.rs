//! Static tables that steer traversal: categories, skips and special cases.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

/// Top-level categories traversed when no explicit set is given.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Core",
    "Video",
    "Audio",
    "Input/Output",
    "System",
    "Savestate",
    "Miscellaneous",
];

/// Structural override for a section or sub-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialCase {
    /// Emit the group as a flat list of boolean toggles; any other child is
    /// a schema violation.
    FlatBooleans,
    /// Emit the group as an empty screen without visiting its children.
    Collapsed,
}

impl SpecialCase {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCase::FlatBooleans => "flat-booleans",
            SpecialCase::Collapsed => "collapsed",
        }
    }
}

/// The closed category set, the skip set and the special-case table.
///
/// All three are keyed by exact names or paths and shared, unchanged, by
/// every traversal of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorTables {
    categories: IndexSet<String>,
    skip: IndexSet<String>,
    special: IndexMap<String, SpecialCase>,
}

impl Default for GeneratorTables {
    fn default() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES.iter().copied())
    }
}

impl GeneratorTables {
    /// Tables with the given categories and no skips or special cases.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            skip: IndexSet::new(),
            special: IndexMap::new(),
        }
    }

    /// Exclude a path (and everything below it) from all artifacts.
    pub fn skip(mut self, path: impl Into<String>) -> Self {
        self.skip.insert(path.into());
        self
    }

    /// Override the structure of the group at `path`.
    pub fn special(mut self, path: impl Into<String>, case: SpecialCase) -> Self {
        self.special.insert(path.into(), case);
        self
    }

    /// Returns true if a root with this name is traversed.
    pub fn is_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    /// Returns true if the path is excluded.
    pub fn is_skipped(&self, path: &str) -> bool {
        self.skip.contains(path)
    }

    /// Special case registered for the path, if any.
    pub fn special_case(&self, path: &str) -> Option<SpecialCase> {
        self.special.get(path).copied()
    }

    /// Categories in declared order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Skipped paths in declared order.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.skip.iter().map(String::as_str)
    }

    /// Special cases in declared order.
    pub fn special_cases(&self) -> impl Iterator<Item = (&str, SpecialCase)> {
        self.special.iter().map(|(path, case)| (path.as_str(), *case))
    }
}
