//! Fully-qualified setting paths.

use std::fmt;

/// Separator between the names that make up a setting path.
pub const PATH_SEPARATOR: char = '|';

/// A `|`-joined chain of node names from a category root down to a node.
///
/// Paths are the join key between every generated artifact, so they are
/// built in exactly one way: by appending child names to a parent path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettingPath(String);

impl SettingPath {
    /// Create the path of a category root.
    pub fn root(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Create the path of a direct child of this path.
    pub fn child(&self, name: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + name.len() + 1);
        path.push_str(&self.0);
        path.push(PATH_SEPARATOR);
        path.push_str(name);
        Self(path)
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the names that make up this path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Number of segments (1 for a category root).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The last segment of the path.
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(PATH_SEPARATOR)
            .map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SettingPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SettingPath> for String {
    fn from(path: SettingPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_joins_with_separator() {
        let path = SettingPath::root("Video").child("Debug").child("Wireframe");
        assert_eq!(path.as_str(), "Video|Debug|Wireframe");
        assert_eq!(path.depth(), 3);
        assert_eq!(path.name(), "Wireframe");
    }

    #[test]
    fn test_root_has_single_segment() {
        let path = SettingPath::root("Input/Output");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["Input/Output"]);
        assert_eq!(path.name(), "Input/Output");
        assert_eq!(path.to_string(), "Input/Output");
    }
}
