//! The settings tree handed to the generator.

use prefgen_core::PATH_SEPARATOR;

use crate::ConfigNode;

/// Ordered root nodes of a settings schema.
///
/// The generator only ever borrows the tree; it is owned by whoever built
/// it (a host configuration subsystem or a [`SchemaDocument`](crate::SchemaDocument)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsTree {
    roots: Vec<ConfigNode>,
}

impl SettingsTree {
    pub fn new(roots: Vec<ConfigNode>) -> Self {
        Self { roots }
    }

    /// Root nodes in declared order.
    pub fn roots(&self) -> &[ConfigNode] {
        &self.roots
    }

    /// Find a root node by name.
    pub fn root(&self, name: &str) -> Option<&ConfigNode> {
        self.roots.iter().find(|r| r.name() == name)
    }

    /// Resolve a `|`-joined path to a node.
    pub fn lookup(&self, path: &str) -> Option<&ConfigNode> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut node = self.root(segments.next()?)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }
}
