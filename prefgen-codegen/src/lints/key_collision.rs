//! Lint for reference keys shared by two visible nodes.

use std::collections::HashMap;

use prefgen_schema::{GeneratorTables, SettingsTree};

use super::{Lint, visible_keys};
use crate::Diagnostic;

/// Lint that errors when two visible nodes derive the same reference key.
///
/// Labels that differ only in case, hyphens or parameter hints collapse to
/// one key, and the second string resource would silently replace the first.
pub struct KeyCollisionLint;

impl Lint for KeyCollisionLint {
    fn name(&self) -> &'static str {
        "key-collision"
    }

    fn description(&self) -> &'static str {
        "Detect visible settings that derive the same reference key"
    }

    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>) {
        let Some(keys) = visible_keys(tree, tables) else {
            return;
        };

        let mut seen: HashMap<String, String> = HashMap::new();
        for (path, key) in keys {
            if let Some(first) = seen.get(&key) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("key '{}' is also derived by '{}'", key, first),
                    )
                    .at(path),
                );
            } else {
                seen.insert(key, path);
            }
        }
    }
}
