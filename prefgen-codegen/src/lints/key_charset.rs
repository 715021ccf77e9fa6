//! Lint for reference keys that are not portable resource names.

use prefgen_schema::{GeneratorTables, SettingsTree};

use super::{Lint, visible_keys};
use crate::Diagnostic;

/// Lint that rejects reference keys outside `[a-z][a-z0-9_]*`.
///
/// Such keys become resource names the resource compiler refuses.
pub struct KeyCharsetLint;

impl Lint for KeyCharsetLint {
    fn name(&self) -> &'static str {
        "key-charset"
    }

    fn description(&self) -> &'static str {
        "Check that reference keys are portable resource identifiers"
    }

    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>) {
        let Some(keys) = visible_keys(tree, tables) else {
            return;
        };

        for (path, key) in keys {
            if !is_portable(&key) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("key '{}' is not a portable resource name", key),
                    )
                    .at(path),
                );
            }
        }
    }
}

fn is_portable(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
