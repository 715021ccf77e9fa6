//! Lint for categories that the tree does not provide.

use prefgen_schema::{GeneratorTables, SettingsTree};

use super::Lint;
use crate::Diagnostic;

/// Lint that notes categories listed in the tables but absent from the tree.
pub struct MissingCategoryLint;

impl Lint for MissingCategoryLint {
    fn name(&self) -> &'static str {
        "missing-category"
    }

    fn description(&self) -> &'static str {
        "Report categories that have no root in the settings tree"
    }

    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>) {
        for category in tables.categories() {
            if tree.root(category).is_none() {
                diagnostics.push(
                    Diagnostic::info(self.name(), format!("category '{}' has no settings", category))
                        .at(category),
                );
            }
        }
    }
}
