//! Lint for skip entries that match nothing.

use prefgen_core::PATH_SEPARATOR;
use prefgen_schema::{GeneratorTables, SettingsTree};

use super::Lint;
use crate::Diagnostic;

/// Lint that warns when a skip entry names no node under a category.
///
/// A skip that matches nothing has no effect, which usually means a typo or
/// two entries run together.
pub struct DanglingSkipLint;

impl Lint for DanglingSkipLint {
    fn name(&self) -> &'static str {
        "dangling-skip"
    }

    fn description(&self) -> &'static str {
        "Detect skip entries that do not name a setting"
    }

    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>) {
        for path in tables.skipped() {
            let category = path.split(PATH_SEPARATOR).next().unwrap_or(path);
            let message = if !tables.is_category(category) {
                format!("skip '{}' is outside every category", path)
            } else if tree.lookup(path).is_none() {
                format!("skip '{}' matches no setting", path)
            } else {
                continue;
            };
            diagnostics.push(Diagnostic::warning(self.name(), message).at(path));
        }
    }
}
