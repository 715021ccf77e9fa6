//! Lints run over a settings tree before anything is generated.

mod dangling_skip;
mod dangling_special_case;
mod key_charset;
mod key_collision;
mod missing_category;

pub use dangling_skip::DanglingSkipLint;
pub use dangling_special_case::DanglingSpecialCaseLint;
pub use key_charset::KeyCharsetLint;
pub use key_collision::KeyCollisionLint;
pub use missing_category::MissingCategoryLint;
use prefgen_schema::{GeneratorTables, SettingsTree};

use crate::{
    Diagnostic,
    walk::{Visit, Visitor, walk},
};

/// A lint that checks a settings tree and its tables for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the tree and add any diagnostics.
    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>);
}

/// The built-in lints, in the order they run.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(KeyCollisionLint),
        Box::new(DanglingSkipLint),
        Box::new(DanglingSpecialCaseLint),
        Box::new(MissingCategoryLint),
        Box::new(KeyCharsetLint),
    ]
}

/// Path and reference key of every node the walker would emit.
///
/// `None` when the walk itself fails; that error is reported by generation.
fn visible_keys(tree: &SettingsTree, tables: &GeneratorTables) -> Option<Vec<(String, String)>> {
    struct Collect(Vec<(String, String)>);

    impl<'t> Visitor<'t> for Collect {
        fn enter_group(&mut self, visit: &Visit<'t>) {
            self.0.push((visit.path.to_string(), visit.key.clone()));
        }

        fn leaf(&mut self, visit: &Visit<'t>) {
            self.0.push((visit.path.to_string(), visit.key.clone()));
        }
    }

    let mut collect = Collect(Vec::new());
    walk(tree, tables, &mut collect).ok()?;
    Some(collect.0)
}
