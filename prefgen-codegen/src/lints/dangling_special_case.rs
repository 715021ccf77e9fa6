//! Lint for special cases that do not name a section or sub-section.

use prefgen_core::PATH_SEPARATOR;
use prefgen_schema::{GeneratorTables, SettingsTree};

use super::Lint;
use crate::Diagnostic;

/// Lint that warns when a special case cannot take effect.
///
/// Special cases only apply to composite nodes one or two levels below a
/// category.
pub struct DanglingSpecialCaseLint;

impl Lint for DanglingSpecialCaseLint {
    fn name(&self) -> &'static str {
        "dangling-special-case"
    }

    fn description(&self) -> &'static str {
        "Detect special cases that do not name a section or sub-section"
    }

    fn check(&self, tree: &SettingsTree, tables: &GeneratorTables, diagnostics: &mut Vec<Diagnostic>) {
        for (path, case) in tables.special_cases() {
            let depth = path.split(PATH_SEPARATOR).count();
            let category = path.split(PATH_SEPARATOR).next().unwrap_or(path);

            let problem = if !(2..=3).contains(&depth) || !tables.is_category(category) {
                "is not a section or sub-section"
            } else {
                match tree.lookup(path) {
                    None => "matches no setting",
                    Some(node) if !node.is_composite() => "names a leaf",
                    Some(_) => continue,
                }
            };

            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("special case '{}' for '{}' {}", case.as_str(), path, problem),
                )
                .at(path),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use prefgen_schema::{ConfigNode, SpecialCase};

    use super::*;

    fn tree() -> SettingsTree {
        SettingsTree::new(vec![ConfigNode::composite(
            "Core",
            vec![
                ConfigNode::composite("Thread Affinity Mask", vec![]),
                ConfigNode::boolean("LLVM Threads"),
            ],
        )])
    }

    #[test]
    fn test_valid_special_case() {
        let tables = GeneratorTables::default().special("Core|Thread Affinity Mask", SpecialCase::Collapsed);

        let mut diagnostics = Vec::new();
        DanglingSpecialCaseLint.check(&tree(), &tables, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_special_cases() {
        let tables = GeneratorTables::default()
            .special("Core", SpecialCase::Collapsed)
            .special("Core|LLVM Threads", SpecialCase::FlatBooleans)
            .special("Core|Missing", SpecialCase::FlatBooleans);

        let mut diagnostics = Vec::new();
        DanglingSpecialCaseLint.check(&tree(), &tables, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "special case 'collapsed' for 'Core' is not a section or sub-section",
                "special case 'flat-booleans' for 'Core|LLVM Threads' names a leaf",
                "special case 'flat-booleans' for 'Core|Missing' matches no setting",
            ]
        );
    }
}
