//! Orchestration: lints, the three emitters and the files they become.

use prefgen_core::{File, FileRules};
use prefgen_schema::{GeneratorTables, OutputLayout, ResourceStyle, SettingsTree};

use crate::{
    Diagnostic, GenerateError, KeyManifest, SchemaViolation,
    builder::Indent,
    emit::{render_strings, render_ui},
    lints::{Lint, default_lints},
};

/// Header written at the top of the key manifest file.
const KEYS_HEADER: &str = "// Generated by prefgen. Do not edit.";

/// Generates the UI descriptor, localization document and key manifest for
/// one settings tree.
///
/// The tree and tables are borrowed for the lifetime of the generator and
/// never modified; every artifact is a pure function of them and the style.
pub struct Generator<'a> {
    tree: &'a SettingsTree,
    tables: &'a GeneratorTables,
    style: ResourceStyle,
    lints: Vec<Box<dyn Lint>>,
}

impl<'a> Generator<'a> {
    /// Create a generator with the default style and the built-in lints.
    pub fn new(tree: &'a SettingsTree, tables: &'a GeneratorTables) -> Self {
        Self {
            tree,
            tables,
            style: ResourceStyle::default(),
            lints: default_lints(),
        }
    }

    /// Use a different resource style.
    pub fn with_style(mut self, style: ResourceStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Drop every lint, including the built-in ones.
    pub fn without_lints(mut self) -> Self {
        self.lints.clear();
        self
    }

    /// Names of the lints that will run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run the lints and a dry walk, returning every diagnostic.
    ///
    /// Nothing is rendered. A walk that cannot complete is reported as an
    /// error diagnostic instead of being returned.
    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.lint();

        match KeyManifest::collect(self.tree, self.tables) {
            Ok((_, report)) => {
                diagnostics.extend(report.violations.iter().map(SchemaViolation::to_diagnostic));
            }
            Err(err) => {
                let mut diag = Diagnostic::error("walk", err.to_string());
                if let GenerateError::DerivationPrecondition { path, .. } = &err {
                    diag = diag.at(path.clone());
                }
                diagnostics.push(diag);
            }
        }
        diagnostics
    }

    /// Generate all three artifacts.
    ///
    /// # Errors
    ///
    /// Fails with [`GenerateError::Validation`] if any lint reports an error,
    /// or [`GenerateError::DerivationPrecondition`] if a visible label has no
    /// derivable key. Schema violations never fail generation; they are
    /// logged and returned with the artifacts.
    pub fn generate(&self) -> Result<GeneratedArtifacts, GenerateError> {
        let (errors, diagnostics): (Vec<_>, Vec<_>) = self
            .lint()
            .into_iter()
            .partition(|d| d.severity.is_error());
        if !errors.is_empty() {
            return Err(GenerateError::Validation { errors });
        }

        let ui = render_ui(self.tree, self.tables, &self.style)?;
        let strings = render_strings(self.tree, self.tables, &self.style)?;
        let (manifest, _) = KeyManifest::collect(self.tree, self.tables)?;
        let keys = manifest.render(Indent::from_width(self.style.indent));

        // Every walk sees the same violations; report them once.
        let violations = ui.report.violations;
        for violation in &violations {
            tracing::warn!(path = %violation.path, "{}, skipped", violation.kind);
        }
        tracing::debug!(
            groups = ui.report.groups,
            leaves = ui.report.leaves,
            "generated settings artifacts"
        );

        Ok(GeneratedArtifacts {
            ui: ui.text,
            strings: strings.text,
            keys,
            manifest,
            violations,
            diagnostics,
        })
    }

    fn lint(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(self.tree, self.tables, &mut diagnostics);
        }
        diagnostics
    }
}

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedArtifacts {
    /// The UI descriptor document.
    pub ui: String,
    /// The localization document.
    pub strings: String,
    /// The rendered key manifest.
    pub keys: String,
    pub manifest: KeyManifest,
    /// Nodes dropped for breaking structural rules.
    pub violations: Vec<SchemaViolation>,
    /// Lint warnings and notes; errors abort generation instead.
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedArtifacts {
    /// The artifacts as files placed according to `layout`.
    ///
    /// All files are always overwritten.
    pub fn files(&self, layout: &OutputLayout) -> Vec<File> {
        vec![
            File::new(&layout.ui, self.ui.clone()),
            File::new(&layout.strings, self.strings.clone()),
            File::new(&layout.keys, self.keys.clone()).with_rules(FileRules {
                header: Some(KEYS_HEADER.to_string()),
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use prefgen_schema::{ConfigNode, Signedness, SpecialCase};

    use super::*;

    fn tree() -> SettingsTree {
        SettingsTree::new(vec![ConfigNode::composite(
            "Video",
            vec![
                ConfigNode::integer("Resolution Scale", Signedness::Unsigned, 25, 800),
                ConfigNode::composite(
                    "Debug",
                    vec![
                        ConfigNode::boolean("Wireframe"),
                        ConfigNode::enumerated("Overlay", ["Off", "On"]),
                    ],
                ),
            ],
        )])
    }

    #[test]
    fn test_generate_reports_violations_once() {
        let tree = tree();
        let tables = GeneratorTables::default().special("Video|Debug", SpecialCase::FlatBooleans);

        let artifacts = Generator::new(&tree, &tables).generate().unwrap();

        assert_eq!(artifacts.violations.len(), 1);
        assert_eq!(artifacts.violations[0].path, "Video|Debug|Overlay");
        assert_eq!(artifacts.manifest.booleans, vec!["Video|Debug|Wireframe"]);
        assert!(artifacts.manifest.enumerations.is_empty());
        assert!(!artifacts.strings.contains("video_debug_overlay"));
    }

    #[test]
    fn test_lint_errors_abort_generation() {
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Video",
            vec![ConfigNode::boolean("VSync"), ConfigNode::boolean("V-Sync")],
        )]);
        let tables = GeneratorTables::default();

        let err = Generator::new(&tree, &tables).generate().unwrap_err();
        let GenerateError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "key-collision");

        // Without lints the colliding keys are emitted as-is.
        assert!(Generator::new(&tree, &tables).without_lints().generate().is_ok());
    }

    #[test]
    fn test_non_portable_key_aborts_generation() {
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Core",
            vec![ConfigNode::boolean("Don't Wait"), ConfigNode::boolean("Hook Static Functions")],
        )]);
        let tables = GeneratorTables::default();

        let err = Generator::new(&tree, &tables).generate().unwrap_err();
        let GenerateError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "key-charset");
        assert_eq!(errors[0].location.as_deref(), Some("Core|Don't Wait"));
    }

    #[test]
    fn test_check_includes_walk_violations() {
        let tree = tree();
        let tables = GeneratorTables::default().special("Video|Debug", SpecialCase::FlatBooleans);

        let diagnostics = Generator::new(&tree, &tables).check();
        let walk: Vec<_> = diagnostics.iter().filter(|d| d.source == "walk").collect();
        assert_eq!(walk.len(), 1);
        assert_eq!(walk[0].location.as_deref(), Some("Video|Debug|Overlay"));
        // Six categories are missing from this tree.
        assert_eq!(
            diagnostics.iter().filter(|d| d.source == "missing-category").count(),
            6
        );
    }

    #[test]
    fn test_check_reports_fatal_walk() {
        let tree = SettingsTree::new(vec![ConfigNode::composite(
            "Video",
            vec![ConfigNode::boolean("(unnamed)")],
        )]);
        let tables = GeneratorTables::default();

        let diagnostics = Generator::new(&tree, &tables).check();
        let fatal = diagnostics.iter().find(|d| d.severity.is_error()).unwrap();
        assert_eq!(fatal.location.as_deref(), Some("Video|(unnamed)"));
        assert!(matches!(
            Generator::new(&tree, &tables).generate(),
            Err(GenerateError::DerivationPrecondition { .. })
        ));
    }

    #[test]
    fn test_files_follow_layout() {
        let tree = tree();
        let tables = GeneratorTables::default();
        let artifacts = Generator::new(&tree, &tables).generate().unwrap();

        let files = artifacts.files(&OutputLayout::default());
        let paths: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                std::path::PathBuf::from("res/xml/settings.xml"),
                std::path::PathBuf::from("res/values/settings_strings.xml"),
                std::path::PathBuf::from("SettingsKeys.java.inc"),
            ]
        );
        assert_eq!(files[2].content(), artifacts.keys);
        assert_eq!(
            files[2].render(),
            format!("{}\n{}", KEYS_HEADER, artifacts.keys)
        );
        assert_eq!(files[0].render(), artifacts.ui);
    }

    #[test]
    fn test_written_keys_file_has_header() {
        let tree = tree();
        let tables = GeneratorTables::default();
        let artifacts = Generator::new(&tree, &tables).generate().unwrap();
        let temp = tempfile::TempDir::new().unwrap();

        for file in artifacts.files(&OutputLayout::default()) {
            file.write_under(temp.path()).unwrap();
        }

        let keys = std::fs::read_to_string(temp.path().join("SettingsKeys.java.inc")).unwrap();
        assert!(keys.starts_with("// Generated by prefgen. Do not edit.\nfinal String[] BOOL_KEYS = {"));
        let ui = std::fs::read_to_string(temp.path().join("res/xml/settings.xml")).unwrap();
        assert!(ui.starts_with("<?xml"));
    }
}
