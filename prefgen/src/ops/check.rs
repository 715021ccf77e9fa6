//! Check operation - lint a schema without generating anything.

use std::path::Path;

use prefgen_codegen::{Generator, KeyManifest, Severity};
use prefgen_schema::SchemaDocument;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint plus a dry walk and sorts the diagnostics by severity.
pub fn check(doc: &SchemaDocument, schema_path: &Path) -> CheckReport {
    let diagnostics = Generator::new(&doc.tree, &doc.tables).check();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let (leaf_count, group_count) = KeyManifest::collect(&doc.tree, &doc.tables)
        .map(|(manifest, _)| (manifest.leaf_count(), manifest.groups.len()))
        .unwrap_or_default();

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        errors,
        warnings,
        infos,
        leaf_count,
        group_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sorts_by_severity() {
        let doc: SchemaDocument = r#"
            [generator]
            categories = ["Video", "Audio"]
            skip = ["Video|Gone"]

            [[node]]
            name = "Video"
            type = "composite"

            [[node.children]]
            name = "VSync"
            type = "boolean"

            [[node.children]]
            name = "V-Sync"
            type = "boolean"
        "#
        .parse()
        .unwrap();

        let report = check(&doc, Path::new("settings.toml"));

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec!["key 'video_vsync' is also derived by 'Video|VSync'\n  --> Video|V-Sync"]
        );
        assert_eq!(
            report.warnings,
            vec!["skip 'Video|Gone' matches no setting\n  --> Video|Gone"]
        );
        assert_eq!(report.infos, vec!["category 'Audio' has no settings\n  --> Audio"]);
        assert_eq!((report.leaf_count, report.group_count), (2, 1));
    }

    #[test]
    fn test_demo_schema_is_clean() {
        let doc = SchemaDocument::from_str_with_filename(
            include_str!("../../../demos/settings.toml"),
            "demos/settings.toml",
        )
        .unwrap();

        let report = check(&doc, Path::new("demos/settings.toml"));

        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(report.infos.is_empty(), "{:?}", report.infos);
    }
}
