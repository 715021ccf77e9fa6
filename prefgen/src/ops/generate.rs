//! Generate operation - render and write the three artifacts.

use std::path::Path;

use eyre::{Context, Result};
use prefgen_codegen::{GenerateError, GeneratedArtifacts, Generator};
use prefgen_schema::SchemaDocument;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, Stats};

/// Execute the generate operation.
///
/// Lint errors abort before anything is written. With `dry_run` the files
/// are returned for preview instead.
pub fn generate(doc: &SchemaDocument, output_dir: &Path, dry_run: bool) -> Result<GenerateReport> {
    let artifacts = Generator::new(&doc.tree, &doc.tables)
        .with_style(doc.style.clone())
        .generate()
        .map_err(into_report)?;

    let files = artifacts.files(&doc.output);
    let result = if dry_run {
        GenerationResult::Preview {
            files: files
                .iter()
                .map(|f| PreviewFile {
                    path: f.path().display().to_string(),
                    content: f.render(),
                })
                .collect(),
        }
    } else {
        let mut written = Vec::new();
        for file in &files {
            file.write_under(output_dir)
                .wrap_err_with(|| format!("failed to write {}", file.path().display()))?;
            written.push(file.path().to_path_buf());
        }
        GenerationResult::Written {
            output_dir: output_dir.to_path_buf(),
            files: written,
        }
    };

    Ok(GenerateReport {
        warnings: artifacts
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .map(ToString::to_string)
            .collect(),
        violations: artifacts.violations.iter().map(ToString::to_string).collect(),
        stats: stats(&artifacts),
        result,
    })
}

fn stats(artifacts: &GeneratedArtifacts) -> Stats {
    let manifest = &artifacts.manifest;
    Stats {
        booleans: manifest.booleans.len(),
        integers: manifest.integers.len(),
        enumerations: manifest.enumerations.len(),
        groups: manifest.groups.len(),
    }
}

/// Lint errors are listed one per line under the summary.
fn into_report(err: GenerateError) -> eyre::Report {
    match &err {
        GenerateError::Validation { errors } => {
            let details: Vec<String> = errors.iter().map(|d| format!("  {}", d)).collect();
            eyre::eyre!("{}\n{}", err, details.join("\n"))
        }
        GenerateError::DerivationPrecondition { .. } => eyre::Report::new(err),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const SCHEMA: &str = r#"
        [output]
        keys = "gen/Keys.java.inc"

        [[node]]
        name = "Video"
        type = "composite"

        [[node.children]]
        name = "VSync"
        type = "boolean"
    "#;

    #[test]
    fn test_generate_writes_all_files() {
        let doc: SchemaDocument = SCHEMA.parse().unwrap();
        let temp = TempDir::new().unwrap();

        let report = generate(&doc, temp.path(), false).unwrap();

        let GenerationResult::Written { files, .. } = &report.result else {
            panic!("expected written files");
        };
        assert_eq!(files.len(), 3);
        assert!(temp.path().join("res/xml/settings.xml").exists());
        assert!(temp.path().join("res/values/settings_strings.xml").exists());
        let keys = std::fs::read_to_string(temp.path().join("gen/Keys.java.inc")).unwrap();
        assert!(keys.contains("\"Video|VSync\","));
        assert_eq!(
            report.stats,
            Stats {
                booleans: 1,
                integers: 0,
                enumerations: 0,
                groups: 1
            }
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let doc: SchemaDocument = SCHEMA.parse().unwrap();
        let temp = TempDir::new().unwrap();

        let report = generate(&doc, temp.path(), true).unwrap();

        let GenerationResult::Preview { files } = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 3);
        assert_eq!(files[2].path, "gen/Keys.java.inc");
        assert!(files[2].content.contains("BOOL_KEYS"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_dry_run_preview_matches_written_files() {
        let doc: SchemaDocument = SCHEMA.parse().unwrap();
        let temp = TempDir::new().unwrap();

        let preview = generate(&doc, temp.path(), true).unwrap();
        generate(&doc, temp.path(), false).unwrap();

        let GenerationResult::Preview { files } = &preview.result else {
            panic!("expected a preview");
        };
        assert!(files[2].content.starts_with("// Generated by prefgen. Do not edit.\n"));
        for file in files {
            let on_disk = std::fs::read_to_string(temp.path().join(&file.path)).unwrap();
            assert_eq!(file.content, on_disk, "{}", file.path);
        }
    }

    #[test]
    fn test_lint_errors_abort_generation() {
        let doc: SchemaDocument = r#"
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
        let temp = TempDir::new().unwrap();

        let err = generate(&doc, temp.path(), false).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("1 error(s)"));
        assert!(message.contains("key 'video_vsync' is also derived by 'Video|VSync'"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
