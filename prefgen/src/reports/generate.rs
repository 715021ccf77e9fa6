//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Lint warnings and notes.
    pub warnings: Vec<String>,
    /// Settings dropped for breaking structural rules.
    pub violations: Vec<String>,
    pub stats: Stats,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// How many entries each partition of the key manifest holds.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub booleans: usize,
    pub integers: usize,
    pub enumerations: usize,
    pub groups: usize,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written under the output directory.
    Written { output_dir: PathBuf, files: Vec<PathBuf> },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for violation in &self.violations {
            out.warning(&format!("skipped: {}", violation));
        }

        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                self.render_stats(out);
                out.newline();
                out.key_value("Generated", &output_dir.display().to_string());
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            GenerationResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                self.render_stats(out);
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

impl GenerateReport {
    fn render_stats(&self, out: &mut dyn Output) {
        let stats = &self.stats;
        out.section(&format!(
            "Settings ({})",
            stats.booleans + stats.integers + stats.enumerations
        ));
        out.list_item(&format!("{} toggles", stats.booleans));
        out.list_item(&format!("{} sliders", stats.integers));
        out.list_item(&format!("{} lists", stats.enumerations));
        out.list_item(&format!("{} screens", stats.groups));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            warnings: vec![],
            violations: vec!["integer setting in a flat boolean group at 'Video|Debug|Level'".into()],
            stats: Stats {
                booleans: 2,
                integers: 1,
                enumerations: 0,
                groups: 3,
            },
            result: GenerationResult::Written {
                output_dir: PathBuf::from("out"),
                files: vec![PathBuf::from("SettingsKeys.java.inc")],
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stderr,
            vec!["skipped: integer setting in a flat boolean group at 'Video|Debug|Level'"]
        );
        assert_eq!(
            out.stdout,
            vec![
                "Settings (3):",
                "  - 2 toggles",
                "  - 1 sliders",
                "  - 0 lists",
                "  - 3 screens",
                "",
                "Generated: out",
                "  + SettingsKeys.java.inc",
            ]
        );
    }
}
