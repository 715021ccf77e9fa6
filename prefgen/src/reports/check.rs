//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from linting a schema.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Number of settings that would be generated.
    pub leaf_count: usize,
    /// Number of screens that would be generated.
    pub group_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
            out.preformatted(&format!(
                "  {} setting{} in {} screen{}",
                self.leaf_count,
                if self.leaf_count == 1 { "" } else { "s" },
                self.group_count,
                if self.group_count == 1 { "" } else { "s" },
            ));
        }
    }
}
