use std::path::{Path, PathBuf};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// A generated artifact ready to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content (without header)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content exactly as it lands on disk, header included
    pub fn render(&self) -> String {
        self.rules.apply(&self.content)
    }

    /// Write the file relative to `base`, replacing whatever is there
    pub fn write_under(&self, base: &Path) -> Result<()> {
        let path = base.join(&self.path);
        let rendered = self.render();
        write_file(&path, &rendered)?;
        tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote file");
        Ok(())
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line prepended to the content, e.g. a "generated, do not edit" comment
    pub header: Option<String>,
}

impl FileRules {
    fn apply(&self, content: &str) -> String {
        match &self.header {
            Some(header) => format!("{}\n{}", header, content),
            None => content.to_string(),
        }
    }
}
