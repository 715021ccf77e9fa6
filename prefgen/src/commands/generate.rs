use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use prefgen_schema::SchemaDocument;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the settings schema (defaults to ./settings.toml)
    #[arg(short, long, default_value = "settings.toml")]
    pub schema: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let doc = SchemaDocument::from_file(&self.schema).unwrap_or_exit();
        tracing::debug!(schema = %self.schema.display(), "loaded schema");

        let report = ops::generate(&doc, &self.output, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
