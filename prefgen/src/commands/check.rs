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
pub struct CheckCommand {
    /// Path to the settings schema (defaults to ./settings.toml)
    #[arg(short, long, default_value = "settings.toml")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let doc = SchemaDocument::from_file(&self.schema).unwrap_or_exit();

        let report = ops::check(&doc, &self.schema);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
