use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use prefgen_codegen::KeyManifest;
use prefgen_schema::SchemaDocument;

use super::UnwrapOrExit;

/// Manifest partition to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyKind {
    Bool,
    Int,
    Enum,
    Group,
}

#[derive(Args)]
pub struct KeysCommand {
    /// Path to the settings schema (defaults to ./settings.toml)
    #[arg(short, long, default_value = "settings.toml")]
    pub schema: PathBuf,

    /// Only list keys of this kind
    #[arg(short, long)]
    pub kind: Option<KeyKind>,

    /// Print the manifest as JSON
    #[arg(long, conflicts_with = "kind")]
    pub json: bool,
}

impl KeysCommand {
    pub fn run(&self) -> Result<()> {
        let doc = SchemaDocument::from_file(&self.schema).unwrap_or_exit();
        let (manifest, _) =
            KeyManifest::collect(&doc.tree, &doc.tables).wrap_err("Failed to walk settings")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
            return Ok(());
        }

        for path in select(&manifest, self.kind) {
            println!("{}", path);
        }
        Ok(())
    }
}

/// Paths of one partition, or every leaf then every group.
fn select(manifest: &KeyManifest, kind: Option<KeyKind>) -> Vec<&str> {
    let parts: Vec<&[String]> = match kind {
        Some(KeyKind::Bool) => vec![manifest.booleans.as_slice()],
        Some(KeyKind::Int) => vec![manifest.integers.as_slice()],
        Some(KeyKind::Enum) => vec![manifest.enumerations.as_slice()],
        Some(KeyKind::Group) => vec![manifest.groups.as_slice()],
        None => vec![
            manifest.booleans.as_slice(),
            manifest.integers.as_slice(),
            manifest.enumerations.as_slice(),
            manifest.groups.as_slice(),
        ],
    };
    parts.into_iter().flatten().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> KeyManifest {
        KeyManifest {
            booleans: vec!["Video|VSync".into()],
            integers: vec!["Core|Threads".into()],
            enumerations: vec![],
            groups: vec!["Core".into(), "Video".into()],
        }
    }

    #[test]
    fn test_select_one_kind() {
        assert_eq!(select(&manifest(), Some(KeyKind::Int)), vec!["Core|Threads"]);
        assert!(select(&manifest(), Some(KeyKind::Enum)).is_empty());
    }

    #[test]
    fn test_select_all() {
        assert_eq!(
            select(&manifest(), None),
            vec!["Video|VSync", "Core|Threads", "Core", "Video"]
        );
    }
}
