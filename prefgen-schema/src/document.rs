//! The TOML schema document: tree, tables, style and output layout.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, GeneratorTables, Result, SettingsTree, lower, raw::RawDocument};

/// Naming of the elements and resources in generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ResourceStyle {
    /// Prefix of every label resource name (`@string/<prefix><key>`).
    pub title_prefix: String,
    /// Element used for boolean settings.
    pub toggle: String,
    /// Element used for integer settings.
    pub slider: String,
    /// Element used for enumerated settings.
    pub list: String,
    /// Element used for groups and the document root.
    pub screen: String,
    /// Spaces per indentation level; 0 indents with tabs.
    pub indent: u8,
}

impl Default for ResourceStyle {
    fn default() -> Self {
        Self {
            title_prefix: "settings_".into(),
            toggle: "CheckBoxPreference".into(),
            slider: "SeekBarPreference".into(),
            list: "ListPreference".into(),
            screen: "PreferenceScreen".into(),
            indent: 4,
        }
    }
}

/// Where each artifact is written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputLayout {
    pub ui: PathBuf,
    pub strings: PathBuf,
    pub keys: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            ui: PathBuf::from("res/xml/settings.xml"),
            strings: PathBuf::from("res/values/settings_strings.xml"),
            keys: PathBuf::from("SettingsKeys.java.inc"),
        }
    }
}

/// A parsed and validated settings schema file.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    pub tree: SettingsTree,
    pub tables: GeneratorTables,
    pub style: ResourceStyle,
    pub output: OutputLayout,
}

impl FromStr for SchemaDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "settings.toml")
    }
}

impl SchemaDocument {
    /// Parse a schema file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawDocument =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        lower::lower(raw, &lower::ParseContext::new(content, filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_are_omitted() {
        let doc: SchemaDocument = "".parse().unwrap();
        assert!(doc.tree.roots().is_empty());
        assert_eq!(doc.style, ResourceStyle::default());
        assert_eq!(doc.output, OutputLayout::default());
        assert!(doc.tables.is_category("Core"));
    }

    #[test]
    fn test_style_overrides() {
        let doc: SchemaDocument = r#"
            [style]
            title-prefix = "emulator_settings_"
            toggle = "aenu.preference.CheckBoxPreference"
            indent = 2
        "#
        .parse()
        .unwrap();

        assert_eq!(doc.style.title_prefix, "emulator_settings_");
        assert_eq!(doc.style.toggle, "aenu.preference.CheckBoxPreference");
        assert_eq!(doc.style.slider, "SeekBarPreference");
        assert_eq!(doc.style.indent, 2);
    }

    #[test]
    fn test_unknown_style_key_is_rejected() {
        let err = "[style]\ncolour = \"red\"\n"
            .parse::<SchemaDocument>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = SchemaDocument::from_file("/nonexistent/settings.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[[node]]\nname = \"Audio\"\ntype = \"composite\"\n",
        )
        .unwrap();

        let doc = SchemaDocument::from_file(&path).unwrap();
        assert_eq!(doc.tree.roots().len(), 1);
    }
}
