//! Serde representation of the schema document, before validation.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{OutputLayout, ResourceStyle, SpecialCase};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub generator: RawGenerator,
    #[serde(default)]
    pub style: ResourceStyle,
    #[serde(default)]
    pub output: OutputLayout,
    #[serde(default, rename = "node")]
    pub nodes: Vec<RawNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawGenerator {
    /// Falls back to the default category set when omitted.
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub skip: Vec<String>,
    #[serde(default)]
    pub special: IndexMap<String, SpecialCase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RawKind {
    Boolean,
    SignedInteger,
    UnsignedInteger,
    Enumerated,
    Composite,
}

impl RawKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawKind::Boolean => "boolean",
            RawKind::SignedInteger => "signed-integer",
            RawKind::UnsignedInteger => "unsigned-integer",
            RawKind::Enumerated => "enumerated",
            RawKind::Composite => "composite",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RawKind,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub choices: Option<Vec<String>>,
    pub values: Option<Vec<String>>,
    pub children: Option<Vec<RawNode>>,
}
