// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Settings tree model and schema document loading.
//!
//! The tree itself ([`SettingsTree`] of [`ConfigNode`]s) is what generation
//! walks. It can be built programmatically by a host or loaded, together
//! with its [`GeneratorTables`], [`ResourceStyle`] and [`OutputLayout`],
//! from a TOML [`SchemaDocument`].

mod document;
mod error;
mod lower;
mod node;
mod raw;
mod span;
mod tables;
mod tree;

pub use document::{OutputLayout, ResourceStyle, SchemaDocument};
pub use error::{Error, Result};
pub use node::{Choice, ConfigNode, NodeKind, Signedness, ValueType};
pub use tables::{DEFAULT_CATEGORIES, GeneratorTables, SpecialCase};
pub use tree::SettingsTree;
