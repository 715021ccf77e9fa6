//! Core utilities and types for the prefgen settings generator.
//!
//! This crate provides the pieces shared by every stage of generation:
//! deriving machine-safe keys from display labels, building `|`-joined
//! setting paths, and writing generated artifacts to disk.

mod file;
mod key;
mod path;

// File operations
pub use file::{File, FileRules};
// Key derivation
pub use key::{KeyError, derive_key, reference_key};
// Setting paths
pub use path::{PATH_SEPARATOR, SettingPath};
