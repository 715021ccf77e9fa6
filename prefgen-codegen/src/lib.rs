//! Schema walking and artifact generation for prefgen.
//!
//! This crate turns a borrowed [`SettingsTree`](prefgen_schema::SettingsTree)
//! into three documents that must agree with each other: a UI descriptor, a
//! localization document and a key manifest.
//!
//! # Module Organization
//!
//! - [`walk`] - Traversal shared by every emitter (visibility, depth rules, special cases)
//! - [`emit`] - The three emitters and their shared resource naming
//! - [`lints`] - Checks run before generation (key collisions, dangling table entries)
//! - [`builder`] - Indented text and XML writers

pub mod builder;
mod diagnostic;
pub mod emit;
mod error;
mod generator;
pub mod lints;
pub mod walk;

pub use diagnostic::{Diagnostic, Severity};
pub use emit::KeyManifest;
pub use error::GenerateError;
pub use generator::{GeneratedArtifacts, Generator};
pub use walk::{SchemaViolation, ViolationKind, WalkReport};
