//! Emitters for the three generated artifacts.
//!
//! Every emitter drives its own [`walk`](crate::walk::walk); they share only
//! the resource naming below, so a reference written by one document always
//! resolves in the other.

mod manifest;
mod strings;
mod ui;

use prefgen_schema::ResourceStyle;
pub use manifest::KeyManifest;
pub use strings::render_strings;
pub use ui::render_ui;

use crate::walk::WalkReport;

/// A rendered document and the report of the walk that produced it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub report: WalkReport,
}

/// Name of the label resource of a node (`<prefix><key>`).
pub fn title_resource(style: &ResourceStyle, key: &str) -> String {
    format!("{}{}", style.title_prefix, key)
}

/// Name of the array holding an enumerated node's display labels.
pub fn entries_array(key: &str) -> String {
    format!("{}_entries", key)
}

/// Name of the array holding an enumerated node's value tokens.
pub fn values_array(key: &str) -> String {
    format!("{}_values", key)
}
