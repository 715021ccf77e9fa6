//! Derivation of machine-safe identifiers from human-readable labels.

use thiserror::Error;

/// Error produced when a label cannot be turned into a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Nothing is left of the label once the derivation rules are applied.
    #[error("label '{label}' derives an empty key")]
    Empty { label: String },
}

/// Convert a display label into a machine-safe key.
///
/// The rules, applied in order:
///
/// 1. drop everything from the first `(` onwards (parameter hints),
/// 2. replace space, `/` and `|` with `_`,
/// 3. delete every `-` (so `A-B` becomes `AB`, not `A_B`),
/// 4. strip trailing `_`,
/// 5. lower-case (ASCII).
///
/// ```
/// use prefgen_core::derive_key;
///
/// assert_eq!(derive_key("Write Color Buffers").unwrap(), "write_color_buffers");
/// assert_eq!(derive_key("Anti-Aliasing (MSAA)").unwrap(), "antialiasing");
/// ```
pub fn derive_key(label: &str) -> Result<String, KeyError> {
    let head = label.split_once('(').map_or(label, |(head, _)| head);

    let mut key: String = head
        .chars()
        .filter(|c| *c != '-')
        .map(|c| match c {
            ' ' | '/' | '|' => '_',
            c => c,
        })
        .collect();

    let trimmed = key.trim_end_matches('_').len();
    key.truncate(trimmed);

    if key.is_empty() {
        return Err(KeyError::Empty {
            label: label.to_string(),
        });
    }

    key.make_ascii_lowercase();
    Ok(key)
}

/// Build the symbolic reference key for a node from its path segments.
///
/// Each segment is derived on its own and the results are joined with `_`,
/// so `["Video", "Debug", "Wireframe"]` becomes `video_debug_wireframe`.
pub fn reference_key<'a, I>(segments: I) -> Result<String, KeyError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() {
            out.push('_');
        }
        out.push_str(&derive_key(segment)?);
    }
    Ok(out)
}
