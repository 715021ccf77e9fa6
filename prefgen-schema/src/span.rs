//! Locating labels in the schema source for error reporting.

use miette::SourceSpan;

/// Find the span of the `nth` node label `label` in the TOML source.
///
/// Prefers occurrences written as `name = "<label>"`; falls back to any
/// quoted occurrence (less precise, e.g. a skip entry).
pub(crate) fn find_label_span(src: &str, label: &str, nth: usize) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", label);
    let to_span = |pos: usize| SourceSpan::from((pos + 1, label.len()));

    let declared = src
        .match_indices(&quoted)
        .filter(|(pos, _)| is_name_assignment(&src[..*pos]))
        .nth(nth)
        .map(|(pos, _)| to_span(pos));

    declared.or_else(|| src.find(&quoted).map(to_span))
}

fn is_name_assignment(before: &str) -> bool {
    let line = before.rsplit('\n').next().unwrap_or(before);
    let Some(lhs) = line.trim_end().strip_suffix('=') else {
        return false;
    };
    lhs.trim() == "name"
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"
[generator]
skip = ["Debug"]

[[node]]
name = "Video"
[[node.children]]
name = "Debug"
[[node.children]]
name="Debug"
"#;

    #[test]
    fn test_prefers_name_assignment() {
        let span = find_label_span(SRC, "Debug", 0).unwrap();
        assert_eq!(&SRC[span.offset()..span.offset() + span.len()], "Debug");
        assert!(span.offset() > SRC.find("name = \"Debug\"").unwrap());
    }

    #[test]
    fn test_nth_occurrence() {
        let first = find_label_span(SRC, "Debug", 0).unwrap();
        let second = find_label_span(SRC, "Debug", 1).unwrap();
        assert!(second.offset() > first.offset());
    }

    #[test]
    fn test_falls_back_to_any_quoted_occurrence() {
        let span = find_label_span(SRC, "Debug", 5).unwrap();
        assert_eq!(span.offset(), SRC.find("\"Debug\"").unwrap() + 1);
        assert!(find_label_span(SRC, "Audio", 0).is_none());
    }
}
