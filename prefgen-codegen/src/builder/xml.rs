//! Indented XML writer on top of [`CodeBuilder`].

use quick_xml::escape::{escape, partial_escape};

use super::{CodeBuilder, Indent};

/// Writes one element per line, nesting with the builder's indentation.
///
/// Attribute values and text content are escaped; tag and attribute names
/// are written verbatim.
#[derive(Debug, Clone)]
pub struct XmlBuilder {
    code: CodeBuilder,
}

impl XmlBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            code: CodeBuilder::new(indent),
        }
    }

    /// Write the `<?xml ...?>` declaration.
    pub fn declaration(&mut self) -> &mut Self {
        self.code
            .push_line(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        self
    }

    /// Open an element; children are indented until [`close`](Self::close).
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let mut line = start_tag(tag, attrs);
        line.push('>');
        self.code.push_line(&line).push_indent();
        self
    }

    /// Close the element opened last.
    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.code.push_dedent().push_line(&format!("</{}>", tag));
        self
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let mut line = start_tag(tag, attrs);
        line.push_str(" />");
        self.code.push_line(&line);
        self
    }

    /// Write an element holding only text.
    pub fn text(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        let mut line = start_tag(tag, attrs);
        line.push('>');
        line.push_str(&partial_escape(text));
        line.push_str("</");
        line.push_str(tag);
        line.push('>');
        self.code.push_line(&line);
        self
    }

    /// Get the built document.
    pub fn build(self) -> String {
        self.code.build()
    }
}

fn start_tag(tag: &str, attrs: &[(&str, &str)]) -> String {
    let mut s = format!("<{}", tag);
    for (name, value) in attrs {
        s.push(' ');
        s.push_str(name);
        s.push_str("=\"");
        s.push_str(&escape(*value));
        s.push('"');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let mut xml = XmlBuilder::new(Indent::Spaces(2));
        xml.open("resources", &[])
            .text("string", &[("name", "settings_core")], "Core")
            .close("resources");
        assert_eq!(
            xml.build(),
            "<resources>\n  <string name=\"settings_core\">Core</string>\n</resources>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut xml = XmlBuilder::new(Indent::default());
        xml.empty("CheckBoxPreference", &[("app:key", "Video|\"A&B\"")]);
        assert_eq!(
            xml.build(),
            "<CheckBoxPreference app:key=\"Video|&quot;A&amp;B&quot;\" />\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut xml = XmlBuilder::new(Indent::default());
        xml.text("item", &[], "<Auto> & more");
        assert_eq!(xml.build(), "<item>&lt;Auto&gt; &amp; more</item>\n");
    }

    #[test]
    fn test_declaration() {
        let mut xml = XmlBuilder::new(Indent::default());
        xml.declaration();
        assert_eq!(xml.build(), "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    }
}
