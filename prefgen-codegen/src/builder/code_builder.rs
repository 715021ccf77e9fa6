//! Line-oriented builder for indented text.

use super::Indent;

/// Builder for text with proper indentation.
///
/// ```
/// use prefgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new(Default::default());
/// builder
///     .push_line("final String[] BOOL_KEYS = {")
///     .push_indent()
///     .push_line("\"Video|VSync\",")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(
///     builder.build(),
///     "final String[] BOOL_KEYS = {\n    \"Video|VSync\",\n};\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Current indentation depth.
    pub fn level(&self) -> usize {
        self.indent_level
    }

    /// Get the built text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
