//! Localization document: label strings plus entry and value arrays.

use std::borrow::Cow;

use prefgen_schema::{GeneratorTables, ResourceStyle, SettingsTree, ValueType};

use super::{Rendered, entries_array, title_resource, values_array};
use crate::{
    GenerateError,
    builder::{Indent, XmlBuilder},
    walk::{Visit, Visitor, walk},
};

/// Render the localization document.
///
/// Labels and entry arrays come from a first walk; value arrays from a
/// second, independent walk over the same tree, so a UI can show labels
/// while persisting the value tokens.
pub fn render_strings(
    tree: &SettingsTree,
    tables: &GeneratorTables,
    style: &ResourceStyle,
) -> Result<Rendered, GenerateError> {
    let mut xml = XmlBuilder::new(Indent::from_width(style.indent));
    xml.declaration().open("resources", &[]);

    let report = walk(tree, tables, &mut LabelPass { xml: &mut xml, style })?;
    walk(tree, tables, &mut ValuePass { xml: &mut xml })?;

    xml.close("resources");
    Ok(Rendered {
        text: xml.build(),
        report,
    })
}

struct LabelPass<'a> {
    xml: &'a mut XmlBuilder,
    style: &'a ResourceStyle,
}

impl LabelPass<'_> {
    fn label(&mut self, visit: &Visit<'_>) {
        let name = title_resource(self.style, &visit.key);
        let label = resource_text(visit.node.name());
        self.xml.text("string", &[("name", name.as_str())], &label);
    }
}

impl<'t> Visitor<'t> for LabelPass<'_> {
    fn enter_group(&mut self, visit: &Visit<'t>) {
        self.label(visit);
    }

    fn leaf(&mut self, visit: &Visit<'t>) {
        self.label(visit);
        if visit.node.value_type() == Some(ValueType::Enumerated) {
            write_array(self.xml, &entries_array(&visit.key), visit.node.choices());
        }
    }
}

struct ValuePass<'a> {
    xml: &'a mut XmlBuilder,
}

impl<'t> Visitor<'t> for ValuePass<'_> {
    fn leaf(&mut self, visit: &Visit<'t>) {
        if visit.node.value_type() == Some(ValueType::Enumerated) {
            write_array(self.xml, &values_array(&visit.key), visit.node.values());
        }
    }
}

fn write_array<'i>(xml: &mut XmlBuilder, name: &str, items: impl Iterator<Item = &'i str>) {
    xml.open("string-array", &[("name", name)]);
    for item in items {
        xml.text("item", &[], &resource_text(item));
    }
    xml.close("string-array");
}

/// Escape text the resource compiler would otherwise reinterpret.
///
/// Quotes and backslashes are backslash-escaped; a leading `@` or `?` would
/// be read as a resource or attribute reference.
fn resource_text(text: &str) -> Cow<'_, str> {
    let needs_escape = text.starts_with(['@', '?']) || text.contains(['\'', '"', '\\']);
    if !needs_escape {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    if text.starts_with(['@', '?']) {
        out.push('\\');
    }
    for c in text.chars() {
        if matches!(c, '\'' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}
