//! Lowering of the raw document into the validated tree model.

use std::collections::HashMap;

use miette::NamedSource;
use prefgen_core::{KeyError, PATH_SEPARATOR, derive_key};

use crate::{
    Choice, ConfigNode, Error, GeneratorTables, NodeKind, Result, SchemaDocument, SettingsTree,
    Signedness,
    raw::{RawDocument, RawKind, RawNode},
    span::find_label_span,
};

/// Source information carried through lowering for error reporting.
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    fn validation_error(&self, message: impl Into<String>, label: &str, nth: usize) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_label_span(self.src, label, nth),
            message: message.into(),
        })
    }
}

pub(crate) fn lower(raw: RawDocument, ctx: &ParseContext<'_>) -> Result<SchemaDocument> {
    let mut lowering = Lowering {
        ctx,
        occurrences: HashMap::new(),
    };
    let roots = lowering.lower_siblings(raw.nodes, None)?;

    let mut tables = match raw.generator.categories {
        Some(categories) => GeneratorTables::with_categories(categories),
        None => GeneratorTables::default(),
    };
    for path in raw.generator.skip {
        tables = tables.skip(path);
    }
    for (path, case) in raw.generator.special {
        tables = tables.special(path, case);
    }

    Ok(SchemaDocument {
        tree: SettingsTree::new(roots),
        tables,
        style: raw.style,
        output: raw.output,
    })
}

struct Lowering<'c, 'a> {
    ctx: &'c ParseContext<'a>,
    /// How many nodes with a given label have been lowered so far, used to
    /// point errors at the right declaration.
    occurrences: HashMap<String, usize>,
}

impl Lowering<'_, '_> {
    fn lower_siblings(&mut self, nodes: Vec<RawNode>, parent: Option<&str>) -> Result<Vec<ConfigNode>> {
        let mut lowered: Vec<ConfigNode> = Vec::with_capacity(nodes.len());
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for raw in nodes {
            let nth = self.next_occurrence(&raw.name);
            if let Some(first_nth) = first_seen.get(&raw.name) {
                return Err(Box::new(Error::DuplicateName {
                    src: self.ctx.named_source(),
                    first_span: find_label_span(self.ctx.src, &raw.name, *first_nth),
                    second_span: find_label_span(self.ctx.src, &raw.name, nth),
                    parent: parent.map_or_else(|| "the document root".to_string(), |p| format!("'{}'", p)),
                    name: raw.name,
                }));
            }
            first_seen.insert(raw.name.clone(), nth);

            let path = match parent {
                Some(parent) => format!("{}{}{}", parent, PATH_SEPARATOR, raw.name),
                None => raw.name.clone(),
            };
            lowered.push(self.lower_node(raw, &path, nth)?);
        }

        Ok(lowered)
    }

    fn next_occurrence(&mut self, name: &str) -> usize {
        let count = self.occurrences.entry(name.to_string()).or_insert(0);
        let nth = *count;
        *count += 1;
        nth
    }

    fn lower_node(&mut self, raw: RawNode, path: &str, nth: usize) -> Result<ConfigNode> {
        let ctx = self.ctx;
        let name = raw.name.as_str();

        if name.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("setting name in '{}' cannot be empty", parent_of(path)),
                name,
                nth,
            ));
        }
        if name.contains(PATH_SEPARATOR) {
            return Err(ctx.validation_error(
                format!("setting name '{}' cannot contain '{}'", name, PATH_SEPARATOR),
                name,
                nth,
            ));
        }
        if let Err(KeyError::Empty { label }) = derive_key(name) {
            return Err(Box::new(Error::EmptyKey {
                src: ctx.named_source(),
                span: find_label_span(ctx.src, name, nth),
                label,
            }));
        }

        let reject = |field: &str| {
            ctx.validation_error(
                format!("'{}' is not allowed on {} setting '{}'", field, raw.kind.as_str(), path),
                name,
                nth,
            )
        };

        if raw.kind != RawKind::Composite && raw.children.is_some() {
            return Err(reject("children"));
        }
        if raw.kind != RawKind::Enumerated && (raw.choices.is_some() || raw.values.is_some()) {
            return Err(reject(if raw.choices.is_some() { "choices" } else { "values" }));
        }
        let is_integer = matches!(raw.kind, RawKind::SignedInteger | RawKind::UnsignedInteger);
        if !is_integer && (raw.min.is_some() || raw.max.is_some()) {
            return Err(reject(if raw.min.is_some() { "min" } else { "max" }));
        }

        let kind = match raw.kind {
            RawKind::Boolean => NodeKind::Boolean,
            RawKind::SignedInteger | RawKind::UnsignedInteger => {
                let signedness = if raw.kind == RawKind::SignedInteger {
                    Signedness::Signed
                } else {
                    Signedness::Unsigned
                };
                let min = raw.min.unwrap_or(0);
                let max = raw.max.unwrap_or(-1);
                if signedness == Signedness::Unsigned && min < 0 {
                    return Err(ctx.validation_error(
                        format!("unsigned setting '{}' has negative min {}", path, min),
                        name,
                        nth,
                    ));
                }
                if max != -1 && min > max {
                    return Err(ctx.validation_error(
                        format!("setting '{}' has min {} greater than max {}", path, min, max),
                        name,
                        nth,
                    ));
                }
                return Ok(ConfigNode::integer(raw.name, signedness, min, max));
            }
            RawKind::Enumerated => {
                let labels = raw.choices.unwrap_or_default();
                if labels.is_empty() {
                    return Err(ctx.validation_error(
                        format!("enumerated setting '{}' needs at least one choice", path),
                        name,
                        nth,
                    ));
                }
                let choices = match raw.values {
                    Some(values) if values.len() != labels.len() => {
                        return Err(ctx.validation_error(
                            format!(
                                "setting '{}' has {} choices but {} values",
                                path,
                                labels.len(),
                                values.len()
                            ),
                            name,
                            nth,
                        ));
                    }
                    Some(values) => labels
                        .into_iter()
                        .zip(values)
                        .map(|(label, value)| Choice::with_value(label, value))
                        .collect(),
                    None => labels.into_iter().map(Choice::new).collect(),
                };
                NodeKind::Enumerated { choices }
            }
            RawKind::Composite => {
                let children = self.lower_siblings(raw.children.unwrap_or_default(), Some(path))?;
                NodeKind::Composite { children }
            }
        };

        Ok(ConfigNode::new(raw.name, kind))
    }
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once(PATH_SEPARATOR)
        .map_or("the document root", |(parent, _)| parent)
}
