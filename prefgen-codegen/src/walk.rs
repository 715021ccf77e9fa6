//! Traversal of the settings tree shared by every emitter.
//!
//! Each emitter runs its own [`walk`] with its own [`Visitor`]; nothing is
//! carried between walks. Because visibility is decided here and only here,
//! all artifacts agree on which paths exist.

use std::fmt;

use prefgen_core::{SettingPath, reference_key};
use prefgen_schema::{ConfigNode, GeneratorTables, NodeKind, SettingsTree, SpecialCase};
use thiserror::Error;

use crate::{Diagnostic, GenerateError};

/// Structural position of a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// A top-level category root.
    Category,
    /// A group directly under a category.
    Section,
    /// A group directly under a section.
    SubSection,
    /// A settable value.
    Leaf,
}

impl Level {
    /// Level of a group nested under this one, if nesting is allowed.
    fn nested_group(self) -> Option<Level> {
        match self {
            Level::Category => Some(Level::Section),
            Level::Section => Some(Level::SubSection),
            Level::SubSection | Level::Leaf => None,
        }
    }
}

/// A node reached by the walker.
#[derive(Debug, Clone)]
pub struct Visit<'t> {
    /// Fully-qualified path, the join key across artifacts.
    pub path: SettingPath,
    /// Symbolic reference key, the derived keys of every path segment
    /// joined by `_`.
    pub key: String,
    pub node: &'t ConfigNode,
    pub level: Level,
}

/// Callbacks invoked in declared tree order.
pub trait Visitor<'t> {
    /// A category, section or sub-section is entered.
    fn enter_group(&mut self, _visit: &Visit<'t>) {}

    /// A visible leaf.
    fn leaf(&mut self, _visit: &Visit<'t>) {}

    /// The group entered last is left.
    fn exit_group(&mut self, _visit: &Visit<'t>) {}
}

/// What is wrong with a node that was dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A flat-booleans group holds a node of another kind.
    NonBooleanInFlatGroup { found: &'static str },
    /// A group nested below a sub-section.
    TooDeep,
    /// A category root that is not a group.
    CategoryNotComposite,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::NonBooleanInFlatGroup { found } => {
                write!(f, "{} setting in a flat boolean group", found)
            }
            ViolationKind::TooDeep => write!(f, "group nested below a sub-section"),
            ViolationKind::CategoryNotComposite => write!(f, "category is not a group"),
        }
    }
}

/// A node skipped because it breaks the structural rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at '{path}'")]
pub struct SchemaViolation {
    pub path: String,
    pub kind: ViolationKind,
}

impl SchemaViolation {
    /// Convert into a warning diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning("walk", format!("{}, skipped", self.kind)).at(self.path.clone())
    }
}

/// Summary of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub violations: Vec<SchemaViolation>,
    pub groups: usize,
    pub leaves: usize,
}

/// Walk `tree`, calling `visitor` for every visible node.
///
/// Only roots named in the category set are traversed, skipped paths are
/// pruned with their subtrees, and special cases override group structure.
/// Structural problems are recorded in the report and the offending node is
/// skipped; a label without a derivable key aborts the walk.
pub fn walk<'t, V>(
    tree: &'t SettingsTree,
    tables: &GeneratorTables,
    visitor: &mut V,
) -> Result<WalkReport, GenerateError>
where
    V: Visitor<'t>,
{
    let mut walker = Walker {
        tables,
        visitor,
        report: WalkReport::default(),
    };

    for root in tree.roots() {
        if tables.is_category(root.name()) && !tables.is_skipped(root.name()) {
            walker.category(root)?;
        }
    }

    tracing::debug!(
        groups = walker.report.groups,
        leaves = walker.report.leaves,
        violations = walker.report.violations.len(),
        "walk finished"
    );
    Ok(walker.report)
}

struct Walker<'a, V> {
    tables: &'a GeneratorTables,
    visitor: &'a mut V,
    report: WalkReport,
}

impl<'t, V: Visitor<'t>> Walker<'_, V> {
    fn category(&mut self, node: &'t ConfigNode) -> Result<(), GenerateError> {
        let path = SettingPath::root(node.name());
        if !node.is_composite() {
            self.violation(path, ViolationKind::CategoryNotComposite);
            return Ok(());
        }
        let visit = self.visit(path, node, Level::Category)?;
        self.group(visit, None)
    }

    fn child(&mut self, parent: &Visit<'t>, node: &'t ConfigNode) -> Result<(), GenerateError> {
        let path = parent.path.child(node.name());
        if self.tables.is_skipped(path.as_str()) {
            tracing::trace!(path = %path, "skipped");
            return Ok(());
        }

        if !node.is_composite() {
            let visit = self.visit(path, node, Level::Leaf)?;
            self.leaf(&visit);
            return Ok(());
        }

        let Some(level) = parent.level.nested_group() else {
            self.violation(path, ViolationKind::TooDeep);
            return Ok(());
        };
        let special = self.tables.special_case(path.as_str());
        let visit = self.visit(path, node, level)?;
        self.group(visit, special)
    }

    fn flat_child(&mut self, parent: &Visit<'t>, node: &'t ConfigNode) -> Result<(), GenerateError> {
        let path = parent.path.child(node.name());
        if self.tables.is_skipped(path.as_str()) {
            tracing::trace!(path = %path, "skipped");
            return Ok(());
        }

        if !node.is_boolean() {
            let found = kind_name(node.kind());
            self.violation(path, ViolationKind::NonBooleanInFlatGroup { found });
            return Ok(());
        }

        let visit = self.visit(path, node, Level::Leaf)?;
        self.leaf(&visit);
        Ok(())
    }

    fn group(&mut self, visit: Visit<'t>, special: Option<SpecialCase>) -> Result<(), GenerateError> {
        self.report.groups += 1;
        self.visitor.enter_group(&visit);

        match special {
            Some(SpecialCase::Collapsed) => {}
            Some(SpecialCase::FlatBooleans) => {
                for child in visit.node.children() {
                    self.flat_child(&visit, child)?;
                }
            }
            None => {
                for child in visit.node.children() {
                    self.child(&visit, child)?;
                }
            }
        }

        self.visitor.exit_group(&visit);
        Ok(())
    }

    fn leaf(&mut self, visit: &Visit<'t>) {
        self.report.leaves += 1;
        self.visitor.leaf(visit);
    }

    fn visit(
        &self,
        path: SettingPath,
        node: &'t ConfigNode,
        level: Level,
    ) -> Result<Visit<'t>, GenerateError> {
        let key = reference_key(path.segments()).map_err(|_| {
            GenerateError::DerivationPrecondition {
                path: path.to_string(),
                label: node.name().to_string(),
            }
        })?;
        Ok(Visit {
            path,
            key,
            node,
            level,
        })
    }

    fn violation(&mut self, path: SettingPath, kind: ViolationKind) {
        self.report.violations.push(SchemaViolation {
            path: path.into(),
            kind,
        });
    }
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Boolean => "boolean",
        NodeKind::Integer { .. } => "integer",
        NodeKind::Enumerated { .. } => "enumerated",
        NodeKind::Composite { .. } => "composite",
    }
}
