//! Key manifest: visible paths partitioned by value type.

use prefgen_schema::{GeneratorTables, SettingsTree, ValueType};
use serde::Serialize;

use crate::{
    GenerateError,
    builder::{CodeBuilder, Indent},
    walk::{Visit, Visitor, WalkReport, walk},
};

/// Paths of every visible node, in traversal order.
///
/// Each leaf path lands in exactly one of the three leaf partitions; group
/// paths only ever appear in `groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyManifest {
    pub booleans: Vec<String>,
    /// Signed and unsigned integers together.
    pub integers: Vec<String>,
    pub enumerations: Vec<String>,
    pub groups: Vec<String>,
}

impl KeyManifest {
    /// Walk the tree and collect the manifest.
    pub fn collect(
        tree: &SettingsTree,
        tables: &GeneratorTables,
    ) -> Result<(Self, WalkReport), GenerateError> {
        let mut manifest = Self::default();
        let report = walk(tree, tables, &mut manifest)?;
        Ok((manifest, report))
    }

    /// Leaf paths of one value type.
    pub fn partition(&self, value_type: ValueType) -> &[String] {
        match value_type {
            ValueType::Boolean => &self.booleans,
            ValueType::Integer => &self.integers,
            ValueType::Enumerated => &self.enumerations,
        }
    }

    /// Number of leaf paths across all partitions.
    pub fn leaf_count(&self) -> usize {
        self.booleans.len() + self.integers.len() + self.enumerations.len()
    }

    /// Render as Java array declarations, one per partition.
    pub fn render(&self, indent: Indent) -> String {
        let mut code = CodeBuilder::new(indent);
        let arrays = [
            ("BOOL_KEYS", &self.booleans),
            ("INT_KEYS", &self.integers),
            ("STRING_ARR_KEYS", &self.enumerations),
            ("NODE_KEYS", &self.groups),
        ];

        for (i, (name, paths)) in arrays.into_iter().enumerate() {
            if i > 0 {
                code.push_blank();
            }
            code.push_line(&format!("final String[] {} = {{", name))
                .push_indent();
            for path in paths {
                code.push_line(&format!("\"{}\",", java_escape(path)));
            }
            code.push_dedent().push_line("};");
        }
        code.build()
    }
}

impl<'t> Visitor<'t> for KeyManifest {
    fn enter_group(&mut self, visit: &Visit<'t>) {
        self.groups.push(visit.path.to_string());
    }

    fn leaf(&mut self, visit: &Visit<'t>) {
        let path = visit.path.to_string();
        match visit.node.value_type() {
            Some(ValueType::Boolean) => self.booleans.push(path),
            Some(ValueType::Integer) => self.integers.push(path),
            Some(ValueType::Enumerated) => self.enumerations.push(path),
            None => {}
        }
    }
}

fn java_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use prefgen_schema::{ConfigNode, Signedness};

    use super::*;

    fn tree() -> SettingsTree {
        SettingsTree::new(vec![ConfigNode::composite(
            "Core",
            vec![
                ConfigNode::integer("Preferred SPU Threads", Signedness::Unsigned, 0, 6),
                ConfigNode::integer("Clocks Scale", Signedness::Signed, -100, 100),
                ConfigNode::boolean("Accurate Xfloat"),
                ConfigNode::enumerated("PPU Decoder", ["Interpreter", "LLVM"]),
            ],
        )])
    }

    #[test]
    fn test_partitions() {
        let (manifest, report) = KeyManifest::collect(&tree(), &GeneratorTables::default()).unwrap();

        assert_eq!(manifest.booleans, vec!["Core|Accurate Xfloat"]);
        assert_eq!(
            manifest.integers,
            vec!["Core|Preferred SPU Threads", "Core|Clocks Scale"]
        );
        assert_eq!(manifest.partition(ValueType::Enumerated), ["Core|PPU Decoder"]);
        assert_eq!(manifest.groups, vec!["Core"]);
        assert_eq!(manifest.leaf_count(), report.leaves);
    }

    #[test]
    fn test_render_empty_partitions() {
        let out = KeyManifest::default().render(Indent::Spaces(2));
        assert_eq!(
            out,
            "final String[] BOOL_KEYS = {\n};\n\nfinal String[] INT_KEYS = {\n};\n\n\
             final String[] STRING_ARR_KEYS = {\n};\n\nfinal String[] NODE_KEYS = {\n};\n"
        );
    }

    #[test]
    fn test_paths_are_escaped() {
        let manifest = KeyManifest {
            booleans: vec![r#"Video|Say "Hi" \o/"#.to_string()],
            ..Default::default()
        };
        let out = manifest.render(Indent::Spaces(4));
        assert!(out.contains(r#"    "Video|Say \"Hi\" \\o/","#));
    }
}
