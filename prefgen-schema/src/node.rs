//! Settings tree nodes.

/// Whether an integer setting accepts negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Value type of a settable leaf, used to partition the key manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    /// Signed and unsigned integers share one partition.
    Integer,
    Enumerated,
}

impl ValueType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Enumerated => "enumerated",
        }
    }
}

/// One legal value of an enumerated setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,
    /// Token persisted when the choice is selected.
    pub value: String,
}

impl Choice {
    /// A choice whose persisted value is its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }

    /// A choice with a distinct persisted value.
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The shape of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Boolean,
    Integer {
        signedness: Signedness,
        min: i64,
        /// `None` means unbounded.
        max: Option<i64>,
    },
    Enumerated {
        choices: Vec<Choice>,
    },
    Composite {
        children: Vec<ConfigNode>,
    },
}

/// A node in the settings tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNode {
    name: String,
    kind: NodeKind,
}

impl ConfigNode {
    /// Create a node from its parts.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A boolean setting.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Boolean)
    }

    /// An integer setting. A `max` of `-1` means unbounded.
    pub fn integer(name: impl Into<String>, signedness: Signedness, min: i64, max: i64) -> Self {
        Self::new(
            name,
            NodeKind::Integer {
                signedness,
                min,
                max: (max != -1).then_some(max),
            },
        )
    }

    /// An enumerated setting whose values are its labels.
    pub fn enumerated<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            NodeKind::Enumerated {
                choices: labels.into_iter().map(Choice::new).collect(),
            },
        )
    }

    /// An enumerated setting with explicit choices.
    pub fn enumerated_choices(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self::new(name, NodeKind::Enumerated { choices })
    }

    /// A group of settings.
    pub fn composite(name: impl Into<String>, children: Vec<ConfigNode>) -> Self {
        Self::new(name, NodeKind::Composite { children })
    }

    /// The display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's shape.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Children in declared order; empty for leaves.
    pub fn children(&self) -> &[ConfigNode] {
        match &self.kind {
            NodeKind::Composite { children } => children,
            _ => &[],
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Returns true if this node groups other nodes.
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Composite { .. })
    }

    /// Returns true if this node is a boolean setting.
    pub fn is_boolean(&self) -> bool {
        matches!(self.kind, NodeKind::Boolean)
    }

    /// Value type of a leaf; `None` for composites.
    pub fn value_type(&self) -> Option<ValueType> {
        match self.kind {
            NodeKind::Boolean => Some(ValueType::Boolean),
            NodeKind::Integer { .. } => Some(ValueType::Integer),
            NodeKind::Enumerated { .. } => Some(ValueType::Enumerated),
            NodeKind::Composite { .. } => None,
        }
    }

    /// Ordered choice labels; empty unless enumerated.
    pub fn choices(&self) -> impl Iterator<Item = &str> {
        self.choice_list().iter().map(|c| c.label.as_str())
    }

    /// Ordered choice values, aligned with [`choices`](Self::choices).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.choice_list().iter().map(|c| c.value.as_str())
    }

    fn choice_list(&self) -> &[Choice] {
        match &self.kind {
            NodeKind::Enumerated { choices } => choices,
            _ => &[],
        }
    }
}
