//! Node definitions.
//!
//! A node is one managed-object definition inside a module. Its kind is a
//! bitmask using the libsmi node-kind bit values, so an upstream loader can
//! hand over whatever combination it produced and the emitter decides what
//! to do with it.

use crate::types::Type;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Node kind bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct NodeKind: u32 {
        /// Plain registration point in the OID tree.
        const NODE = 0x0001;
        /// Single-instance object.
        const SCALAR = 0x0002;
        /// Conceptual table.
        const TABLE = 0x0004;
        /// Conceptual row.
        const ROW = 0x0008;
        /// Table column.
        const COLUMN = 0x0010;
        /// Notification or trap.
        const NOTIFICATION = 0x0020;
        /// Object or notification group.
        const GROUP = 0x0040;
        /// Module compliance statement.
        const COMPLIANCE = 0x0080;
        /// Agent capabilities statement.
        const CAPABILITIES = 0x0100;
    }
}

impl NodeKind {
    /// Kinds that produce bindings.
    pub const EMITTED: NodeKind = NodeKind::SCALAR
        .union(NodeKind::TABLE)
        .union(NodeKind::ROW)
        .union(NodeKind::COLUMN)
        .union(NodeKind::NOTIFICATION);
}

/// Reference to another node, possibly in a different module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    /// Owning module; `None` means the referencing node's module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Node name.
    pub name: String,
}

impl NodeRef {
    /// Creates a reference to a node in the referencing node's module.
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            module: None,
            name: name.into(),
        }
    }

    /// Creates a reference to a node in `module`.
    #[must_use]
    pub fn qualified(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            name: name.into(),
        }
    }

    /// Returns the owning module, falling back to `current`.
    #[must_use]
    pub fn module_or<'a>(&'a self, current: &'a str) -> &'a str {
        self.module.as_deref().unwrap_or(current)
    }

    /// Returns true if the referenced node lives outside `current`.
    #[must_use]
    pub fn is_foreign(&self, current: &str) -> bool {
        self.module_or(current) != current
    }
}

/// Managed-object definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Object descriptor.
    pub name: String,
    /// Kind bitmask.
    #[serde(default)]
    pub kind: NodeKind,
    /// Object identifier.
    pub oid: Vec<u32>,
    /// DESCRIPTION text.
    #[serde(default)]
    pub description: String,
    /// Syntax, for scalars and columns.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Type>,
    /// Row, for tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<NodeRef>,
    /// Columns, for rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<NodeRef>,
    /// Index columns, for rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index: Vec<NodeRef>,
    /// Payload objects, for notifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<NodeRef>,
}

impl Node {
    /// Creates a new node.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind, oid: impl Into<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            kind,
            oid: oid.into(),
            description: String::new(),
            syntax: None,
            row: None,
            columns: Vec::new(),
            index: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the syntax.
    #[must_use]
    pub fn with_type(mut self, syntax: Type) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// Sets the row reference.
    #[must_use]
    pub fn with_row(mut self, row: NodeRef) -> Self {
        self.row = Some(row);
        self
    }

    /// Sets the column references.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = NodeRef>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Sets the index references.
    #[must_use]
    pub fn with_index(mut self, index: impl IntoIterator<Item = NodeRef>) -> Self {
        self.index = index.into_iter().collect();
        self
    }

    /// Sets the notification object references.
    #[must_use]
    pub fn with_objects(mut self, objects: impl IntoIterator<Item = NodeRef>) -> Self {
        self.objects = objects.into_iter().collect();
        self
    }

    /// Returns the number of sub-identifiers.
    #[must_use]
    pub fn oid_len(&self) -> usize {
        self.oid.len()
    }

    /// Returns the dotted numeric rendering of the OID.
    #[must_use]
    pub fn render_numeric(&self) -> String {
        self.oid
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Returns true if any bit of `kind` is set.
    #[must_use]
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind.intersects(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numeric() {
        let node = Node::new("ifNumber", NodeKind::SCALAR, [1, 3, 6, 1, 2, 1, 2, 1]);
        assert_eq!(node.render_numeric(), "1.3.6.1.2.1.2.1");
        assert_eq!(node.oid_len(), 8);

        let empty = Node::new("root", NodeKind::NODE, Vec::<u32>::new());
        assert_eq!(empty.render_numeric(), "");
        assert_eq!(empty.oid_len(), 0);
    }

    #[test]
    fn test_emitted_kinds() {
        assert!(NodeKind::EMITTED.contains(NodeKind::SCALAR));
        assert!(NodeKind::EMITTED.contains(NodeKind::NOTIFICATION));
        assert!(!NodeKind::EMITTED.intersects(NodeKind::NODE | NodeKind::GROUP));
        assert!(!NodeKind::EMITTED.intersects(NodeKind::COMPLIANCE | NodeKind::CAPABILITIES));
    }

    #[test]
    fn test_node_ref_module() {
        let local = NodeRef::local("ifIndex");
        assert_eq!(local.module_or("IF-MIB"), "IF-MIB");
        assert!(!local.is_foreign("IF-MIB"));

        let foreign = NodeRef::qualified("IF-MIB", "ifIndex");
        assert!(foreign.is_foreign("IP-MIB"));
        assert!(!foreign.is_foreign("IF-MIB"));
    }

    #[test]
    fn test_kind_deserialize() {
        let json = r#"{"name": "ifIndex", "kind": "COLUMN", "oid": [1, 3]}"#;
        let node: Node = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(node.kind, NodeKind::COLUMN);
        assert!(node.syntax.is_none());

        let json = r#"{"name": "odd", "kind": "SCALAR | COLUMN", "oid": [1]}"#;
        let node: Node = serde_json::from_str(json).expect("Failed to parse");
        assert!(node.is(NodeKind::SCALAR));
        assert!(node.is(NodeKind::COLUMN));
    }

    #[test]
    fn test_kind_defaults_to_empty() {
        let json = r#"{"name": "mystery", "oid": [1, 3, 6]}"#;
        let node: Node = serde_json::from_str(json).expect("Failed to parse");
        assert!(node.kind.is_empty());
    }
}
