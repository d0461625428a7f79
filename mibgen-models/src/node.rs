//! Node types for generated managed-object bindings.
//!
//! Every generated node is a `static` of one of these types. Identity is
//! carried by [`BaseNode`]; the kind-specific wrappers reference each other
//! through `&'static` links so a table reaches its row and a row its columns
//! without any runtime lookup.

use crate::types::Type;

/// Identity shared by every node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseNode {
    /// Object descriptor.
    pub name: &'static str,
    /// Object identifier.
    pub oid: &'static [u32],
    /// Dotted rendering of `oid`.
    pub oid_formatted: &'static str,
    /// Number of sub-identifiers in `oid`.
    pub oid_len: usize,
}

impl BaseNode {
    /// Returns true if this node's OID is a prefix of `oid`.
    #[must_use]
    pub fn is_prefix_of(&self, oid: &[u32]) -> bool {
        oid.starts_with(self.oid)
    }

    /// Returns the sub-identifiers of `oid` below this node.
    ///
    /// For a column this is the row index part of an instance OID.
    #[must_use]
    pub fn suffix_of<'a>(&self, oid: &'a [u32]) -> Option<&'a [u32]> {
        oid.strip_prefix(self.oid)
    }
}

/// Single-instance object.
///
/// The identity of a generated scalar already addresses its instance, so the
/// OID ends with the `.0` sub-identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarNode {
    /// Node identity.
    pub base: BaseNode,
    /// Value syntax.
    pub syntax: &'static Type,
}

/// Column of a conceptual table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnNode {
    /// Scalar-shaped projection of the column, used wherever a
    /// scalar-compatible object is expected.
    pub scalar: ScalarNode,
}

impl ColumnNode {
    /// Node identity.
    #[must_use]
    pub const fn base(&self) -> &BaseNode {
        &self.scalar.base
    }

    /// Value syntax.
    #[must_use]
    pub const fn syntax(&self) -> &'static Type {
        self.scalar.syntax
    }
}

/// Conceptual row (table entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowNode {
    /// Node identity.
    pub base: BaseNode,
    /// Columns in declaration order.
    pub columns: &'static [&'static ColumnNode],
    /// Index columns in declaration order.
    pub index: &'static [&'static ColumnNode],
}

impl RowNode {
    /// Finds a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static ColumnNode> {
        self.columns
            .iter()
            .copied()
            .find(|column| column.base().name == name)
    }

    /// Returns true if the named column is part of the index.
    #[must_use]
    pub fn is_index(&self, name: &str) -> bool {
        self.index.iter().any(|column| column.base().name == name)
    }
}

/// Conceptual table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableNode {
    /// Node identity.
    pub base: BaseNode,
    /// Row template.
    pub row: &'static RowNode,
}

/// Event definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationNode {
    /// Node identity.
    pub base: BaseNode,
    /// Payload objects, as scalar-compatible projections.
    pub objects: &'static [&'static ScalarNode],
}
