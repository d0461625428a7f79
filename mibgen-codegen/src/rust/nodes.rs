//! Node code generation.
//!
//! Every emitted node becomes one `pub static` whose value inlines all of its
//! kind-specific substructure.

use crate::error::CodegenError;
use crate::registry::TypeRegistry;
use crate::rust::comment::doc_block;
use crate::rust::naming::{module_path, shared_type_ident, value_ident};
use crate::rust::types::{TypeGenerator, is_builtin};
use mibgen_schema::{Node, NodeKind, NodeRef, SchemaLoader};
use std::borrow::Cow;

/// Emitted node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Single-instance object.
    Scalar,
    /// Conceptual table.
    Table,
    /// Conceptual row.
    Row,
    /// Table column.
    Column,
    /// Notification.
    Notification,
}

/// Kind bit of each emitted class.
const CLASSES: [(NodeKind, NodeClass); 5] = [
    (NodeKind::SCALAR, NodeClass::Scalar),
    (NodeKind::TABLE, NodeClass::Table),
    (NodeKind::ROW, NodeClass::Row),
    (NodeKind::COLUMN, NodeClass::Column),
    (NodeKind::NOTIFICATION, NodeClass::Notification),
];

impl NodeClass {
    /// Returns the runtime model type of the class.
    #[must_use]
    pub const fn model_type(self) -> &'static str {
        match self {
            Self::Scalar => "ScalarNode",
            Self::Table => "TableNode",
            Self::Row => "RowNode",
            Self::Column => "ColumnNode",
            Self::Notification => "NotificationNode",
        }
    }
}

/// Classifies a node by its kind bitmask.
///
/// Returns `Ok(None)` for nodes that are not emitted.
///
/// # Errors
/// Returns `CodegenError::AmbiguousKind` if more than one emitted kind bit is set.
pub fn classify(node: &Node) -> Result<Option<NodeClass>, CodegenError> {
    let emitted = node.kind & NodeKind::EMITTED;
    if emitted.bits().count_ones() > 1 {
        return Err(CodegenError::AmbiguousKind {
            node: node.name.clone(),
            kind: format!("{:?}", node.kind),
        });
    }
    Ok(CLASSES
        .iter()
        .find(|(kind, _)| *kind == emitted)
        .map(|(_, class)| *class))
}

/// Identity fields of an emitted node.
///
/// Scalars are addressed through their single instance, so their view has
/// a trailing `0` sub-identifier; the node itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity<'a> {
    name: &'a str,
    oid: Cow<'a, [u32]>,
    rendered: String,
}

impl<'a> NodeIdentity<'a> {
    /// Returns the identity of `node` as declared.
    #[must_use]
    pub fn of(node: &'a Node) -> Self {
        Self {
            name: &node.name,
            oid: Cow::Borrowed(&node.oid),
            rendered: node.render_numeric(),
        }
    }

    /// Returns the identity of the single instance of a scalar `node`.
    #[must_use]
    pub fn scalar_instance(node: &'a Node) -> Self {
        let mut oid = node.oid.clone();
        oid.push(0);
        Self {
            name: &node.name,
            oid: Cow::Owned(oid),
            rendered: format!("{}.0", node.render_numeric()),
        }
    }

    /// Returns the sub-identifiers.
    #[must_use]
    pub fn oid(&self) -> &[u32] {
        &self.oid
    }

    /// Returns the dotted rendering.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Returns the number of sub-identifiers.
    #[must_use]
    pub fn oid_len(&self) -> usize {
        self.oid.len()
    }

    /// Generates the `BaseNode { .. }` literal.
    #[must_use]
    pub fn generate(&self) -> String {
        let oid = self
            .oid
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "BaseNode {{\n        name: {:?},\n        oid: &[{}],\n        oid_formatted: {:?},\n        oid_len: {},\n    }}",
            self.name,
            oid,
            self.rendered,
            self.oid_len()
        )
    }
}

/// Generator for node value declarations of one module.
pub struct NodeGenerator<'a, L: SchemaLoader + ?Sized> {
    loader: &'a L,
    module: &'a str,
}

impl<'a, L: SchemaLoader + ?Sized> NodeGenerator<'a, L> {
    /// Creates a generator for nodes of `module`.
    #[must_use]
    pub fn new(loader: &'a L, module: &'a str) -> Self {
        Self { loader, module }
    }

    /// Generates the value declaration of `node`.
    ///
    /// Custom types the node uses are registered into `registry`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the node lacks a required type or row, has a
    /// name that is not a valid identifier, or references an unusable node.
    pub fn generate(
        &self,
        node: &Node,
        class: NodeClass,
        registry: &mut TypeRegistry,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        let ident = value_ident(&node.name)?;

        let body = match class {
            NodeClass::Scalar => self.scalar_body(node, registry)?,
            NodeClass::Column => format!(
                "ColumnNode {{\n    scalar: {},\n}}",
                self.column_scalar(node, registry)?
            ),
            NodeClass::Table => self.table_body(node)?,
            NodeClass::Row => self.row_body(node)?,
            NodeClass::Notification => self.notification_body(node)?,
        };

        output.push_str(&doc_block(&node.description));
        output.push_str(&format!(
            "pub static {}: {} = {};\n\n",
            ident,
            class.model_type(),
            body
        ));
        Ok(output)
    }

    fn scalar_body(
        &self,
        node: &Node,
        registry: &mut TypeRegistry,
    ) -> Result<String, CodegenError> {
        Ok(format!(
            "ScalarNode {{\n    base: {},\n    syntax: {},\n}}",
            NodeIdentity::scalar_instance(node).generate(),
            self.syntax(node, registry)?
        ))
    }

    /// Columns keep their declared identity.
    fn column_scalar(
        &self,
        node: &Node,
        registry: &mut TypeRegistry,
    ) -> Result<String, CodegenError> {
        Ok(format!(
            "ScalarNode {{\n    base: {},\n    syntax: {},\n}}",
            NodeIdentity::of(node).generate(),
            self.syntax(node, registry)?
        ))
    }

    fn table_body(&self, node: &Node) -> Result<String, CodegenError> {
        let row = node.row.as_ref().ok_or_else(|| CodegenError::MissingRow {
            node: node.name.clone(),
        })?;
        Ok(format!(
            "TableNode {{\n    base: {},\n    row: &{},\n}}",
            NodeIdentity::of(node).generate(),
            self.reference(row)?
        ))
    }

    fn row_body(&self, node: &Node) -> Result<String, CodegenError> {
        Ok(format!(
            "RowNode {{\n    base: {},\n    columns: {},\n    index: {},\n}}",
            NodeIdentity::of(node).generate(),
            self.reference_list(&node.columns)?,
            self.reference_list(&node.index)?
        ))
    }

    fn notification_body(&self, node: &Node) -> Result<String, CodegenError> {
        let mut objects = Vec::with_capacity(node.objects.len());
        for object in &node.objects {
            objects.push(self.notification_object(node, object)?);
        }
        Ok(format!(
            "NotificationNode {{\n    base: {},\n    objects: &[{}],\n}}",
            NodeIdentity::of(node).generate(),
            objects.join(", ")
        ))
    }

    /// Resolves a notification object to its scalar projection.
    fn notification_object(
        &self,
        node: &Node,
        object: &NodeRef,
    ) -> Result<String, CodegenError> {
        let target = self
            .loader
            .get_node(object.module_or(self.module), &object.name)
            .map_err(|source| CodegenError::Lookup {
                module: self.module.to_string(),
                source,
            })?;

        let reference = self.reference(object)?;
        match classify(target)? {
            Some(NodeClass::Scalar) => Ok(format!("&{reference}")),
            Some(NodeClass::Column) => Ok(format!("&{reference}.scalar")),
            _ => Err(CodegenError::InvalidReference {
                node: node.name.clone(),
                target: object.name.clone(),
                reason: "notification objects must be scalars or columns".to_string(),
            }),
        }
    }

    /// Generates the `syntax` expression, registering custom types.
    fn syntax(&self, node: &Node, registry: &mut TypeRegistry) -> Result<String, CodegenError> {
        let ty = node.syntax.as_ref().ok_or_else(|| CodegenError::MissingType {
            node: node.name.clone(),
        })?;

        if is_builtin(&ty.name) {
            return Ok(TypeGenerator::new(ty).generate_inline());
        }

        registry.register(ty)?;
        Ok(format!("&super::types::{}", shared_type_ident(&ty.name)?))
    }

    fn reference_list(&self, refs: &[NodeRef]) -> Result<String, CodegenError> {
        let mut items = Vec::with_capacity(refs.len());
        for node_ref in refs {
            items.push(format!("&{}", self.reference(node_ref)?));
        }
        Ok(format!("&[{}]", items.join(", ")))
    }

    /// Returns the path of a referenced node's value, qualified when it
    /// lives in another module.
    fn reference(&self, node_ref: &NodeRef) -> Result<String, CodegenError> {
        let value = value_ident(&node_ref.name)?;
        if node_ref.is_foreign(self.module) {
            Ok(format!(
                "super::{}::{}",
                module_path(node_ref.module_or(self.module))?,
                value
            ))
        } else {
            Ok(value)
        }
    }
}
