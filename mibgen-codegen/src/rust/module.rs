//! Module code generation.

use crate::error::CodegenError;
use crate::registry::TypeRegistry;
use crate::rust::comment::doc_block;
use crate::rust::naming::{MODULE_SUFFIX, field_ident, module_ident, value_ident};
use crate::rust::nodes::{NodeClass, NodeGenerator, classify};
use mibgen_schema::{Module, Node, SchemaLoader};
use std::collections::HashMap;

/// Generator for the bindings of one loaded module.
///
/// The output holds, in order, the module struct with one field per emitted
/// node, the aggregate static populating it, and one static per emitted node.
/// All three follow the loader's node order.
pub struct ModuleGenerator<'a, L: SchemaLoader + ?Sized> {
    loader: &'a L,
    module: &'a Module,
}

impl<'a, L: SchemaLoader + ?Sized> ModuleGenerator<'a, L> {
    /// Creates a new module generator.
    #[must_use]
    pub fn new(loader: &'a L, module: &'a Module) -> Self {
        Self { loader, module }
    }

    /// Generates the module bindings, registering custom types into `registry`.
    ///
    /// # Errors
    /// Returns `CodegenError` if any emitted node cannot be generated.
    pub fn generate(&self, registry: &mut TypeRegistry) -> Result<String, CodegenError> {
        let ident = module_ident(&self.module.name)?;
        let nodes = self.emitted_nodes()?;
        tracing::debug!(
            "Generating {} ({} of {} nodes emitted)",
            self.module.name,
            nodes.len(),
            self.module.nodes().len()
        );

        let mut output = String::new();
        output.push_str(&self.generate_struct(&ident, &nodes)?);
        output.push_str(&self.generate_aggregate(&ident, &nodes)?);

        let node_generator = NodeGenerator::new(self.loader, &self.module.name);
        for (node, class) in &nodes {
            output.push_str(&node_generator.generate(node, *class, registry)?);
        }

        Ok(output)
    }

    /// Nodes that produce bindings, in loader order.
    fn emitted_nodes(&self) -> Result<Vec<(&'a Node, NodeClass)>, CodegenError> {
        let mut nodes = Vec::new();
        for node in self.module.nodes() {
            if let Some(class) = classify(node)? {
                nodes.push((node, class));
            }
        }
        Ok(nodes)
    }

    fn generate_struct(
        &self,
        ident: &str,
        nodes: &[(&Node, NodeClass)],
    ) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&doc_block(&self.module.description));
        output.push_str(&format!("pub struct {ident}{MODULE_SUFFIX} {{\n"));
        let mut fields: HashMap<String, &str> = HashMap::with_capacity(nodes.len());
        for (node, class) in nodes {
            let field = field_ident(&node.name)?;
            if let Some(first) = fields.get(&field) {
                return Err(CodegenError::duplicate_identifier(
                    "node",
                    field,
                    *first,
                    node.name.as_str(),
                ));
            }
            output.push_str(&format!(
                "    pub {}: &'static {},\n",
                field,
                class.model_type()
            ));
            fields.insert(field, &node.name);
        }
        output.push_str("}\n\n");

        Ok(output)
    }

    fn generate_aggregate(
        &self,
        ident: &str,
        nodes: &[(&Node, NodeClass)],
    ) -> Result<String, CodegenError> {
        let mut output = String::new();

        output.push_str(&format!(
            "pub static {ident}: {ident}{MODULE_SUFFIX} = {ident}{MODULE_SUFFIX} {{\n"
        ));
        for (node, _) in nodes {
            output.push_str(&format!(
                "    {}: &{},\n",
                field_ident(&node.name)?,
                value_ident(&node.name)?
            ));
        }
        output.push_str("};\n\n");

        Ok(output)
    }
}
