//! Type (syntax) code generation.
//!
//! A type renders to the same `Type { .. }` literal in both modes. Inline
//! mode borrows it in place at the node that uses it; shared mode wraps it
//! in a `pub static` of the generated `types` module.

use crate::error::CodegenError;
use crate::rust::naming::shared_type_ident;
use mibgen_schema::{Enum, Range, Type};

/// Type names rendered inline at the point of use instead of shared.
pub const BUILTIN_TYPES: [&str; 8] = [
    "Integer32",
    "OctetString",
    "ObjectIdentifier",
    "Unsigned32",
    "Integer64",
    "Unsigned64",
    "Enumeration",
    "Bits",
];

/// Returns true if `name` is one of the built-in primitive type names.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Generator for type literals.
pub struct TypeGenerator<'a> {
    ty: &'a Type,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(ty: &'a Type) -> Self {
        Self { ty }
    }

    /// Generates the borrowed literal used directly in a node's `syntax` field.
    #[must_use]
    pub fn generate_inline(&self) -> String {
        format!("&{}", self.literal())
    }

    /// Generates the shared `pub static` declaration of the type.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the type name does not
    /// make a valid identifier.
    pub fn generate_shared(&self) -> Result<String, CodegenError> {
        let ident = shared_type_ident(&self.ty.name)?;
        Ok(format!(
            "pub static {}: Type = {};\n\n",
            ident,
            self.literal()
        ))
    }

    /// Generates the `Type { .. }` literal.
    fn literal(&self) -> String {
        let ty = self.ty;
        let mut output = String::new();

        output.push_str("Type {\n");
        output.push_str(&format!("    base_type: BaseType::{},\n", ty.base_type.name()));
        output.push_str(&format!("    name: {:?},\n", ty.name));

        if let Some(enumeration) = &ty.enumeration {
            output.push_str(&format!(
                "    enumeration: Some(&{}),\n",
                enum_literal(enumeration)
            ));
        }

        if !ty.ranges.is_empty() {
            output.push_str("    ranges: &[\n");
            for range in &ty.ranges {
                output.push_str(&format!("        {},\n", range_literal(range)));
            }
            output.push_str("    ],\n");
        }

        if let Some(format) = ty.format() {
            output.push_str(&format!("    format: Some({format:?}),\n"));
        }
        if let Some(units) = ty.units() {
            output.push_str(&format!("    units: Some({units:?}),\n"));
        }

        output.push_str("    ..Type::EMPTY\n");
        output.push('}');
        output
    }
}

/// Renders an enumeration with its values in ascending order.
fn enum_literal(enumeration: &Enum) -> String {
    let mut output = String::new();
    output.push_str("Enum {\n");
    output.push_str(&format!(
        "        base_type: BaseType::{},\n",
        enumeration.base_type.name()
    ));
    output.push_str("        values: &[\n");
    for entry in enumeration.sorted_values() {
        output.push_str(&format!(
            "            EnumValue {{ value: {}, name: {:?} }},\n",
            entry.value, entry.name
        ));
    }
    output.push_str("        ],\n");
    output.push_str("    }");
    output
}

fn range_literal(range: &Range) -> String {
    format!(
        "Range {{ base_type: BaseType::{}, min: {}, max: {} }}",
        range.base_type.name(),
        range.min,
        range.max
    )
}
