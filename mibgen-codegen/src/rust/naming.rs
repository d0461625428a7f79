//! Identifier derivation for generated code.
//!
//! Type and field names take the schema name with its first character
//! upper-cased, value names with it lower-cased; the rest of the name is
//! copied unchanged. Every derived identifier must parse as a Rust
//! identifier.

use crate::error::CodegenError;

/// Suffix appended to node value names.
pub const NODE_SUFFIX: &str = "Node";

/// Suffix appended to shared type names.
pub const TYPE_SUFFIX: &str = "Type";

/// Suffix appended to module struct names.
pub const MODULE_SUFFIX: &str = "Module";

/// Returns the field name for a node (`ifIndex` -> `IfIndex`).
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` for empty or non-identifier names.
pub fn field_ident(node_name: &str) -> Result<String, CodegenError> {
    let ident = upper_first(node_name)
        .ok_or_else(|| CodegenError::invalid_identifier("node field", node_name))?;
    validate(ident, "node field", node_name)
}

/// Returns the static name for a node (`ifIndex` -> `ifIndexNode`).
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` for empty or non-identifier names.
pub fn value_ident(node_name: &str) -> Result<String, CodegenError> {
    let ident = lower_first(node_name)
        .map(|s| s + NODE_SUFFIX)
        .ok_or_else(|| CodegenError::invalid_identifier("node value", node_name))?;
    validate(ident, "node value", node_name)
}

/// Returns the static name for a shared type (`DisplayString` -> `DisplayStringType`).
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` for empty or non-identifier names.
pub fn shared_type_ident(type_name: &str) -> Result<String, CodegenError> {
    let ident = upper_first(type_name)
        .map(|s| s + TYPE_SUFFIX)
        .ok_or_else(|| CodegenError::invalid_identifier("shared type", type_name))?;
    validate(ident, "shared type", type_name)
}

/// Returns the aggregate name for a module (`IF-MIB` -> `IfMib`).
///
/// Each `-`-separated part gets an upper-cased first character and a
/// lower-cased remainder; empty parts are dropped.
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` if nothing usable remains.
pub fn module_ident(module_name: &str) -> Result<String, CodegenError> {
    let mut ident = String::with_capacity(module_name.len());
    for part in module_name.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            ident.extend(first.to_uppercase());
            ident.push_str(&chars.as_str().to_lowercase());
        }
    }
    if ident.is_empty() {
        return Err(CodegenError::invalid_identifier("module", module_name));
    }
    validate(ident, "module", module_name)
}

/// Returns the Rust module path segment and file stem for a module
/// (`IF-MIB` -> `if_mib`).
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` for empty or non-identifier names.
pub fn module_path(module_name: &str) -> Result<String, CodegenError> {
    if module_name.is_empty() {
        return Err(CodegenError::invalid_identifier("module path", module_name));
    }
    let ident = module_name.to_lowercase().replace('-', "_");
    validate(ident, "module path", module_name)
}

/// Upper-cases the first character.
fn upper_first(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Lower-cases the first character.
fn lower_first(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Checks that `ident` is a usable Rust identifier.
fn validate(ident: String, context: &str, name: &str) -> Result<String, CodegenError> {
    match syn::parse_str::<syn::Ident>(&ident) {
        Ok(_) => Ok(ident),
        Err(_) => Err(CodegenError::invalid_identifier(context, name)),
    }
}
