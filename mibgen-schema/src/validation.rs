//! Load-time module validation.
//!
//! Only the structural invariants lookups depend on are checked here; the
//! rest of the graph is trusted as handed over by the upstream parser.

use crate::error::LoadError;
use crate::module::Module;
use crate::types::Type;
use std::collections::HashSet;

/// Validates a freshly loaded module.
///
/// # Errors
/// Returns `LoadError::Invalid` if the module has no name, two nodes share a
/// name, or an enumeration repeats a value.
pub fn validate_module(module: &Module) -> Result<(), LoadError> {
    if module.name.is_empty() {
        return Err(LoadError::invalid("", "module name is empty"));
    }

    let mut seen_names = HashSet::new();
    for node in &module.nodes {
        if !seen_names.insert(node.name.as_str()) {
            return Err(LoadError::invalid(
                &module.name,
                format!("duplicate node '{}'", node.name),
            ));
        }
        if let Some(syntax) = &node.syntax {
            validate_type(&module.name, syntax)?;
        }
    }

    Ok(())
}

/// Validates a type's enumeration.
fn validate_type(module: &str, syntax: &Type) -> Result<(), LoadError> {
    let Some(enumeration) = &syntax.enumeration else {
        return Ok(());
    };

    let mut seen_values = HashSet::new();
    for entry in &enumeration.values {
        if !seen_values.insert(entry.value) {
            return Err(LoadError::invalid(
                module,
                format!(
                    "duplicate enum value {} in type '{}'",
                    entry.value, syntax.name
                ),
            ));
        }
    }

    Ok(())
}
