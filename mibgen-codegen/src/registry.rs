//! Run-scoped registry of shared types.
//!
//! Types are keyed by name and registered insert-if-absent: the first type
//! seen under a name is kept for the rest of the run, and later
//! registrations of that name are ignored even if their shape differs.
//! Distinct names must still derive distinct shared identifiers.

use crate::error::CodegenError;
use crate::rust::naming::shared_type_ident;
use mibgen_schema::Type;
use std::collections::BTreeMap;

/// Registry of named custom types referenced during one run.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, Type>,
    /// Shared identifier to the type name that claimed it.
    idents: BTreeMap<String, String>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty` unless a type of the same name is already present.
    ///
    /// Returns true if the type was added.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidIdentifier` if the name does not make a
    /// valid identifier, or `CodegenError::DuplicateIdentifier` if another
    /// registered name derives the same one.
    pub fn register(&mut self, ty: &Type) -> Result<bool, CodegenError> {
        if self.types.contains_key(&ty.name) {
            tracing::trace!("Type {} already registered, keeping first", ty.name);
            return Ok(false);
        }

        let ident = shared_type_ident(&ty.name)?;
        if let Some(first) = self.idents.get(&ident) {
            return Err(CodegenError::duplicate_identifier(
                "shared type",
                ident,
                first.clone(),
                ty.name.clone(),
            ));
        }

        tracing::debug!("Registered shared type {}", ty.name);
        self.idents.insert(ident, ty.name.clone());
        self.types.insert(ty.name.clone(), ty.clone());
        Ok(true)
    }

    /// Gets a registered type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over registered types in lexicographic order by name.
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }
}
