//! # mibgen schema
//!
//! Loaded MIB module graph and the loader interface the code generator
//! consumes.
//!
//! This crate provides:
//! - The read-only data model (`Module`, `Node`, `NodeKind`, `NodeRef`, `Type`)
//! - The `SchemaLoader` introspection trait
//! - An in-memory `ModuleSet` and a JSON-backed `FileLoader` with search paths
//! - Load-time validation of structural invariants
//!
//! Parsing MIB source text is out of scope: module files hold the graph an
//! upstream SMI parser already produced.

pub mod error;
pub mod loader;
pub mod module;
pub mod node;
pub mod types;
pub mod validation;

pub use error::{LoadError, LookupError};
pub use loader::{FileLoader, ModuleSet, PATH_ENV, SchemaLoader};
pub use mibgen_models::BaseType;
pub use module::Module;
pub use node::{Node, NodeKind, NodeRef};
pub use types::{Enum, NamedNumber, Range, Type};
pub use validation::validate_module;
