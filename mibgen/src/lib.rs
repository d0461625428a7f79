//! # mibgen
//!
//! Statically typed Rust bindings for SNMP MIB modules.
//!
//! mibgen reads pre-parsed MIB module graphs and emits, for every module, a
//! Rust module of `pub static` node descriptors: scalars, tables, rows,
//! columns and notifications, each with its OID and syntax. Custom types
//! referenced across modules are emitted once, in a shared `types` module.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mibgen::prelude::*;
//!
//! let mut loader = FileLoader::from_env();
//! loader.append_path("mibs/json");
//!
//! generate(
//!     loader,
//!     &["IF-MIB", "IP-MIB"],
//!     &Destination::Directory("src/mibs".into()),
//!     GeneratorConfig::default(),
//! )?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`models`] - Runtime types the generated code is built from
//! - [`schema`] - Module graph data model and schema loaders
//! - [`codegen`] - Binding generation, formatting and output
//! - [`cli`] - The `mibgen` command line

pub mod cli;
pub mod prelude;

/// Runtime model types for generated bindings.
pub mod models {
    pub use mibgen_models::*;
}

/// Module graph data model and loaders.
pub mod schema {
    pub use mibgen_schema::*;
}

/// Binding generation.
pub mod codegen {
    pub use mibgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use mibgen_codegen::{
    CodegenError, Destination, Generator, GeneratorConfig, RunSummary, generate,
    generate_to_string,
};
pub use mibgen_schema::{FileLoader, ModuleSet, SchemaLoader};
