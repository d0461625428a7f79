//! Prelude module for convenient imports.
//!
//! ```ignore
//! use mibgen::prelude::*;
//! ```

// Schema types
pub use mibgen_schema::{
    FileLoader, LoadError, LookupError, Module, ModuleSet, Node, NodeKind, NodeRef,
    SchemaLoader,
};

// Codegen types
pub use mibgen_codegen::{
    CodegenError, Destination, DirectorySink, Generator, GeneratorConfig, OutputSink,
    RunSummary, RustFormatter, SourceFormatter, StreamSink, generate, generate_to_string,
};
