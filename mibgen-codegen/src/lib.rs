//! # mibgen codegen
//!
//! Rust code generation from loaded MIB modules.
//!
//! This crate provides:
//! - Static bindings for scalars, tables, rows, columns and notifications
//! - Shared type declarations, deduplicated by name across a run
//! - Source formatting through `syn` and `prettyplease`
//! - Stream (stdout or one file) and per-module directory output

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod output;
pub mod registry;
pub mod rust;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use format::{RustFormatter, SourceFormatter};
pub use generator::{Generator, RunSummary};
pub use output::{Destination, DirectorySink, OutputSink, StreamSink};
pub use registry::TypeRegistry;

use mibgen_schema::SchemaLoader;

/// Generates bindings for `modules` into `destination`.
///
/// # Arguments
/// * `loader` - Schema loader the modules are loaded through
/// * `modules` - Module names or paths, in generation order
/// * `destination` - Where the generated units are written
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if loading, generation, formatting or writing fails.
pub fn generate<L, S>(
    loader: L,
    modules: &[S],
    destination: &Destination,
    config: GeneratorConfig,
) -> Result<RunSummary, CodegenError>
where
    L: SchemaLoader,
    S: AsRef<str>,
{
    let mut sink = destination.open()?;
    Generator::new(loader)
        .with_config(config)
        .run(modules, sink.as_mut())
}

/// Generates bindings for `modules` as one source string.
///
/// The result has the stream layout: a single header, one `pub mod` per
/// module and a trailing `pub mod types`.
///
/// # Errors
/// Returns `CodegenError` if loading, generation or formatting fails.
pub fn generate_to_string<L, S>(
    loader: L,
    modules: &[S],
    config: GeneratorConfig,
) -> Result<String, CodegenError>
where
    L: SchemaLoader,
    S: AsRef<str>,
{
    let mut sink = StreamSink::new(Vec::new(), "<memory>");
    Generator::new(loader)
        .with_config(config)
        .run(modules, &mut sink)?;
    Ok(String::from_utf8_lossy(&sink.into_inner()).into_owned())
}
