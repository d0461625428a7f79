//! Run driver.
//!
//! A run loads each requested module in order, generates its bindings,
//! formats them and hands them to the output sink; the custom types
//! collected along the way are written last as one shared `types` unit.
//! The first error ends the run, so the shared unit is only written after
//! every module succeeded.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::format::{RustFormatter, SourceFormatter};
use crate::output::OutputSink;
use crate::registry::TypeRegistry;
use crate::rust::naming::module_path;
use crate::rust::{ModuleGenerator, TypeGenerator};
use mibgen_schema::SchemaLoader;
use std::collections::HashMap;

/// Name of the unit holding shared types.
pub const TYPES_UNIT: &str = "types";

/// First line of every generated header.
pub const GENERATED_MARKER: &str = "Code generated by mibgen. DO NOT EDIT.";

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Canonical names of the generated modules, in run order.
    pub modules: Vec<String>,
    /// Number of shared types written.
    pub shared_types: usize,
}

/// Code generator driving a run over a schema loader.
pub struct Generator<L, F = RustFormatter> {
    loader: L,
    config: GeneratorConfig,
    formatter: F,
}

impl<L: SchemaLoader> Generator<L> {
    /// Creates a generator with the default configuration and formatter.
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            config: GeneratorConfig::default(),
            formatter: RustFormatter,
        }
    }
}

impl<L: SchemaLoader, F: SourceFormatter> Generator<L, F> {
    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the formatter.
    #[must_use]
    pub fn with_formatter<G: SourceFormatter>(self, formatter: G) -> Generator<L, G> {
        Generator {
            loader: self.loader,
            config: self.config,
            formatter,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the schema loader.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Consumes the generator and returns the schema loader.
    pub fn into_loader(self) -> L {
        self.loader
    }

    /// Generates bindings for `modules` into `sink`.
    ///
    /// In stream mode the header is written once, before the first unit, and
    /// every unit is wrapped in a `pub mod`. Otherwise each unit is a complete
    /// file with its own header.
    ///
    /// # Errors
    /// Returns the first `CodegenError` encountered; nothing further is
    /// written after it.
    pub fn run<S: AsRef<str>>(
        &mut self,
        modules: &[S],
        sink: &mut dyn OutputSink,
    ) -> Result<RunSummary, CodegenError> {
        self.config.validate()?;

        let stream = sink.is_stream();
        let mut registry = TypeRegistry::new();
        let mut summary = RunSummary::default();
        let mut stems: HashMap<String, String> = HashMap::with_capacity(modules.len());

        for requested in modules {
            let requested = requested.as_ref();
            let name =
                self.loader
                    .load_module(requested)
                    .map_err(|source| CodegenError::Load {
                        module: requested.to_string(),
                        source,
                    })?;
            let module = self
                .loader
                .get_module(&name)
                .map_err(|source| CodegenError::Lookup {
                    module: name.clone(),
                    source,
                })?;

            let stem = module_path(&module.name)?;
            if stem == TYPES_UNIT {
                return Err(CodegenError::invalid_identifier(
                    "module path (reserved for shared types)",
                    module.name.as_str(),
                ));
            }
            if let Some(first) = stems.get(&stem) {
                return Err(CodegenError::duplicate_identifier(
                    "module",
                    stem,
                    first.as_str(),
                    module.name.as_str(),
                ));
            }
            stems.insert(stem.clone(), module.name.clone());

            let body = ModuleGenerator::new(&self.loader, module).generate(&mut registry)?;
            let header = !stream || summary.modules.is_empty();
            let unit = self.render_unit(&stem, &body, header, stream);

            sink.write_unit(&stem, &self.format(&stem, &unit)?)?;
            summary.modules.push(module.name.clone());
        }

        let mut body = String::new();
        for ty in registry.iter() {
            body.push_str(&TypeGenerator::new(ty).generate_shared()?);
        }
        let header = !stream || summary.modules.is_empty();
        let unit = self.render_unit(TYPES_UNIT, &body, header, stream);
        sink.write_unit(TYPES_UNIT, &self.format(TYPES_UNIT, &unit)?)?;
        sink.finish()?;

        summary.shared_types = registry.len();
        tracing::info!(
            "Generated {} modules and {} shared types",
            summary.modules.len(),
            summary.shared_types
        );
        Ok(summary)
    }

    /// Assembles the raw text of one unit.
    fn render_unit(&self, stem: &str, body: &str, header: bool, wrap: bool) -> String {
        let mut output = String::new();

        if header {
            output.push_str(&self.header());
        }
        if wrap {
            output.push_str(&format!("pub mod {stem} {{\n"));
        }
        output.push_str(&format!("use {}::prelude::*;\n\n", self.config.models_crate));
        output.push_str(body);
        if wrap {
            output.push_str("}\n");
        }

        output
    }

    fn header(&self) -> String {
        format!(
            "//! {}\n//!\n//! Bindings of the `{}` unit.\n\n#![allow(non_snake_case, non_upper_case_globals, unused_imports)]\n\n",
            GENERATED_MARKER, self.config.unit_name
        )
    }

    fn format(&self, unit: &str, text: &str) -> Result<String, CodegenError> {
        self.formatter
            .format(text)
            .map_err(|e| CodegenError::Format {
                unit: unit.to_string(),
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::StreamSink;
    use mibgen_schema::{BaseType, Module, ModuleSet, Node, NodeKind, Type};

    fn sample_loader() -> ModuleSet {
        ModuleSet::new()
            .with_module(
                Module::new("ALPHA-MIB").with_node(
                    Node::new("alphaName", NodeKind::SCALAR, [1, 3, 6, 1, 4, 1, 1, 1])
                        .with_type(Type::new("DisplayString", BaseType::OctetString)),
                ),
            )
            .with_module(
                Module::new("BETA-MIB").with_node(
                    Node::new("betaCount", NodeKind::SCALAR, [1, 3, 6, 1, 4, 1, 2, 1])
                        .with_type(Type::new("Integer32", BaseType::Integer32)),
                ),
            )
    }

    fn run_to_string(
        generator: &mut Generator<ModuleSet>,
        modules: &[&str],
    ) -> Result<(String, RunSummary), CodegenError> {
        let mut sink = StreamSink::new(Vec::new(), "<memory>");
        let summary = generator.run(modules, &mut sink)?;
        let text = String::from_utf8(sink.into_inner()).expect("utf-8 output");
        Ok((text, summary))
    }

    #[test]
    fn test_stream_has_single_header() {
        let mut generator = Generator::new(sample_loader());
        let (text, summary) =
            run_to_string(&mut generator, &["ALPHA-MIB", "BETA-MIB"]).expect("Failed to run");

        assert_eq!(text.matches(GENERATED_MARKER).count(), 1);
        assert!(text.starts_with("//! Code generated by mibgen. DO NOT EDIT."));
        assert_eq!(text.matches("pub mod types").count(), 1);

        let alpha = text.find("pub mod alpha_mib").expect("alpha missing");
        let beta = text.find("pub mod beta_mib").expect("beta missing");
        let types = text.find("pub mod types").expect("types missing");
        assert!(alpha < beta && beta < types);

        assert_eq!(summary.modules, vec!["ALPHA-MIB", "BETA-MIB"]);
        assert_eq!(summary.shared_types, 1);
        assert!(syn::parse_file(&text).is_ok());
    }

    #[test]
    fn test_header_names_unit_and_models_crate() {
        let mut generator = Generator::new(sample_loader()).with_config(
            GeneratorConfig::new()
                .with_unit_name("snmp")
                .with_models_crate("crate::models"),
        );
        let (text, _) = run_to_string(&mut generator, &["BETA-MIB"]).expect("Failed to run");

        assert!(text.contains("`snmp`"));
        assert!(text.contains("use crate::models::prelude::*;"));
        assert!(!text.contains("mibgen_models"));
    }

    #[test]
    fn test_invalid_config_fails_before_output() {
        let mut generator = Generator::new(sample_loader())
            .with_config(GeneratorConfig::new().with_models_crate("not a path"));
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator.run(&["ALPHA-MIB"], &mut sink).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidConfig { .. }));
        assert_eq!(sink.units(), 0);
    }

    #[test]
    fn test_load_failure_skips_types() {
        let mut generator = Generator::new(sample_loader());
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator
            .run(&["ALPHA-MIB", "MISSING-MIB", "BETA-MIB"], &mut sink)
            .unwrap_err();
        assert!(matches!(err, CodegenError::Load { ref module, .. } if module == "MISSING-MIB"));
        assert_eq!(sink.units(), 1);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!text.contains("pub mod types"));
        assert!(!text.contains("beta_mib"));
    }

    #[test]
    fn test_module_named_types_rejected() {
        let loader = sample_loader().with_module(
            Module::new("TYPES").with_node(
                Node::new("typesCount", NodeKind::SCALAR, [1, 3, 6, 1, 4, 1, 3, 1])
                    .with_type(Type::new("Integer32", BaseType::Integer32)),
            ),
        );
        let mut generator = Generator::new(loader);
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator.run(&["ALPHA-MIB", "TYPES"], &mut sink).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidIdentifier { ref name, .. } if name == "TYPES"));
        assert_eq!(sink.units(), 1);
    }

    #[test]
    fn test_repeated_module_rejected() {
        let mut generator = Generator::new(sample_loader());
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator
            .run(&["BETA-MIB", "ALPHA-MIB", "BETA-MIB"], &mut sink)
            .unwrap_err();
        assert!(matches!(
            err,
            CodegenError::DuplicateIdentifier { ref ident, .. } if ident == "beta_mib"
        ));
        assert_eq!(sink.units(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches("pub mod beta_mib").count(), 1);
        assert!(!text.contains("pub mod types"));
    }

    #[test]
    fn test_colliding_type_names_rejected() {
        let loader = ModuleSet::new().with_module(
            Module::new("GAMMA-MIB")
                .with_node(
                    Node::new("gammaLower", NodeKind::SCALAR, [1, 3, 6, 1, 4, 1, 4, 1])
                        .with_type(Type::new("counter", BaseType::Unsigned32)),
                )
                .with_node(
                    Node::new("gammaUpper", NodeKind::SCALAR, [1, 3, 6, 1, 4, 1, 4, 2])
                        .with_type(Type::new("Counter", BaseType::Unsigned32)),
                ),
        );
        let mut generator = Generator::new(loader);
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator.run(&["GAMMA-MIB"], &mut sink).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::DuplicateIdentifier { ref ident, .. } if ident == "CounterType"
        ));
        assert_eq!(sink.units(), 0);
    }

    #[derive(Debug, Clone, Copy)]
    struct Rejecting;

    impl SourceFormatter for Rejecting {
        type Error = std::io::Error;

        fn format(&self, _: &str) -> Result<String, std::io::Error> {
            Err(std::io::Error::other("rejected"))
        }
    }

    #[test]
    fn test_format_failure() {
        let mut generator = Generator::new(sample_loader()).with_formatter(Rejecting);
        let mut sink = StreamSink::new(Vec::new(), "<memory>");

        let err = generator.run(&["BETA-MIB"], &mut sink).unwrap_err();
        assert!(matches!(err, CodegenError::Format { ref unit, .. } if unit == "beta_mib"));
        assert_eq!(sink.units(), 0);
    }

    #[test]
    fn test_empty_types_unit() {
        let mut generator = Generator::new(sample_loader());
        let (text, summary) = run_to_string(&mut generator, &["BETA-MIB"]).expect("Failed to run");

        assert_eq!(summary.shared_types, 0);
        assert!(text.contains("pub mod types {"));
        assert!(!text.contains("Type = Type"));
    }
}
