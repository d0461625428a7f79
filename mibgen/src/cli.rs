//! Command-line interface.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mibgen_codegen::config::{DEFAULT_MODELS_CRATE, DEFAULT_UNIT_NAME};
use mibgen_codegen::{Destination, GeneratorConfig};
use mibgen_schema::FileLoader;
use std::path::PathBuf;

/// Generates statically typed Rust bindings from MIB modules.
#[derive(Parser, Debug)]
#[command(name = "mibgen", version, about = "Generates Rust bindings from MIBs")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generates Rust files from MIBs.
    Generate(GenerateArgs),
}

/// Arguments of `mibgen generate`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Modules to generate, by name or file path.
    #[arg(required = true, value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Output directory.
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Output filename, use - for stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Name of the generated unit.
    #[arg(short = 'p', long = "package", default_value = DEFAULT_UNIT_NAME)]
    pub package: String,

    /// Additional module search paths.
    #[arg(short = 'M', long = "path", value_delimiter = ',')]
    pub paths: Vec<PathBuf>,

    /// Crate path the generated code imports its models from.
    #[arg(long = "models-crate", default_value = DEFAULT_MODELS_CRATE)]
    pub models_crate: String,
}

impl GenerateArgs {
    /// Returns where output goes.
    #[must_use]
    pub fn destination(&self) -> Destination {
        Destination::from_args(&self.dir, self.output.as_deref())
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_unit_name(&self.package)
            .with_models_crate(&self.models_crate)
    }

    /// Returns a loader searching `MIBGEN_PATH` followed by the `--path` entries.
    #[must_use]
    pub fn loader(&self) -> FileLoader {
        let mut loader = FileLoader::from_env();
        for path in &self.paths {
            loader.append_path(path);
        }
        loader
    }
}

/// Runs a parsed command line.
///
/// # Errors
/// Returns an error if generation fails.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&args),
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let destination = args.destination();
    tracing::debug!("Generating {} modules into {}", args.modules.len(), destination);

    mibgen_codegen::generate(args.loader(), &args.modules, &destination, args.config())
        .with_context(|| format!("generating bindings into {destination}"))?;
    Ok(())
}
