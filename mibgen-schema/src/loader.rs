//! Schema loaders.
//!
//! The code generator consumes loaded modules only through the
//! [`SchemaLoader`] trait. Two implementations are provided: [`ModuleSet`],
//! an in-memory collection of already-built modules, and [`FileLoader`],
//! which reads pre-parsed module graphs stored as JSON from a search path.

use crate::error::{LoadError, LookupError};
use crate::module::Module;
use crate::node::Node;
use crate::validation::validate_module;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding additional search paths.
pub const PATH_ENV: &str = "MIBGEN_PATH";

/// File extension of module files.
pub const MODULE_EXTENSION: &str = "json";

/// Read-only introspection interface over loaded modules.
pub trait SchemaLoader {
    /// Loads a module by name (or path) and returns its canonical name.
    ///
    /// # Errors
    /// Returns `LoadError` if the module cannot be found or parsed.
    fn load_module(&mut self, name: &str) -> Result<String, LoadError>;

    /// Returns a previously loaded module.
    ///
    /// # Errors
    /// Returns `LookupError` if no module with that name is loaded.
    fn get_module(&self, name: &str) -> Result<&Module, LookupError>;

    /// Resolves a node of a loaded module.
    ///
    /// # Errors
    /// Returns `LookupError` if the module is not loaded or has no such node.
    fn get_node(&self, module: &str, name: &str) -> Result<&Node, LookupError> {
        self.get_module(module)?
            .node(name)
            .ok_or_else(|| LookupError::node_not_found(module, name))
    }
}

/// In-memory set of modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet {
    modules: HashMap<String, Module>,
}

impl ModuleSet {
    /// Creates an empty module set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module, replacing any module of the same name.
    pub fn insert(&mut self, mut module: Module) {
        module.build_node_map();
        self.modules.insert(module.name.clone(), module);
    }

    /// Adds a module and returns the set.
    #[must_use]
    pub fn with_module(mut self, module: Module) -> Self {
        self.insert(module);
        self
    }

    /// Returns true if a module with that name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Returns the number of modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if the set holds no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl SchemaLoader for ModuleSet {
    fn load_module(&mut self, name: &str) -> Result<String, LoadError> {
        if self.contains(name) {
            Ok(name.to_string())
        } else {
            Err(LoadError::NotFound {
                name: name.to_string(),
                searched: Vec::new(),
            })
        }
    }

    fn get_module(&self, name: &str) -> Result<&Module, LookupError> {
        self.modules
            .get(name)
            .ok_or_else(|| LookupError::module_not_loaded(name))
    }
}

/// Loader reading JSON module files from a search path.
///
/// A module name is resolved, in order, as a direct file path, then as
/// `<dir>/<name>.json` and `<dir>/<name>` for each search directory. The
/// modules a loaded module imports are loaded too; an import that cannot be
/// found is skipped with a warning, so only the references that actually
/// need it fail later.
#[derive(Debug, Default)]
pub struct FileLoader {
    paths: Vec<PathBuf>,
    modules: ModuleSet,
    aliases: HashMap<String, String>,
}

impl FileLoader {
    /// Creates a loader with an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader seeded from the `MIBGEN_PATH` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut loader = Self::new();
        if let Some(value) = std::env::var_os(PATH_ENV) {
            for path in std::env::split_paths(&value) {
                loader.append_path(path);
            }
        }
        loader
    }

    /// Appends a directory to the search path.
    pub fn append_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!("Appending search path {}", path.display());
        self.paths.push(path);
    }

    /// Returns the search path.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Finds the file for a module name.
    fn locate(&self, name: &str) -> Result<PathBuf, LoadError> {
        let mut searched = Vec::new();

        let direct = Path::new(name);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
        searched.push(direct.to_path_buf());

        for dir in &self.paths {
            let candidates = [
                dir.join(format!("{name}.{MODULE_EXTENSION}")),
                dir.join(name),
            ];
            for candidate in candidates {
                if candidate.is_file() {
                    return Ok(candidate);
                }
                searched.push(candidate);
            }
        }

        Err(LoadError::NotFound {
            name: name.to_string(),
            searched,
        })
    }

    /// Reads and validates one module file.
    fn read_module(path: &Path) -> Result<Module, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut module: Module =
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        module.build_node_map();
        validate_module(&module)?;
        Ok(module)
    }

    /// Loads the imports of a freshly loaded module.
    fn load_imports(&mut self, module: &str, imports: Vec<String>) -> Result<(), LoadError> {
        for import in imports {
            if self.modules.contains(&import) {
                continue;
            }
            match self.load_module(&import) {
                Ok(_) => {}
                Err(LoadError::NotFound { .. }) => {
                    tracing::warn!("Skipping import {} of {}: not found", import, module);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl SchemaLoader for FileLoader {
    fn load_module(&mut self, name: &str) -> Result<String, LoadError> {
        if let Some(canonical) = self.aliases.get(name) {
            return Ok(canonical.clone());
        }
        if self.modules.contains(name) {
            return Ok(name.to_string());
        }

        let path = self.locate(name)?;
        let module = Self::read_module(&path)?;
        let canonical = module.name.clone();
        self.aliases.insert(name.to_string(), canonical.clone());

        if self.modules.contains(&canonical) {
            return Ok(canonical);
        }

        tracing::debug!("Loaded module {} from {}", canonical, path.display());
        let imports = module.imports.clone();
        self.modules.insert(module);
        self.load_imports(&canonical, imports)?;

        Ok(canonical)
    }

    fn get_module(&self, name: &str) -> Result<&Module, LookupError> {
        self.modules.get_module(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, NodeRef};
    use std::fs;

    fn write_module(dir: &Path, file: &str, module: &Module) {
        let json = serde_json::to_string_pretty(module).expect("Failed to serialize");
        fs::write(dir.join(file), json).expect("Failed to write module");
    }

    fn if_mib() -> Module {
        Module::new("IF-MIB")
            .with_import("SNMPv2-SMI")
            .with_node(Node::new("ifNumber", NodeKind::SCALAR, [1, 3, 6, 1, 2, 1, 2, 1]))
            .with_node(Node::new("ifIndex", NodeKind::COLUMN, [1, 3, 6, 1, 2, 1, 2, 2, 1, 1]))
    }

    #[test]
    fn test_module_set_load_and_lookup() {
        let mut set = ModuleSet::new().with_module(if_mib());
        assert_eq!(set.len(), 1);
        assert_eq!(set.load_module("IF-MIB").expect("load failed"), "IF-MIB");

        let node = set.get_node("IF-MIB", "ifIndex").expect("node missing");
        assert_eq!(node.kind, NodeKind::COLUMN);

        assert!(matches!(
            set.load_module("IP-MIB"),
            Err(LoadError::NotFound { .. })
        ));
        assert!(matches!(
            set.get_module("IP-MIB"),
            Err(LookupError::ModuleNotLoaded { .. })
        ));
        assert!(matches!(
            set.get_node("IF-MIB", "ifSpeed"),
            Err(LookupError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_file_loader_search_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_module(dir.path(), "IF-MIB.json", &if_mib());

        let mut loader = FileLoader::new();
        loader.append_path(dir.path());
        let name = loader.load_module("IF-MIB").expect("load failed");
        assert_eq!(name, "IF-MIB");

        let module = loader.get_module("IF-MIB").expect("module missing");
        assert_eq!(module.nodes().len(), 2);
        assert!(module.node("ifNumber").is_some());
    }

    #[test]
    fn test_file_loader_direct_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_module(dir.path(), "interfaces.json", &if_mib());
        let path = dir.path().join("interfaces.json");
        let path = path.to_str().expect("non-UTF-8 temp path");

        let mut loader = FileLoader::new();
        assert_eq!(loader.load_module(path).expect("load failed"), "IF-MIB");
        // second load hits the alias cache
        assert_eq!(loader.load_module(path).expect("load failed"), "IF-MIB");
        assert_eq!(loader.load_module("IF-MIB").expect("load failed"), "IF-MIB");
    }

    #[test]
    fn test_file_loader_not_found() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut loader = FileLoader::new();
        loader.append_path(dir.path());

        match loader.load_module("NOPE-MIB") {
            Err(LoadError::NotFound { name, searched }) => {
                assert_eq!(name, "NOPE-MIB");
                assert_eq!(searched.len(), 3);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_file_loader_invalid_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("BROKEN-MIB.json"), "{ not json").expect("write failed");

        let mut loader = FileLoader::new();
        loader.append_path(dir.path());
        assert!(matches!(
            loader.load_module("BROKEN-MIB"),
            Err(LoadError::Json { .. })
        ));
    }

    #[test]
    fn test_file_loader_loads_imports() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_module(dir.path(), "IF-MIB.json", &if_mib());
        let ip_mib = Module::new("IP-MIB")
            .with_import("IF-MIB")
            .with_import("INET-ADDRESS-MIB")
            .with_node(
                Node::new("ipNetToMediaEntry", NodeKind::ROW, [1, 3, 6, 1, 2, 1, 4, 22, 1])
                    .with_index([NodeRef::qualified("IF-MIB", "ifIndex")]),
            );
        write_module(dir.path(), "IP-MIB.json", &ip_mib);

        let mut loader = FileLoader::new();
        loader.append_path(dir.path());
        loader.load_module("IP-MIB").expect("load failed");

        // IF-MIB came in as an import; the missing imports were skipped
        let node = loader.get_node("IF-MIB", "ifIndex").expect("import not loaded");
        assert_eq!(node.kind, NodeKind::COLUMN);
        assert!(loader.get_module("INET-ADDRESS-MIB").is_err());
        assert!(loader.get_module("SNMPv2-SMI").is_err());
    }

    #[test]
    fn test_file_loader_rejects_invalid_module() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let module = Module::new("DUP-MIB")
            .with_node(Node::new("a", NodeKind::SCALAR, [1]))
            .with_node(Node::new("a", NodeKind::SCALAR, [2]));
        write_module(dir.path(), "DUP-MIB.json", &module);

        let mut loader = FileLoader::new();
        loader.append_path(dir.path());
        assert!(matches!(
            loader.load_module("DUP-MIB"),
            Err(LoadError::Invalid { .. })
        ));
    }
}
