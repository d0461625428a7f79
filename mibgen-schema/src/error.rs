//! Error types for schema loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for module loading operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Module not found on the search path.
    #[error("module '{name}' not found (searched {} location(s))", searched.len())]
    NotFound {
        /// Requested module name or path.
        name: String,
        /// Candidate files that were tried.
        searched: Vec<PathBuf>,
    },

    /// IO error while reading a module file.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed module file.
    #[error("invalid module file {}: {source}", path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Module content violates a structural invariant.
    #[error("invalid module '{module}': {message}")]
    Invalid {
        /// Module name.
        module: String,
        /// Error message.
        message: String,
    },
}

/// Error type for lookups against loaded modules.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Module has not been loaded.
    #[error("module '{name}' is not loaded")]
    ModuleNotLoaded {
        /// Module name.
        name: String,
    },

    /// Node not present in a loaded module.
    #[error("node '{name}' not found in module '{module}'")]
    NodeNotFound {
        /// Module name.
        module: String,
        /// Node name.
        name: String,
    },
}

impl LoadError {
    /// Creates an invalid module error.
    pub fn invalid(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            module: module.into(),
            message: message.into(),
        }
    }
}

impl LookupError {
    /// Creates a module-not-loaded error.
    pub fn module_not_loaded(name: impl Into<String>) -> Self {
        Self::ModuleNotLoaded { name: name.into() }
    }

    /// Creates a node-not-found error.
    pub fn node_not_found(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NodeNotFound {
            module: module.into(),
            name: name.into(),
        }
    }
}
