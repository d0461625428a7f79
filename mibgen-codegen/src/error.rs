//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Module could not be loaded.
    #[error("loading module {module}: {source}")]
    Load {
        /// Requested module.
        module: String,
        /// Underlying error.
        #[source]
        source: mibgen_schema::LoadError,
    },

    /// Module or node could not be resolved after loading.
    #[error("resolving in module {module}: {source}")]
    Lookup {
        /// Module being processed.
        module: String,
        /// Underlying error.
        #[source]
        source: mibgen_schema::LookupError,
    },

    /// Generated text is not valid Rust.
    #[error("formatting {unit}: {source}")]
    Format {
        /// Output unit being formatted.
        unit: String,
        /// Formatter error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output could not be created or written.
    #[error("writing {}: {source}", path.display())]
    Destination {
        /// Destination path (or stream label).
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Name that does not make a valid identifier.
    #[error("invalid identifier for {context}: {name:?}")]
    InvalidIdentifier {
        /// What the identifier was derived for.
        context: String,
        /// Offending name.
        name: String,
    },

    /// Two distinct names derive the same identifier.
    #[error("{context} {first:?} and {second:?} both map to `{ident}`")]
    DuplicateIdentifier {
        /// What the identifier was derived for.
        context: String,
        /// Derived identifier.
        ident: String,
        /// Name that claimed the identifier first.
        first: String,
        /// Colliding name.
        second: String,
    },

    /// Node kind sets more than one emitted kind bit.
    #[error("node '{node}' has ambiguous kind {kind}")]
    AmbiguousKind {
        /// Node name.
        node: String,
        /// Kind bitmask, as text.
        kind: String,
    },

    /// Scalar or column without a type.
    #[error("node '{node}' has no type")]
    MissingType {
        /// Node name.
        node: String,
    },

    /// Table without a row.
    #[error("table '{node}' has no row")]
    MissingRow {
        /// Node name.
        node: String,
    },

    /// Reference to a node that cannot be used in that position.
    #[error("node '{node}' references '{target}': {reason}")]
    InvalidReference {
        /// Referencing node.
        node: String,
        /// Referenced node.
        target: String,
        /// Why the reference is rejected.
        reason: String,
    },

    /// Invalid generator configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(context: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            context: context.into(),
            name: name.into(),
        }
    }

    /// Creates a duplicate identifier error.
    pub fn duplicate_identifier(
        context: impl Into<String>,
        ident: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateIdentifier {
            context: context.into(),
            ident: ident.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a destination error.
    pub fn destination(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Destination {
            path: path.into(),
            source,
        }
    }
}
