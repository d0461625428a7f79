//! Generator configuration.

use crate::error::CodegenError;

/// Default generated-unit name.
pub const DEFAULT_UNIT_NAME: &str = "mibs";

/// Default path of the runtime model crate imported by generated code.
pub const DEFAULT_MODELS_CRATE: &str = "mibgen_models";

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the generated unit, embedded in output headers.
    pub unit_name: String,
    /// Path of the crate whose `prelude` the generated code imports.
    pub models_crate: String,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            models_crate: DEFAULT_MODELS_CRATE.to_string(),
        }
    }

    /// Sets the generated-unit name.
    #[must_use]
    pub fn with_unit_name(mut self, name: impl Into<String>) -> Self {
        self.unit_name = name.into();
        self
    }

    /// Sets the models crate path.
    #[must_use]
    pub fn with_models_crate(mut self, path: impl Into<String>) -> Self {
        self.models_crate = path.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfig` if the unit name is empty or spans
    /// lines, or the models crate is not a Rust path.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.unit_name.trim().is_empty() {
            return Err(CodegenError::invalid_config("unit name is empty"));
        }
        if self.unit_name.chars().any(char::is_control) {
            return Err(CodegenError::invalid_config(format!(
                "unit name {:?} contains control characters",
                self.unit_name
            )));
        }
        if syn::parse_str::<syn::Path>(&self.models_crate).is_err() {
            return Err(CodegenError::invalid_config(format!(
                "models crate {:?} is not a path",
                self.models_crate
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
