//! Format registry for record serialization
//!
//! Each format implements the `Formatter` trait and can be registered with
//! `FormatRegistry`.

use crate::config::EmitConfig;
use crate::dsl::ast::ClassRecord;
use std::collections::HashMap;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for record formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "dsl", "gdscript")
    fn name(&self) -> &str;

    /// Serialize a record to this format
    fn serialize(&self, record: &ClassRecord) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of record formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a record using the specified format
    pub fn serialize(&self, record: &ClassRecord, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(record)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::configured(&EmitConfig::default())
    }

    /// Built-in formatters using the emit settings from configuration
    pub fn configured(emit: &EmitConfig) -> Self {
        let mut registry = Self::new();

        registry.register(super::DslFormatter::default());
        registry.register(super::GdscriptFormatter::new(emit.indent.clone()));
        registry.register(super::AutoloadFormatter::new(emit.indent.clone()));
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
