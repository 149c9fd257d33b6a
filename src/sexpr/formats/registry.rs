//! Format registry for value serialization
//!
//! Each format implements [`Formatter`] and is looked up by name.

use std::collections::HashMap;
use thiserror::Error;

use crate::sexpr::ast::Value;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for value formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    fn serialize(&self, value: &Value) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// The canonical `( a ( b c ) )` rendering
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn name(&self) -> &str {
        "canonical"
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        Ok(value.to_string())
    }

    fn description(&self) -> &str {
        "Space separated text that reparses to an equal tree"
    }
}

/// Pretty-printed JSON: words as strings, s-expressions as arrays
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        serde_json::to_string_pretty(value)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Nested JSON arrays of strings"
    }
}

/// Registry of value formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Serialize a value using the named format
    pub fn serialize(&self, value: &Value, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(value)
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CanonicalFormatter);
        registry.register(JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
