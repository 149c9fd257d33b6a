//! Loading pattern tables from YAML or JSON
//!
//! A table document is an ordered list of entries. The FAIL entry is the one
//! whose pattern is empty (or omitted):
//!
//! ```yaml
//! patterns:
//!   - name: OPENCURLY
//!     pattern: '\{'
//!   - name: CLOSECURLY
//!     pattern: '\}'
//!   - name: WORD
//!     pattern: '\w+'
//!   - name: FAIL
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::pattern_table::{NamedKind, PatternError, PatternTable};

/// Serialized form of a pattern table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTableSpec {
    pub patterns: Vec<PatternSpec>,
}

/// Serialized form of one pattern table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    #[serde(default)]
    pub pattern: String,
}

/// Errors from [`load_table`]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read pattern table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl PatternTable<NamedKind> {
    pub fn from_spec(spec: &PatternTableSpec) -> Result<Self, PatternError> {
        PatternTable::new(
            spec.patterns
                .iter()
                .map(|entry| (NamedKind::new(&entry.name), entry.pattern.as_str())),
        )
    }

    pub fn from_yaml(source: &str) -> Result<Self, PatternError> {
        let spec: PatternTableSpec = serde_yaml::from_str(source)?;
        Self::from_spec(&spec)
    }

    pub fn from_json(source: &str) -> Result<Self, PatternError> {
        let spec: PatternTableSpec = serde_json::from_str(source)?;
        Self::from_spec(&spec)
    }
}

/// Load a table file, choosing JSON for a `.json` extension and YAML otherwise.
pub fn load_table(path: &Path) -> Result<PatternTable<NamedKind>, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let table = if is_json {
        PatternTable::from_json(&source)?
    } else {
        PatternTable::from_yaml(&source)?
    };
    tracing::debug!(path = %path.display(), entries = table.len(), "loaded pattern table");
    Ok(table)
}
