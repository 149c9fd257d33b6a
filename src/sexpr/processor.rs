//! Processing API
//!
//! Runs source text through a stage (`token` or `ast`) and renders the result
//! in a format, both named by one `<stage>-<format>` string:
//!
//! | format string   | output                                   |
//! |-----------------|------------------------------------------|
//! | `token-simple`  | one `(KIND: "text")` token per line      |
//! | `token-json`    | JSON array of `{"kind","text"}` objects  |
//! | `ast-canonical` | `( add ( multiply 3 4 ) 5 )`             |
//! | `ast-json`      | `["add",["multiply","3","4"],"5"]`       |
//! | `ast-treeviz`   | one line per node, drawn as a tree       |
//!
//! ```rust,ignore
//! use sexpr::sexpr::processor::{process, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let output = process("(a b)", &spec, Parser::Descent, &ParseOptions::default())?;
//! ```

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::sexpr::formats::{tokens_to_json, tokens_to_simple, FormatError, FormatRegistry};
use crate::sexpr::lexing::scan;
use crate::sexpr::parsing::{ParseError, ParseOptions, Parser};

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Canonical,
    Treeviz,
}

/// A stage and a format that works with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "canonical" => OutputFormat::Canonical,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Canonical | OutputFormat::Treeviz) => {
                Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with the ast stage",
                    format.name()
                )))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => Err(
                ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with the token stage".to_string(),
                ),
            ),
            _ => Ok(ProcessingSpec { stage, format }),
        }
    }

    /// Every valid stage and format pair
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Canonical,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
        ]
    }

    /// The format string this spec parses from
    pub fn to_format_string(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        format!("{}-{}", stage, self.format.name())
    }
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Canonical => "canonical",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

/// Every valid format string with a one-line description of its output
///
/// Value formats are described by their registered [`Formatter`](crate::sexpr::formats::Formatter).
pub fn describe_formats() -> Vec<(String, String)> {
    let registry = FormatRegistry::with_defaults();
    ProcessingSpec::available_specs()
        .iter()
        .map(|spec| {
            let description = match (spec.stage, spec.format) {
                (ProcessingStage::Token, OutputFormat::Simple) => "One (KIND: \"text\") token per line",
                (ProcessingStage::Token, _) => "JSON array of kind and text objects",
                (ProcessingStage::Ast, format) => registry
                    .get(format.name())
                    .map(|formatter| formatter.description())
                    .unwrap_or_default(),
            };
            (spec.to_format_string(), description.to_string())
        })
        .collect()
}

/// Process source text with the given stage and format
pub fn process(
    source: &str,
    spec: &ProcessingSpec,
    parser: Parser,
    options: &ParseOptions,
) -> Result<String, ProcessingError> {
    let tokens = scan(source);
    match spec.stage {
        ProcessingStage::Token => match spec.format {
            OutputFormat::Simple => Ok(tokens_to_simple(&tokens)),
            OutputFormat::Json => Ok(tokens_to_json(&tokens)?),
            other => Err(ProcessingError::InvalidFormatType(other.name().to_string())),
        },
        ProcessingStage::Ast => {
            let value = parser.try_parse_tokens(&tokens, options)?;
            tracing::debug!(parser = %parser, depth = value.depth(), "parsed value");
            let registry = FormatRegistry::with_defaults();
            Ok(registry.serialize(&value, spec.format.name())?)
        }
    }
}

/// Read a file and process it, see [`process`]
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    parser: Parser,
    options: &ParseOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process(&content, spec, parser, options)
}
