//! Output format implementations for values and token streams
//!
//! - Values: canonical text, JSON and treeviz, behind the [`FormatRegistry`]
//! - Token streams: one token per line, or JSON

pub mod registry;
pub mod tokens;
pub mod treeviz;

pub use registry::{CanonicalFormatter, FormatError, FormatRegistry, Formatter, JsonFormatter};
pub use tokens::{tokens_to_json, tokens_to_simple};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
