//! Token stream formats

use crate::sexpr::lexing::{PatternKind, TokenStream};

/// One token per line, as `(KIND: "text")`
pub fn tokens_to_simple<K: PatternKind>(tokens: &TokenStream<'_, K>) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.to_string());
        result.push('\n');
    }
    result
}

/// Pretty-printed JSON array of `{"kind", "text"}` objects
pub fn tokens_to_json<K: PatternKind>(
    tokens: &TokenStream<'_, K>,
) -> Result<String, serde_json::Error> {
    let tokens: Vec<_> = tokens.iter().collect();
    serde_json::to_string_pretty(&tokens)
}
