//! Treeviz formatter for values
//!
//! One line per node, nesting drawn with box characters:
//!
//! ```text
//! sexpr: ( add ( multiply 3 4 ) 5 )
//! ├─ word: add
//! ├─ sexpr: ( multiply 3 4 )
//! │ ├─ word: multiply
//! │ ├─ word: 3
//! │ └─ word: 4
//! └─ word: 5
//! ```
//!
//! Labels are truncated to 30 characters.

use super::registry::{FormatError, Formatter};
use crate::sexpr::ast::Value;

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(value: &Value) -> String {
    let mut result = String::new();
    push_line(&mut result, "", value);
    append_children(&mut result, value, "");
    result
}

fn push_line(result: &mut String, lead: &str, value: &Value) {
    let label = truncate(&value.to_string(), LABEL_WIDTH);
    result.push_str(&format!("{}{}: {}\n", lead, value.kind(), label));
}

fn append_children(result: &mut String, value: &Value, prefix: &str) {
    let Value::Sexpr(sexpr) = value else {
        return;
    };
    let count = sexpr.len();
    for (i, child) in sexpr.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└─ " } else { "├─ " };
        push_line(result, &format!("{}{}", prefix, connector), child);

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, child, &new_prefix);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        Ok(to_treeviz_str(value))
    }

    fn description(&self) -> &str {
        "One line per node, nesting drawn as a tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexpr::testing::{sexpr, word};

    #[test]
    fn test_treeviz_nested() {
        let value = sexpr(vec![
            word("add"),
            sexpr(vec![word("multiply"), word("3"), word("4")]),
            word("5"),
        ]);
        insta::assert_snapshot!(to_treeviz_str(&value), @r"
        sexpr: ( add ( multiply 3 4 ) 5 )
        ├─ word: add
        ├─ sexpr: ( multiply 3 4 )
        │ ├─ word: multiply
        │ ├─ word: 3
        │ └─ word: 4
        └─ word: 5
        ");
    }

    #[test]
    fn test_treeviz_word_and_empty() {
        assert_eq!(to_treeviz_str(&word("hello")), "word: hello\n");
        assert_eq!(to_treeviz_str(&sexpr(vec![])), "sexpr: (  )\n");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let value = sexpr(vec![word("abcdefghijklmnopqrstuvwxyz0123456789")]);
        let first = to_treeviz_str(&value).lines().next().unwrap().to_string();
        assert_eq!(first, "sexpr: ( abcdefghijklmnopqrstuvwxyz01...");
    }
}
