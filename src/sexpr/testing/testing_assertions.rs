//! Fluent assertions over values

use crate::sexpr::ast::{Sexpr, Value};

/// Start asserting on a value
pub fn assert_value(value: &Value) -> ValueAssertion<'_> {
    ValueAssertion {
        value,
        context: "value".to_string(),
    }
}

pub struct ValueAssertion<'a> {
    pub(crate) value: &'a Value,
    pub(crate) context: String,
}

impl<'a> ValueAssertion<'a> {
    /// The value is a word with exactly this text
    pub fn word(self, expected: &str) -> Self {
        match self.value {
            Value::Word(word) => assert_eq!(
                word.as_str(),
                expected,
                "{}: Expected word {:?}, found word {:?}",
                self.context,
                expected,
                word.as_str()
            ),
            Value::Sexpr(sexpr) => panic!(
                "{}: Expected word {:?}, found sexpr {}",
                self.context, expected, sexpr
            ),
        }
        self
    }

    pub fn assert_sexpr(self) -> SexprAssertion<'a> {
        match self.value {
            Value::Sexpr(sexpr) => SexprAssertion {
                sexpr,
                context: self.context,
            },
            Value::Word(word) => panic!(
                "{}: Expected sexpr, found word {:?}",
                self.context,
                word.as_str()
            ),
        }
    }

    /// The canonical rendering equals `expected`
    pub fn canonical(self, expected: &str) -> Self {
        let actual = self.value.to_string();
        assert_eq!(
            actual, expected,
            "{}: Expected canonical form '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        let actual = self.value.depth();
        assert_eq!(
            actual, expected,
            "{}: Expected depth {}, found {}",
            self.context, expected, actual
        );
        self
    }
}

pub struct SexprAssertion<'a> {
    pub(crate) sexpr: &'a Sexpr,
    pub(crate) context: String,
}

impl<'a> SexprAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.sexpr.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {} children: {}",
            self.context, expected, actual, self.sexpr
        );
        self
    }

    pub fn empty(self) -> Self {
        self.child_count(0)
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ValueAssertion<'a>),
    {
        let child = self.sexpr.nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (sexpr has {} children)",
                self.context,
                index,
                self.sexpr.len()
            )
        });
        assertion(ValueAssertion {
            value: child,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Shorthand for a child that is a word
    pub fn word_at(self, index: usize, expected: &str) -> Self {
        self.child(index, |child| {
            child.word(expected);
        })
    }

    /// The children's words, in order; fails on any nested s-expression
    pub fn words(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self
            .sexpr
            .iter()
            .map(|child| child.visit(|w| w.as_str().to_string(), |s| s.to_string()))
            .collect();
        assert!(
            self.sexpr.iter().all(Value::is_word) && actual == expected,
            "{}: Expected words {:?}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }
}
