//! Abstract syntax tree
//!
//! A closed two-variant union: [`Value::Word`] for atoms and
//! [`Value::Sexpr`] for parenthesized lists. Matching on [`Value`] is
//! exhaustive, [`Value::visit`] offers the same dispatch as a pair of closures.
//!
//! Values compare and hash structurally. `Display` is the canonical rendering
//! (`( add ( multiply 3 4 ) 5 )`), serde maps words to strings and
//! s-expressions to arrays.

pub mod serialization;
pub mod value;

pub use value::{Sexpr, Value, ValueError, ValueKind, Word};
