//! Testing utilities for values and token streams
//!
//! Two tools, meant to be used together in parser tests:
//!
//! 1. **[factories]** build expected trees and tokens tersely.
//! 2. **[assert_value]** checks a parsed tree with a fluent API, so a test
//!    states the shape it expects instead of matching variants by hand.
//!
//! ```rust-example
//! use sexpr::sexpr::testing::assert_value;
//!
//! let value = parse_sexpr("(add (multiply 3 4) 5)").unwrap();
//! assert_value(&value)
//!     .assert_sexpr()
//!     .child_count(3)
//!     .word_at(0, "add")
//!     .child(1, |child| {
//!         child.assert_sexpr().child_count(3).word_at(0, "multiply");
//!     })
//!     .word_at(2, "5");
//! ```
//!
//! Failure messages carry the path to the offending node, for example
//! `value[1][0]: Expected word "multiply", found word "times"`.

mod testing_assertions;
mod testing_factories;

pub use testing_assertions::{assert_value, SexprAssertion, ValueAssertion};
pub use testing_factories::{sexpr, token, word};

// Public submodule path: crate::sexpr::testing::factories
pub mod factories {
    pub use super::testing_factories::*;
}
