//! Main module for sexpr library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod list;
pub mod parsing;
pub mod processor;
pub mod testing;
