//! Mondegreen Interpreter Library
//!
//! An interpreter for a language with no syntax errors: every token is a
//! number, dispatch is fuzzy, and the vocabulary comes from a swappable
//! lexicon rather than reserved keywords.

pub mod ast;
pub mod error;
pub mod fuzzy;
pub mod interp;
pub mod lexer;
pub mod lexicon;
pub mod numeral;
pub mod parser;

pub use ast::Span;
pub use error::{LangError, Result};
