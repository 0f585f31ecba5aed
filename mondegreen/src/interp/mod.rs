//! Program execution

mod env;
mod error;
mod eval;
mod value;

pub use env::Environment;
pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use eval::Interpreter;
pub use value::Value;
