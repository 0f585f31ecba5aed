//! Runtime errors for the execution engine

use crate::ast::Span;
use std::fmt;

/// Result type for execution
pub type InterpResult<T> = std::result::Result<T, RuntimeError>;

/// Runtime error during execution
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Division or modulus by a zero numeral value
    DivisionByZero,
    /// `go` target outside the program
    JumpOutOfRange,
    /// Arithmetic left the representable range
    NumericOverflow,
    /// Reading input or writing output failed
    Io,
}

impl RuntimeError {
    pub fn division_by_zero(operation: &str, span: Span) -> Self {
        RuntimeError {
            kind: ErrorKind::DivisionByZero,
            message: format!("{operation} by zero"),
            span,
        }
    }

    pub fn jump_out_of_range(target: impl fmt::Display, len: usize, span: Span) -> Self {
        RuntimeError {
            kind: ErrorKind::JumpOutOfRange,
            message: format!("jump target {target} is outside the program (0..{len})"),
            span,
        }
    }

    pub fn overflow(operation: &str, span: Span) -> Self {
        RuntimeError {
            kind: ErrorKind::NumericOverflow,
            message: format!("{operation} left the representable range"),
            span,
        }
    }

    pub fn io(error: std::io::Error, span: Span) -> Self {
        RuntimeError {
            kind: ErrorKind::Io,
            message: error.to_string(),
            span,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.span)
    }
}

impl std::error::Error for RuntimeError {}
