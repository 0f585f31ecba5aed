//! Abstract Syntax Tree definitions

mod expr;
mod span;

pub use expr::*;
pub use span::*;

use serde::{Deserialize, Serialize};

/// A program is a flat, ordered sequence of statements.
///
/// Immutable once parsed; one program may back any number of sequential runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// One statement with its fixed-arity argument expressions.
///
/// `line` is the statement's 0-based position in the program, the unit
/// addressed by `go` and `return`. It is independent of physical source
/// line breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub args: Vec<Expr>,
    pub line: usize,
    pub span: Span,
}

/// The closed set of statement kinds a lexicon can alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Assign,
    Calculate,
    Exit,
    Go,
    If,
    Print,
    Return,
}

impl StatementKind {
    /// Number of expressions the statement consumes
    pub fn arity(self) -> usize {
        match self {
            Self::Exit | Self::Return => 0,
            Self::Calculate | Self::Go | Self::If | Self::Print => 1,
            Self::Assign => 2,
        }
    }

    /// Look up a kind by its lexicon label
    pub fn from_label(label: &str) -> Option<Self> {
        Some(match label {
            "assign" => Self::Assign,
            "calculate" => Self::Calculate,
            "exit" => Self::Exit,
            "go" => Self::Go,
            "if" => Self::If,
            "print" => Self::Print,
            "return" => Self::Return,
            _ => return None,
        })
    }
}
