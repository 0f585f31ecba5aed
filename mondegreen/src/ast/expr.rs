//! Expression trees and function kinds

use super::Span;
use serde::{Deserialize, Serialize};

/// The closed set of function kinds a lexicon can alias.
///
/// Constants (`True`, `False`, `Period`, `Space`) are zero-arity functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    Add,
    And,
    Concatenate,
    Divide,
    Equal,
    False,
    Greater,
    Input,
    Left,
    Less,
    Modulus,
    Multiply,
    Not,
    Or,
    Period,
    Power,
    Right,
    Space,
    Subtract,
    True,
}

impl FunctionKind {
    /// Number of expressions the function consumes
    pub fn arity(self) -> usize {
        match self {
            Self::False | Self::Period | Self::Space | Self::True => 0,
            Self::Input | Self::Not => 1,
            Self::Add
            | Self::And
            | Self::Concatenate
            | Self::Divide
            | Self::Equal
            | Self::Greater
            | Self::Left
            | Self::Less
            | Self::Modulus
            | Self::Multiply
            | Self::Or
            | Self::Power
            | Self::Right
            | Self::Subtract => 2,
        }
    }

    /// Look up a kind by its lexicon label
    pub fn from_label(label: &str) -> Option<Self> {
        Some(match label {
            "add" => Self::Add,
            "and" => Self::And,
            "concatenate" => Self::Concatenate,
            "divide" => Self::Divide,
            "equal" => Self::Equal,
            "false" => Self::False,
            "greater" => Self::Greater,
            "input" => Self::Input,
            "left" => Self::Left,
            "less" => Self::Less,
            "modulus" => Self::Modulus,
            "multiply" => Self::Multiply,
            "not" => Self::Not,
            "or" => Self::Or,
            "period" => Self::Period,
            "power" => Self::Power,
            "right" => Self::Right,
            "space" => Self::Space,
            "subtract" => Self::Subtract,
            "true" => Self::True,
            _ => return None,
        })
    }
}

/// A parsed expression: either a resolved function call or a deferred leaf.
///
/// A leaf's meaning (variable vs. literal) is decided at evaluation time
/// against the live variable set, never at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Call {
        kind: FunctionKind,
        args: Vec<Expr>,
        span: Span,
    },
    Word {
        text: String,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Call { span, .. } | Expr::Word { span, .. } => *span,
        }
    }
}
