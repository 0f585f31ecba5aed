//! Whitespace tokenizer
//!
//! The language has no fixed lexical grammar: a token is any maximal run of
//! non-whitespace characters, and physical line breaks carry no structure.

use crate::ast::Span;

/// A source token, lowercased, with its original byte span
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

/// Split source into whitespace-delimited tokens.
///
/// Total: any text tokenizes, and an all-whitespace source yields no tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (index, ch) in source.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push(Token {
                    text: source[begin..index].to_lowercase(),
                    span: Span::new(begin, index),
                });
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: source[begin..].to_lowercase(),
            span: Span::new(begin, source.len()),
        });
    }

    tokens
}
