//! Recursive-descent parser
//!
//! Statement and function arity alone delimit units: there are no blocks,
//! terminators, or reserved punctuation. The parser consults the fuzzy
//! resolvers only for structural decisions (which statement, which function,
//! hence how many expressions to read); the meaning of an unmatched leaf is
//! deferred to execution time.

use crate::ast::{Expr, Program, Statement, StatementKind};
use crate::error::{LangError, Result};
use crate::fuzzy;
use crate::lexer::{self, Token};
use crate::lexicon::Lexicon;

/// Stack growth parameters for deeply nested expressions
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

/// The token stream ran out mid-statement
struct EndOfTokens;

struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }
}

/// Parse source text into a program.
///
/// Every token in statement position resolves to some statement by numeral
/// closeness; that can only fail when the lexicon declares no statement
/// aliases at all, which aborts parsing. A statement cut short by the end
/// of the token stream is recorded as `exit`.
pub fn parse(source: &str, lexicon: &Lexicon) -> Result<Program> {
    let tokens = lexer::tokenize(source);
    let mut cursor = Cursor {
        tokens: &tokens,
        index: 0,
    };
    let mut statements = Vec::new();

    while let Some(token) = cursor.next() {
        let line = statements.len();
        let Some(kind) = fuzzy::match_statement(lexicon, &token.text) else {
            return Err(LangError::parse(
                format!(
                    "token {:?} resolves to no statement: the lexicon declares no statement aliases",
                    token.text
                ),
                token.span,
            ));
        };

        match parse_args(lexicon, &mut cursor, kind.arity()) {
            Ok(args) => {
                let span = args
                    .iter()
                    .fold(token.span, |span, arg| span.merge(arg.span()));
                statements.push(Statement { kind, args, line, span });
            }
            Err(EndOfTokens) => {
                // Not enough tokens left to finish the statement: the
                // program ends in an exit instead
                statements.push(Statement {
                    kind: StatementKind::Exit,
                    args: Vec::new(),
                    line,
                    span: token.span,
                });
                break;
            }
        }
    }

    Ok(Program { statements })
}

fn parse_args(
    lexicon: &Lexicon,
    cursor: &mut Cursor<'_>,
    arity: usize,
) -> std::result::Result<Vec<Expr>, EndOfTokens> {
    let mut args = Vec::with_capacity(arity);
    for _ in 0..arity {
        args.push(parse_expr(lexicon, cursor)?);
    }
    Ok(args)
}

fn parse_expr(
    lexicon: &Lexicon,
    cursor: &mut Cursor<'_>,
) -> std::result::Result<Expr, EndOfTokens> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
        parse_expr_inner(lexicon, cursor)
    })
}

fn parse_expr_inner(
    lexicon: &Lexicon,
    cursor: &mut Cursor<'_>,
) -> std::result::Result<Expr, EndOfTokens> {
    let token = cursor.next().ok_or(EndOfTokens)?;

    match fuzzy::match_function(lexicon, &token.text) {
        Some(kind) => {
            let args = parse_args(lexicon, cursor, kind.arity())?;
            let span = args
                .iter()
                .fold(token.span, |span, arg| span.merge(arg.span()));
            Ok(Expr::Call {
                kind,
                args,
                span,
            })
        }
        None => Ok(Expr::Word {
            text: token.text.clone(),
            span: token.span,
        }),
    }
}
