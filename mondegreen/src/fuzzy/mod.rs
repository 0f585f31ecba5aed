//! The two fuzzy dispatch algorithms
//!
//! Statements are dispatched by numeric closeness: every token encodes to a
//! numeral, and the nearest statement alias wins. Functions and variables
//! are dispatched by character edit distance over reduced forms, where
//! ambiguity is a rejection rather than a pick of the best candidate.

use crate::ast::{FunctionKind, StatementKind};
use crate::lexicon::Lexicon;
use crate::numeral;
use num_traits::Signed;

/// A token's characters restricted to the digit/decimal/sign alphabets,
/// order preserved
pub fn reduce(lexicon: &Lexicon, token: &str) -> String {
    token.chars().filter(|&ch| lexicon.is_relevant(ch)).collect()
}

/// Hamming distance between two strings; defined only for equal lengths
pub fn hamming(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Resolve a token to a statement kind by numeral closeness.
///
/// Among equally close aliases the earliest declared wins, so dispatch is
/// deterministic for a given lexicon. Returns `None` only when the lexicon
/// declares no statement aliases at all.
pub fn match_statement(lexicon: &Lexicon, token: &str) -> Option<StatementKind> {
    let value = numeral::encode(lexicon, token);
    let mut best: Option<(numeral::Numeral, StatementKind)> = None;

    for (alias, kind) in lexicon.statements() {
        let distance = (&value - numeral::encode(lexicon, alias)).abs();
        match &best {
            Some((closest, _)) if *closest <= distance => {}
            _ => best = Some((distance, *kind)),
        }
    }

    best.map(|(_, kind)| kind)
}

/// Resolve a token against a candidate alias set by reduced-form edit
/// distance.
///
/// A candidate qualifies when its reduced form has the same length as the
/// token's and differs in at most one position. Exactly one qualifying
/// candidate is a match; zero or several (even at distance zero) is a
/// rejection.
pub fn match_within_one<'a, T>(
    lexicon: &Lexicon,
    token: &str,
    candidates: impl IntoIterator<Item = (&'a str, T)>,
) -> Option<T> {
    let reduced = reduce(lexicon, token);
    let mut hit = None;
    let mut hits = 0usize;

    for (alias, owner) in candidates {
        let alias_reduced = reduce(lexicon, alias);
        if let Some(distance) = hamming(&reduced, &alias_reduced) {
            if distance <= 1 {
                hits += 1;
                hit = Some(owner);
            }
        }
    }

    if hits == 1 { hit } else { None }
}

/// Resolve a token to a function kind, or `None` for a deferred leaf
pub fn match_function(lexicon: &Lexicon, token: &str) -> Option<FunctionKind> {
    match_within_one(
        lexicon,
        token,
        lexicon.functions().iter().map(|(alias, kind)| (alias.as_str(), *kind)),
    )
}
