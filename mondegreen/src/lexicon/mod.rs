//! Lexicon: the data that makes text executable
//!
//! A lexicon holds three ordered character alphabets (digits, decimals,
//! signs) and, per statement/function kind, a list of alias strings. All
//! dispatch in the language is driven by this data; there are no reserved
//! keywords.

use crate::ast::{FunctionKind, StatementKind};
use crate::error::{LangError, Result};

/// The built-in English lexicon (18 consonant digits, base 18)
const ENGLISH_LEX: &str = include_str!("../../lexicons/english.lex");

/// An immutable, validated lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    digits: Vec<char>,
    decimals: Vec<char>,
    signs: Vec<char>,
    /// Statement aliases in declaration order (the order breaks dispatch ties)
    statements: Vec<(String, StatementKind)>,
    /// Function aliases in declaration order
    functions: Vec<(String, FunctionKind)>,
}

impl Lexicon {
    /// Parse a lexicon from its source format.
    ///
    /// One entry per line, `label: value`. Blank lines and lines starting
    /// with `(` are comments. `digits`, `decimals` and `signs` give ordered
    /// character alphabets; any other label names a statement or function
    /// kind with a comma-separated alias list. A kind with no alias list is
    /// legal and simply unreachable by dispatch.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lexicon = Lexicon {
            digits: Vec::new(),
            decimals: Vec::new(),
            signs: Vec::new(),
            statements: Vec::new(),
            functions: Vec::new(),
        };

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('(') {
                continue;
            }
            let lowered = line.to_lowercase();
            let Some((label, value)) = lowered.split_once(':') else {
                return Err(LangError::lexicon(format!(
                    "malformed lexicon line (no ':'): {line:?}"
                )));
            };
            let label = label.trim();
            match label {
                "digits" => lexicon.digits = value.trim().chars().collect(),
                "decimals" => lexicon.decimals = value.trim().chars().collect(),
                "signs" => lexicon.signs = value.trim().chars().collect(),
                _ => {
                    if let Some(kind) = StatementKind::from_label(label) {
                        push_aliases(&mut lexicon.statements, value, kind);
                    } else if let Some(kind) = FunctionKind::from_label(label) {
                        push_aliases(&mut lexicon.functions, value, kind);
                    } else {
                        return Err(LangError::lexicon(format!(
                            "unknown lexicon label: {label:?}"
                        )));
                    }
                }
            }
        }

        lexicon.validate()?;
        Ok(lexicon)
    }

    /// The built-in English lexicon.
    ///
    /// The embedded file is part of the crate; failing to parse it is a
    /// build defect, not a runtime condition.
    pub fn english() -> Self {
        Self::parse(ENGLISH_LEX).expect("built-in english lexicon is valid")
    }

    fn validate(&self) -> Result<()> {
        if self.digits.is_empty() {
            return Err(LangError::lexicon("digits alphabet is missing or empty"));
        }
        if self.decimals.is_empty() {
            return Err(LangError::lexicon("decimals alphabet is missing or empty"));
        }
        if self.signs.is_empty() {
            return Err(LangError::lexicon("signs alphabet is missing or empty"));
        }
        for (index, ch) in self.digits.iter().enumerate() {
            if self.digits[..index].contains(ch) {
                return Err(LangError::lexicon(format!(
                    "digit {ch:?} appears twice; digit value is its position"
                )));
            }
        }
        // The three alphabets must be disjoint or reduction is ill-defined
        for ch in &self.decimals {
            if self.digits.contains(ch) || self.signs.contains(ch) {
                return Err(LangError::lexicon(format!(
                    "character {ch:?} belongs to more than one alphabet"
                )));
            }
        }
        for ch in &self.signs {
            if self.digits.contains(ch) {
                return Err(LangError::lexicon(format!(
                    "character {ch:?} belongs to more than one alphabet"
                )));
            }
        }
        Ok(())
    }

    /// Numeric base = number of digit characters
    pub fn base(&self) -> usize {
        self.digits.len()
    }

    /// Digit value of a character (its position in the digits alphabet)
    pub fn digit_value(&self, ch: char) -> Option<usize> {
        self.digits.iter().position(|&d| d == ch)
    }

    pub fn digit(&self, value: usize) -> Option<char> {
        self.digits.get(value).copied()
    }

    pub fn is_decimal(&self, ch: char) -> bool {
        self.decimals.contains(&ch)
    }

    pub fn is_sign(&self, ch: char) -> bool {
        self.signs.contains(&ch)
    }

    /// Membership in the union of the three alphabets
    pub fn is_relevant(&self, ch: char) -> bool {
        self.digit_value(ch).is_some() || self.is_decimal(ch) || self.is_sign(ch)
    }

    /// First decimal character, used when rendering fractional numerals
    pub fn decimal_mark(&self) -> char {
        self.decimals[0]
    }

    /// First sign character, used when rendering negative numerals
    pub fn negative_mark(&self) -> char {
        self.signs[0]
    }

    pub fn statements(&self) -> &[(String, StatementKind)] {
        &self.statements
    }

    pub fn functions(&self) -> &[(String, FunctionKind)] {
        &self.functions
    }
}

fn push_aliases<K: Copy>(table: &mut Vec<(String, K)>, value: &str, kind: K) {
    for alias in value.split(',') {
        let alias = alias.trim();
        if !alias.is_empty() {
            table.push((alias.to_string(), kind));
        }
    }
}
