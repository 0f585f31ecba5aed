//! Runtime values
//!
//! Every value in the language is a word. Its numeral form is never stored;
//! it is recomputed from the text on demand against a lexicon.

use crate::lexicon::Lexicon;
use crate::numeral::{self, Numeral};
use num_traits::Zero;
use std::fmt;

/// A runtime value: a word of token text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value(String);

impl Value {
    pub fn new(text: impl Into<String>) -> Self {
        Value(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The word's numeral form under the given lexicon
    pub fn numeral(&self, lexicon: &Lexicon) -> Numeral {
        numeral::encode(lexicon, &self.0)
    }

    /// A word is truthy when its numeral form is non-zero
    pub fn is_truthy(&self, lexicon: &Lexicon) -> bool {
        !self.numeral(lexicon).is_zero()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness_is_numeric() {
        let lexicon = Lexicon::english();
        assert!(Value::from("ace").is_truthy(&lexicon));
        assert!(Value::from("beef").is_truthy(&lexicon));
        assert!(!Value::from("bozo").is_truthy(&lexicon));
        // no digits at all encodes to zero
        assert!(!Value::from("aeiou").is_truthy(&lexicon));
        assert!(!Value::from("").is_truthy(&lexicon));
    }
}
