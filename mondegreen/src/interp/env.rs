//! Environment for variable bindings
//!
//! Variables live under a canonical name: the literal token text used when
//! the variable was first created. Later reads and updates reach a binding
//! through fuzzy matching against the canonical names, so two spellings
//! with the same reduced form touch the same variable.

use super::Value;
use crate::fuzzy;
use crate::lexicon::Lexicon;
use std::collections::HashMap;

/// Variable bindings for one program run
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Fuzzy-resolve a token to the canonical name of an existing binding.
    ///
    /// Unique match within edit distance one wins; zero or several
    /// candidates resolve to nothing.
    pub fn resolve(&self, lexicon: &Lexicon, token: &str) -> Option<&str> {
        fuzzy::match_within_one(
            lexicon,
            token,
            self.bindings.keys().map(|name| (name.as_str(), name.as_str())),
        )
    }

    /// Look up a token's value, if it reaches a binding
    pub fn lookup(&self, lexicon: &Lexicon, token: &str) -> Option<&Value> {
        let canonical = self.resolve(lexicon, token)?;
        self.bindings.get(canonical)
    }

    /// Bind a value: update through an existing canonical name when the
    /// target uniquely matches one, otherwise create a new binding under
    /// the target's literal text.
    pub fn assign(&mut self, lexicon: &Lexicon, target: &str, value: Value) {
        let canonical = match self.resolve(lexicon, target) {
            Some(name) => name.to_string(),
            None => target.to_string(),
        };
        self.bindings.insert(canonical, value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_then_lookup() {
        let lexicon = Lexicon::english();
        let mut env = Environment::new();
        env.assign(&lexicon, "count", Value::from("beef"));
        assert_eq!(env.lookup(&lexicon, "count").unwrap().as_str(), "beef");
        assert!(env.lookup(&lexicon, "unrelated").is_none());
    }

    #[test]
    fn test_fuzzy_update_keeps_canonical_name() {
        let lexicon = Lexicon::english();
        let mut env = Environment::new();
        env.assign(&lexicon, "canot", Value::from("beef"));
        // "cnt" reduces identically to "canot", so this updates in place
        env.assign(&lexicon, "cnt", Value::from("dime"));
        assert_eq!(env.len(), 1);
        assert_eq!(env.resolve(&lexicon, "cnt"), Some("canot"));
        assert_eq!(env.lookup(&lexicon, "canot").unwrap().as_str(), "dime");
    }

    #[test]
    fn test_ambiguous_target_creates_a_new_binding() {
        let lexicon = Lexicon::english();
        let mut env = Environment::new();
        env.assign(&lexicon, "dog", Value::from("one"));
        env.assign(&lexicon, "bat", Value::from("two"));
        // "bog" sits one step from both dog and bat, so it becomes its own
        // variable rather than clobbering either
        env.assign(&lexicon, "bog", Value::from("three"));
        assert_eq!(env.len(), 3);
        // and with bog bound, every one of the three names now has several
        // candidates within distance one, so all plain reads are rejected
        assert_eq!(env.resolve(&lexicon, "dog"), None);
        assert_eq!(env.resolve(&lexicon, "bat"), None);
        assert_eq!(env.resolve(&lexicon, "bog"), None);
    }
}
