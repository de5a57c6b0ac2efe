//! Flat variable environment for the Ovo interpreter.

use crate::value::Value;
use std::collections::BTreeMap;

/// A single flat, global, mutable mapping from name to value.
///
/// Variables are created implicitly on first assignment and persist until
/// the run ends or the name is reassigned. There is no nested lexical
/// scoping and no per-call frame; this is a deliberate property of the
/// language, not an implementation shortcut.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    bindings: BTreeMap<String, Value<'a>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite a binding.
    pub fn set(&mut self, name: &str, value: Value<'a>) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.bindings.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_and_overwrites() {
        let mut env = Environment::new();
        assert!(env.get("x").is_none());
        env.set("x", Value::Int(1));
        assert_eq!(env.get("x"), Some(&Value::Int(1)));
        env.set("x", Value::Str("replaced".into()));
        assert_eq!(env.get("x"), Some(&Value::Str("replaced".into())));
    }
}
