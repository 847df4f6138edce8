use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable store backing an evaluator run.
///
/// A single flat namespace: declaring a name that already exists overwrites
/// the previous binding. One instance is created when the evaluator starts
/// and dropped when it returns; a future version with block scope would
/// grow this into a stack of frames with parent-pointer lookup.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { values: HashMap::new(), }
    }

    /// Unconditionally associates `name` with `value`, overwriting any
    /// prior binding.
    ///
    /// # Example
    /// ```
    /// use loxley::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.declare("x", Value::Number(1.0));
    /// environment.declare("x", Value::Number(2.0));
    ///
    /// assert_eq!(environment.get("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn declare(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up a binding by name.
    ///
    /// Returns `None` when the variable was never declared; the evaluator
    /// turns that into the undefined-variable diagnostic, because only it
    /// holds the name token the diagnostic points at.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
