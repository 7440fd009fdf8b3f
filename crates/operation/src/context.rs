use std::collections::HashMap;

use value::ConstValue;

/// Mutable per-operation context, owned exclusively by its operation and
/// excluded from the operation's serialized identity.
#[derive(Debug, Clone, Default)]
pub struct Context(HashMap<String, ConstValue>);

impl Context {
    pub fn new(values: HashMap<String, ConstValue>) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&ConstValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConstValue) {
        self.0.insert(key.into(), value);
    }

    /// Shallow copy of the current values.
    pub fn snapshot(&self) -> HashMap<String, ConstValue> {
        self.0.clone()
    }

    /// Replaces the context with a new set of values.
    pub fn replace(&mut self, values: HashMap<String, ConstValue>) {
        self.0 = values;
    }

    /// Replaces the context with a function of the current values.
    pub fn update(&mut self, f: impl FnOnce(HashMap<String, ConstValue>) -> HashMap<String, ConstValue>) {
        self.0 = f(std::mem::take(&mut self.0));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, ConstValue>> for Context {
    fn from(values: HashMap<String, ConstValue>) -> Self {
        Self(values)
    }
}
