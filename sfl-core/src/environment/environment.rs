use std::collections::HashMap;

use super::prelude::Value;

/// The single, unscoped variable store of a run.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    pub store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Binds `name`, replacing any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings ordered by name.
    pub fn sorted(&self) -> Vec<(&String, &Value)> {
        let mut bindings = self.store.iter().collect::<Vec<(&String, &Value)>>();
        bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
        bindings
    }
}
