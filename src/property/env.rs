//! The per-message property environment.

use crate::property::Value;
use std::collections::HashMap;

/// Lookup of a named message property.
///
/// Implementations return [`Value::Unknown`] for properties that are absent
/// or not applicable; evaluation never fails on a missing property.
pub trait Env {
    fn value(&self, identifier: &str) -> Value;
}

impl Env for HashMap<String, Value> {
    fn value(&self, identifier: &str) -> Value {
        self.get(identifier).cloned().unwrap_or(Value::Unknown)
    }
}

/// An owned property map, convenient for constructing per-message
/// environments.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: HashMap<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }
}

impl Env for Properties {
    fn value(&self, identifier: &str) -> Value {
        self.values.value(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_property() {
        let props = Properties::new().with("colour", "red").with("price", 10i64);
        assert_eq!(props.value("colour"), Value::String("red".to_string()));
        assert_eq!(props.value("price"), Value::Int(10));
    }

    #[test]
    fn test_absent_property_is_unknown() {
        let props = Properties::new();
        assert!(props.value("missing").is_unknown());
    }

    #[test]
    fn test_hashmap_env() {
        let mut map = HashMap::new();
        map.insert("flag".to_string(), Value::Bool(true));
        assert_eq!(map.value("flag"), Value::Bool(true));
        assert!(map.value("other").is_unknown());
    }
}
