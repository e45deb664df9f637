//! Filter/formatter transform chains.
//!
//! A field's filters (decode direction) and formatters (encode direction)
//! are ordered chains of `Transform` entries. Each entry is one of three
//! callable shapes, resolved at invocation time:
//!
//! - `Named` - dispatched by name against the schema's [`TransformRegistry`]
//! - `Func` - an inline closure over one value
//! - `Object` - anything implementing [`ValueTransform`]
//!
//! An entry that resolves to nothing (a `Named` entry with no registry
//! match, or the explicit `Identity`) passes the value through unchanged.
//! That leniency is part of the contract, not an error case.

use std::collections::HashMap;
use std::fmt;

use crate::value::Value;

/// An object exposing a single-argument transform operation.
///
/// The third callable shape accepted in filter/formatter chains; useful
/// when a transform carries configuration state.
pub trait ValueTransform {
    fn transform(&self, value: Value) -> Value;
}

/// One entry in a filter or formatter chain.
pub enum Transform {
    /// Dispatch by name against the owning schema's transform registry.
    Named(String),
    /// Inline single-argument callable.
    Func(Box<dyn Fn(Value) -> Value>),
    /// Object with a `transform` method.
    Object(Box<dyn ValueTransform>),
    /// Pass the value through unchanged.
    Identity,
}

impl Transform {
    /// Convenience constructor for named dispatch.
    pub fn named(name: &str) -> Self {
        Transform::Named(name.to_string())
    }

    /// Convenience constructor for an inline callable.
    pub fn func(f: impl Fn(Value) -> Value + 'static) -> Self {
        Transform::Func(Box::new(f))
    }

    /// Convenience constructor for a transform object.
    pub fn object(obj: impl ValueTransform + 'static) -> Self {
        Transform::Object(Box::new(obj))
    }

    /// Apply this entry to a value.
    ///
    /// A `Named` entry missing from the registry is treated as identity.
    pub fn apply(&self, value: Value, registry: &TransformRegistry) -> Value {
        match self {
            Transform::Named(name) => match registry.get(name) {
                Some(f) => f(value),
                None => value,
            },
            Transform::Func(f) => f(value),
            Transform::Object(obj) => obj.transform(value),
            Transform::Identity => value,
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Named(name) => write!(f, "Named({name:?})"),
            Transform::Func(_) => f.write_str("Func(..)"),
            Transform::Object(_) => f.write_str("Object(..)"),
            Transform::Identity => f.write_str("Identity"),
        }
    }
}

/// Named-dispatch table owned by a schema.
///
/// Replaces by-name method lookup with an explicit registration step:
/// the schema registers each named transform once, and `Named` chain
/// entries resolve against this table at invocation time.
#[derive(Default)]
pub struct TransformRegistry {
    entries: HashMap<String, Box<dyn Fn(Value) -> Value>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform under a name. A repeated name replaces the
    /// earlier registration.
    pub fn register(&mut self, name: &str, f: impl Fn(Value) -> Value + 'static) {
        self.entries.insert(name.to_string(), Box::new(f));
    }

    /// Look up a registered transform.
    pub fn get(&self, name: &str) -> Option<&(dyn Fn(Value) -> Value)> {
        self.entries.get(name).map(|f| &**f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_tuple("TransformRegistry").field(&names).finish()
    }
}

/// Apply a chain of transforms left to right.
pub fn pass_through(chain: &[Transform], value: Value, registry: &TransformRegistry) -> Value {
    chain
        .iter()
        .fold(value, |value, entry| entry.apply(value, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upcase(v: Value) -> Value {
        match v {
            Value::Text(s) => Value::Text(s.to_uppercase()),
            other => other,
        }
    }

    struct Suffix(&'static str);

    impl ValueTransform for Suffix {
        fn transform(&self, value: Value) -> Value {
            match value {
                Value::Text(s) => Value::Text(format!("{s}{}", self.0)),
                other => other,
            }
        }
    }

    #[test]
    fn test_named_dispatch() {
        let mut registry = TransformRegistry::new();
        registry.register("upcase", upcase);
        let t = Transform::named("upcase");
        assert_eq!(t.apply(Value::from("abc"), &registry), Value::from("ABC"));
    }

    #[test]
    fn test_unregistered_name_is_identity() {
        let registry = TransformRegistry::new();
        let t = Transform::named("nope");
        assert_eq!(t.apply(Value::from("abc"), &registry), Value::from("abc"));
    }

    #[test]
    fn test_func_shape() {
        let registry = TransformRegistry::new();
        let t = Transform::func(|v| match v {
            Value::Text(s) => Value::Text(s.trim().to_string()),
            other => other,
        });
        assert_eq!(t.apply(Value::from("  hi "), &registry), Value::from("hi"));
    }

    #[test]
    fn test_object_shape() {
        let registry = TransformRegistry::new();
        let t = Transform::object(Suffix("!"));
        assert_eq!(t.apply(Value::from("hi"), &registry), Value::from("hi!"));
    }

    #[test]
    fn test_identity_shape() {
        let registry = TransformRegistry::new();
        let t = Transform::Identity;
        assert_eq!(t.apply(Value::from("hi"), &registry), Value::from("hi"));
    }

    #[test]
    fn test_chain_applies_left_to_right() {
        let mut registry = TransformRegistry::new();
        registry.register("upcase", upcase);
        let chain = vec![Transform::named("upcase"), Transform::object(Suffix("!"))];
        // upcase first, suffix second: "AB!" not "AB" / "ab!"
        assert_eq!(
            pass_through(&chain, Value::from("ab"), &registry),
            Value::from("AB!")
        );
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let registry = TransformRegistry::new();
        assert_eq!(
            pass_through(&[], Value::from("x"), &registry),
            Value::from("x")
        );
    }
}
