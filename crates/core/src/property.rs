//! Property values and the per-element property store.
//!
//! Properties drive rendering but are never emitted as HTML attributes.
//! A property can hold a plain value, a lazily computed value, or a nested
//! element (labels and containers).

use crate::element::Element;
use formwork_types::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A value computed on every read.
#[derive(Clone)]
pub struct LazyValue(Arc<dyn Fn() -> Value + Send + Sync>);

impl LazyValue {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn resolve(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for LazyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyValue(..)")
    }
}

#[derive(Debug, Clone)]
pub enum Prop {
    Value(Value),
    Lazy(LazyValue),
    Element(Box<Element>),
}

impl Prop {
    pub const NULL: Prop = Prop::Value(Value::Null);

    /// Invokes a lazy value, leaving other variants untouched.
    pub fn resolve(self) -> Prop {
        match self {
            Prop::Lazy(lazy) => Prop::Value(lazy.resolve()),
            other => other,
        }
    }

    /// The plain value. Elements have no value form and give `Null`.
    pub fn into_value(self) -> Value {
        match self.resolve() {
            Prop::Value(value) => value,
            _ => Value::Null,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Prop::Element(element) => Some(*element),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Prop::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Prop::Value(Value::Null))
    }
}

impl Default for Prop {
    fn default() -> Self {
        Prop::NULL
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Prop::Value(value)
    }
}

impl From<Element> for Prop {
    fn from(element: Element) -> Self {
        Prop::Element(Box::new(element))
    }
}

impl From<LazyValue> for Prop {
    fn from(lazy: LazyValue) -> Self {
        Prop::Lazy(lazy)
    }
}

impl From<&str> for Prop {
    fn from(s: &str) -> Self {
        Prop::Value(Value::from(s))
    }
}

impl From<String> for Prop {
    fn from(s: String) -> Self {
        Prop::Value(Value::from(s))
    }
}

impl From<bool> for Prop {
    fn from(b: bool) -> Self {
        Prop::Value(Value::Bool(b))
    }
}

impl From<i64> for Prop {
    fn from(n: i64) -> Self {
        Prop::Value(Value::from(n))
    }
}

impl From<usize> for Prop {
    fn from(n: usize) -> Self {
        Prop::Value(Value::from(n))
    }
}

/// Ordered name → [`Prop`] map.
///
/// A name counts as a property once it is present, even when its value is
/// `Null`; kinds seed their defaults so their property names are known up
/// front.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    values: IndexMap<String, Prop>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Prop> {
        self.values.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Prop> {
        self.values.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Prop) {
        self.values.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Prop> {
        self.values.shift_remove(name)
    }

    /// Whether `name` is a known property of this element.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether `name` holds something other than `Null`.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|p| !p.is_null())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
