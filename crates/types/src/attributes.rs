//! HTML attribute bag.
//!
//! Attributes keep insertion order. `class` is always held as an ordered,
//! de-duplicated token list and joined with spaces on output.

use crate::escape::escape;
use crate::value::{Value, ValueExt};
use indexmap::IndexMap;
use std::fmt;

const CLASS: &str = "class";

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Present in the map but omitted from output.
    Null,
    /// Rendered as `key="key"` (boolean attribute shorthand).
    Flag,
    Text(String),
    /// Rendered space-joined. Merging two lists unions them.
    List(Vec<String>),
}

impl AttrValue {
    /// The rendered text, `None` for [`AttrValue::Null`].
    pub fn text(&self, key: &str) -> Option<String> {
        match self {
            AttrValue::Null => None,
            AttrValue::Flag => Some(key.to_string()),
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::List(items) => Some(items.join(" ")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        if b { AttrValue::Flag } else { AttrValue::Null }
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

impl From<&Value> for AttrValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => AttrValue::Null,
            Value::Bool(b) => (*b).into(),
            Value::Array(items) => AttrValue::List(items.iter().map(ValueExt::to_text).collect()),
            other => AttrValue::Text(other.to_text()),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        AttrValue::from(&value)
    }
}

/// Ordered key/value store for HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeStore {
    entries: IndexMap<String, AttrValue>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single class attribute.
    pub fn with_class(class: &str) -> Self {
        let mut store = Self::new();
        store.add_class(class);
        store
    }

    /// Builds a store from a JSON object. Non-objects give an empty store.
    pub fn from_value(value: &Value) -> Self {
        let mut store = Self::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                store.set(key.as_str(), value);
            }
        }
        store
    }

    /// Overwrites `key`. A `class` value is split into tokens.
    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) -> &mut Self {
        let value = value.into();
        if key == CLASS {
            self.entries.shift_remove(CLASS);
            match value {
                AttrValue::Null => {}
                other => self.add_class_value(other),
            }
            return self;
        }
        self.entries.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Rendered text of `key`, `None` when missing or null.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.entries.get(key).and_then(|v| v.text(key))
    }

    /// Present and not null.
    pub fn has(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.shift_remove(key)
    }

    /// Removes `key` and returns its rendered text.
    pub fn pull(&mut self, key: &str) -> Option<String> {
        self.remove(key).and_then(|v| v.text(key))
    }

    /// Replaces every attribute.
    pub fn fill(&mut self, other: AttributeStore) -> &mut Self {
        *self = other;
        self
    }

    /// Recursive merge: list-valued keys (and `class`) union with
    /// de-duplication, everything else is overwritten.
    pub fn merge(&mut self, other: &AttributeStore) -> &mut Self {
        for (key, incoming) in &other.entries {
            if key == CLASS {
                self.add_class_value(incoming.clone());
                continue;
            }
            match (self.entries.get_mut(key), incoming) {
                (Some(AttrValue::List(current)), AttrValue::List(items)) => {
                    for item in items {
                        if !current.contains(item) {
                            current.push(item.clone());
                        }
                    }
                }
                _ => {
                    self.entries.insert(key.clone(), incoming.clone());
                }
            }
        }
        self
    }

    /// Adds one or more space-separated class tokens.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.add_classes(class.split_whitespace())
    }

    pub fn add_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) -> &mut Self {
        let mut tokens = self.take_class_tokens();
        for class in classes {
            for token in class.split_whitespace() {
                if !tokens.iter().any(|t| t == token) {
                    tokens.push(token.to_string());
                }
            }
        }
        self.entries.insert(CLASS.to_string(), AttrValue::List(tokens));
        self
    }

    /// Removes a class token (exact match).
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        if let Some(AttrValue::List(tokens)) = self.entries.get_mut(CLASS) {
            tokens.retain(|t| t != class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        match self.entries.get(CLASS) {
            Some(AttrValue::List(tokens)) => tokens,
            _ => &[],
        }
    }

    /// Appends a boolean attribute under the next positional key.
    ///
    /// Numeric keys are not rendered as names: the stored value is, so
    /// `push_flag("required")` renders `required="required"`.
    pub fn push_flag(&mut self, name: &str) -> &mut Self {
        let index = self
            .entries
            .keys()
            .filter(|k| is_numeric_key(k))
            .count();
        self.entries
            .insert(index.to_string(), AttrValue::Text(name.to_string()));
        self
    }

    /// Sets a `data-*` attribute.
    pub fn set_data(&mut self, key: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.set(&format!("data-{key}"), value)
    }

    pub fn get_data(&self, key: &str) -> Option<String> {
        self.get_text(&format!("data-{key}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to ` key="value" key2="value2"`, or `""` when nothing
    /// remains after dropping nulls. Values are escaped.
    pub fn to_attribute_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            let name = if is_numeric_key(key) {
                match value.text(key) {
                    Some(name) => name,
                    None => continue,
                }
            } else {
                key.clone()
            };
            let Some(text) = value.text(&name) else {
                continue;
            };
            if name == CLASS && text.is_empty() {
                continue;
            }
            out.push(' ');
            out.push_str(&name);
            out.push_str("=\"");
            out.push_str(&escape(&text));
            out.push('"');
        }
        out
    }

    /// The class entry as a token list, leaving an empty list in its
    /// place so the attribute keeps its position.
    fn take_class_tokens(&mut self) -> Vec<String> {
        let entry = self
            .entries
            .entry(CLASS.to_string())
            .or_insert_with(|| AttrValue::List(Vec::new()));
        match std::mem::replace(entry, AttrValue::List(Vec::new())) {
            AttrValue::List(tokens) => tokens,
            other => other
                .text(CLASS)
                .map(|t| t.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    fn add_class_value(&mut self, value: AttrValue) {
        match value {
            AttrValue::Null | AttrValue::Flag => {}
            AttrValue::Text(text) => {
                self.add_class(&text);
            }
            AttrValue::List(items) => {
                self.add_classes(items.iter().map(String::as_str));
            }
        }
    }
}

impl fmt::Display for AttributeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attribute_string())
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key.as_ref(), value);
        }
        store
    }
}

fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_in_insertion_order() {
        let attrs: AttributeStore = [("id", "email"), ("type", "text")].into_iter().collect();
        assert_eq!(attrs.to_attribute_string(), r#" id="email" type="text""#);
    }

    #[test]
    fn test_empty_store_serializes_to_empty_string() {
        assert_eq!(AttributeStore::new().to_attribute_string(), "");
    }

    #[test]
    fn test_null_values_are_omitted() {
        let mut attrs = AttributeStore::new();
        attrs.set("checked", AttrValue::Null).set("value", "1");
        assert_eq!(attrs.to_attribute_string(), r#" value="1""#);
        assert!(!attrs.has("checked"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut attrs = AttributeStore::new();
        attrs.set("title", r#"say "hi" & <go>"#);
        assert_eq!(
            attrs.to_attribute_string(),
            r#" title="say &quot;hi&quot; &amp; &lt;go&gt;""#
        );
    }

    #[test]
    fn test_numeric_keys_use_value_as_name() {
        let mut attrs = AttributeStore::new();
        attrs.push_flag("required").push_flag("disabled");
        assert_eq!(
            attrs.to_attribute_string(),
            r#" required="required" disabled="disabled""#
        );
    }

    #[test]
    fn test_bool_values() {
        let attrs = AttributeStore::from_value(&json!({"required": true, "readonly": false}));
        assert_eq!(attrs.to_attribute_string(), r#" required="required""#);
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut attrs = AttributeStore::new();
        attrs.add_class("a").add_class("a");
        assert_eq!(attrs.classes(), ["a"]);
        assert_eq!(attrs.to_attribute_string(), r#" class="a""#);
    }

    #[test]
    fn test_add_class_splits_tokens_and_keeps_order() {
        let mut attrs = AttributeStore::new();
        attrs.add_class("btn btn-sm").add_classes(["btn-primary", "btn"]);
        assert_eq!(attrs.classes(), ["btn", "btn-sm", "btn-primary"]);
    }

    #[test]
    fn test_set_class_string_becomes_token_set() {
        let mut attrs = AttributeStore::new();
        attrs.set("class", "x y x");
        assert_eq!(attrs.classes(), ["x", "y"]);
        assert!(attrs.has_class("y"));
    }

    #[test]
    fn test_add_class_keeps_class_position() {
        let mut attrs = AttributeStore::from_value(&json!({"id": "a", "class": "x", "name": "n"}));
        attrs.add_class("y").add_class("x");
        assert_eq!(attrs.to_attribute_string(), r#" id="a" class="x y" name="n""#);
    }

    #[test]
    fn test_remove_class_exact_match() {
        let mut attrs = AttributeStore::with_class("form-group has-error");
        attrs.remove_class("has");
        assert_eq!(attrs.classes(), ["form-group", "has-error"]);
        attrs.remove_class("form-group");
        assert_eq!(attrs.classes(), ["has-error"]);
    }

    #[test]
    fn test_removing_last_class_drops_attribute_from_output() {
        let mut attrs = AttributeStore::with_class("only");
        attrs.remove_class("only");
        assert_eq!(attrs.to_attribute_string(), "");
    }

    #[test]
    fn test_merge_overwrites_scalars_and_unions_lists() {
        let mut attrs = AttributeStore::from_value(&json!({
            "id": "a",
            "class": "one two",
            "data-tags": ["x", "y"],
        }));
        let incoming = AttributeStore::from_value(&json!({
            "id": "b",
            "class": "two three",
            "data-tags": ["y", "z"],
        }));
        attrs.merge(&incoming);

        assert_eq!(attrs.get_text("id"), Some("b".to_string()));
        assert_eq!(attrs.classes(), ["one", "two", "three"]);
        assert_eq!(attrs.get_text("data-tags"), Some("x y z".to_string()));
    }

    #[test]
    fn test_merge_with_empty_is_noop() {
        let mut attrs = AttributeStore::from_value(&json!({"id": "x", "class": "a b", "name": "n"}));
        let before = attrs.to_attribute_string();
        attrs.merge(&AttributeStore::new());
        assert_eq!(attrs.to_attribute_string(), before);
    }

    #[test]
    fn test_data_attributes() {
        let mut attrs = AttributeStore::new();
        attrs.set_data("method", "delete");
        assert_eq!(attrs.get_data("method"), Some("delete".to_string()));
        assert_eq!(attrs.to_attribute_string(), r#" data-method="delete""#);
    }

    #[test]
    fn test_pull_removes_value() {
        let mut attrs = AttributeStore::from_value(&json!({"icon": "fa-edit", "href": "/x"}));
        assert_eq!(attrs.pull("icon"), Some("fa-edit".to_string()));
        assert_eq!(attrs.pull("icon"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_display_matches_attribute_string() {
        let attrs = AttributeStore::with_class("row");
        assert_eq!(attrs.to_string(), r#" class="row""#);
    }
}
