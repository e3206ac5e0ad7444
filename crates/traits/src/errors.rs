//! Validation errors from the previous request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Read access to the current validation error set.
///
/// Keys are field slugs or dotted field names (`user.email`).
pub trait ValidationErrors: Send + Sync + Debug {
    /// Whether any message is recorded for `key`.
    fn has(&self, key: &str) -> bool;

    /// The first message recorded for `key`.
    fn first(&self, key: &str) -> Option<String>;

    /// Whether the set holds no messages at all.
    fn is_empty(&self) -> bool;
}

/// An in-memory error set, keyed by field name.
///
/// Deserializes from the usual `{"field": ["message", ...]}` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
    messages: IndexMap<String, Vec<String>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `key`.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.messages
            .entry(key.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Every message for `key`, in insertion order.
    pub fn get(&self, key: &str) -> &[String] {
        self.messages.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ValidationErrors for MessageBag {
    fn has(&self, key: &str) -> bool {
        self.messages.get(key).is_some_and(|m| !m.is_empty())
    }

    fn first(&self, key: &str) -> Option<String> {
        self.messages.get(key).and_then(|m| m.first()).cloned()
    }

    fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }
}
