//! Previously submitted input ("old input").

use formwork_types::Value;
use std::fmt::Debug;

/// Read access to the input flashed from the previous request.
pub trait OldInput: Send + Sync + Debug {
    /// The submitted value under a dotted path (`user.0.email`), if present.
    fn get(&self, dotted_name: &str) -> Option<Value>;

    fn has(&self, dotted_name: &str) -> bool {
        self.get(dotted_name).is_some()
    }
}

/// Old input held as a nested JSON document.
///
/// Dotted paths walk objects by key and arrays by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryOldInput {
    input: Value,
}

impl InMemoryOldInput {
    pub fn new(input: Value) -> Self {
        Self { input }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl OldInput for InMemoryOldInput {
    fn get(&self, dotted_name: &str) -> Option<Value> {
        if dotted_name.is_empty() {
            return None;
        }
        let mut current = &self.input;
        for segment in dotted_name.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            found => Some(found.clone()),
        }
    }
}
