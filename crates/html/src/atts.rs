use formwork_types::{AttributeStore, Value};

/// Loose attribute input accepted by the helpers: nothing, a bare class
/// string, or a full attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Atts {
    #[default]
    None,
    Class(String),
    Map(AttributeStore),
}

impl From<()> for Atts {
    fn from(_: ()) -> Self {
        Atts::None
    }
}

impl From<&str> for Atts {
    fn from(class: &str) -> Self {
        Atts::Class(class.to_string())
    }
}

impl From<String> for Atts {
    fn from(class: String) -> Self {
        Atts::Class(class)
    }
}

impl From<AttributeStore> for Atts {
    fn from(store: AttributeStore) -> Self {
        Atts::Map(store)
    }
}

impl From<&Value> for Atts {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Atts::None,
            Value::String(class) => Atts::Class(class.clone()),
            Value::Object(_) => Atts::Map(AttributeStore::from_value(value)),
            other => {
                log::warn!("Ignoring attributes given as {other}");
                Atts::None
            }
        }
    }
}

impl From<Value> for Atts {
    fn from(value: Value) -> Self {
        Atts::from(&value)
    }
}

impl<K: AsRef<str>, V: Into<formwork_types::AttrValue>, const N: usize> From<[(K, V); N]> for Atts {
    fn from(pairs: [(K, V); N]) -> Self {
        Atts::Map(pairs.into_iter().collect())
    }
}

/// Normalises [`Atts`] into a store. A missing value or a map without a
/// class receives `default_class`; a bare string becomes the class.
pub fn parse_atts(atts: impl Into<Atts>, default_class: Option<&str>) -> AttributeStore {
    match atts.into() {
        Atts::None => default_class.map(AttributeStore::with_class).unwrap_or_default(),
        Atts::Class(class) => AttributeStore::with_class(&class),
        Atts::Map(mut store) => {
            if let Some(default_class) = default_class {
                if store.classes().is_empty() {
                    store.add_class(default_class);
                }
            }
            store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_atts_defaults() {
        assert_eq!(parse_atts((), Some("btn")).to_string(), r#" class="btn""#);
        assert_eq!(parse_atts((), None).to_string(), "");
        assert_eq!(parse_atts("btn-link", Some("btn")).to_string(), r#" class="btn-link""#);
    }

    #[test]
    fn test_parse_atts_map_keeps_own_class() {
        let store = parse_atts([("id", "go")], Some("btn btn-sm"));
        assert_eq!(store.to_string(), r#" id="go" class="btn btn-sm""#);

        let store = parse_atts(json!({"class": "big", "title": "t"}), Some("btn"));
        assert_eq!(store.to_string(), r#" class="big" title="t""#);
    }
}
