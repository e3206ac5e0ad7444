use formwork_types::{AttrValue, AttributeStore, Value, ValueExt};
use std::fmt;

/// A table cell. Labels are emitted as-is, so they may hold markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    label: String,
    tag: String,
    attributes: AttributeStore,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new("")
    }
}

impl Cell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tag: "td".to_string(),
            attributes: AttributeStore::new(),
        }
    }

    pub fn header(label: impl Into<String>) -> Self {
        Self::new(label).with_tag("th")
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.attributes.add_class(class);
        self
    }

    pub fn render(&self) -> String {
        format!(
            "<{tag}{attrs}>{label}</{tag}>",
            tag = self.tag,
            attrs = self.attributes,
            label = self.label
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Cell {
    fn from(label: &str) -> Self {
        Cell::new(label)
    }
}

impl From<String> for Cell {
    fn from(label: String) -> Self {
        Cell::new(label)
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        Cell::new(value.to_text())
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Cell::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render() {
        let cell = Cell::new("<a href=\"/u/1\">Ann</a>").with_class("name");
        assert_eq!(cell.render(), r#"<td class="name"><a href="/u/1">Ann</a></td>"#);
        assert_eq!(Cell::header("Name").render(), "<th>Name</th>");
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Cell::from(json!(42)).label(), "42");
        assert_eq!(Cell::from(Value::Null).label(), "");
    }
}
