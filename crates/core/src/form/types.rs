//! Built-in field types and their defaults.

use crate::field::DEFAULT_CHECKABLE_FORMAT;
use formwork_types::{Map, Value};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Password,
    Email,
    Number,
    Date,
    Search,
    Tel,
    Url,
    Color,
    File,
    Hidden,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Button,
    Label,
    Fieldset,
    Legend,
    Optgroup,
    Option,
    Datalist,
    Keygen,
    Output,
}

impl FieldType {
    pub const ALL: [FieldType; 24] = [
        FieldType::Text,
        FieldType::Password,
        FieldType::Email,
        FieldType::Number,
        FieldType::Date,
        FieldType::Search,
        FieldType::Tel,
        FieldType::Url,
        FieldType::Color,
        FieldType::File,
        FieldType::Hidden,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Button,
        FieldType::Label,
        FieldType::Fieldset,
        FieldType::Legend,
        FieldType::Optgroup,
        FieldType::Option,
        FieldType::Datalist,
        FieldType::Keygen,
        FieldType::Output,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Password => "password",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Search => "search",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Color => "color",
            FieldType::File => "file",
            FieldType::Hidden => "hidden",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Button => "button",
            FieldType::Label => "label",
            FieldType::Fieldset => "fieldset",
            FieldType::Legend => "legend",
            FieldType::Optgroup => "optgroup",
            FieldType::Option => "option",
            FieldType::Datalist => "datalist",
            FieldType::Keygen => "keygen",
            FieldType::Output => "output",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Default properties, before caller overrides. Always includes `type`.
    pub fn properties(self) -> Map<String, Value> {
        let defaults = match self {
            FieldType::Textarea
            | FieldType::Label
            | FieldType::Fieldset
            | FieldType::Legend
            | FieldType::Optgroup
            | FieldType::Option
            | FieldType::Datalist
            | FieldType::Keygen
            | FieldType::Output
            | FieldType::Button => json!({ "tag": self.name() }),
            FieldType::Select => json!({ "tag": "select", "checkable": "select" }),
            FieldType::Checkbox | FieldType::Radio => json!({
                "tag": "div",
                "checkable": "input",
                "checkable-format": DEFAULT_CHECKABLE_FORMAT,
            }),
            _ => json!({}),
        };
        let mut map = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert("type".to_string(), Value::from(self.name()));
        map
    }

    /// Default attributes, merged under the form's field attributes.
    pub fn attributes(self) -> Value {
        match self {
            FieldType::Button => json!({ "class": "btn" }),
            _ => Value::Null,
        }
    }

    /// Whether the control is an `<input type=..>`.
    pub fn is_input(self) -> bool {
        !self.properties().contains_key("tag")
    }
}
