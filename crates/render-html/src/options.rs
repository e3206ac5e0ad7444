//! Option lists for checkable fields.
//!
//! Options come from the field's `options` property. An object maps
//! submitted value → display text (a nested object under a key becomes an
//! `<optgroup>` labelled with that key); an array uses each item as both.

use formwork_core::Field;
use formwork_core::field::is_selected;
use formwork_types::{AttributeStore, Value, ValueExt, escape};
use itertools::Itertools;

fn entries(options: &Value) -> Vec<(String, &Value)> {
    match options {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items.iter().map(|v| (v.to_text(), v)).collect(),
        _ => Vec::new(),
    }
}

/// One `<input>` per option, each substituted into the field's
/// checkable format at `[checkable]`, with `[label]` and `[name]` filled in.
pub fn input_options(field: &Field, selected: &Value, attribute_string: impl Fn(&AttributeStore) -> String) -> String {
    let name = field.name().unwrap_or_default();
    let field_type = field.field_type();
    let format = field.checkable_format();

    entries(&field.options())
        .into_iter()
        .map(|(value, display)| {
            let mut attributes = AttributeStore::new();
            attributes
                .set("name", name.as_str())
                .set("type", field_type.as_str())
                .set("value", value.as_str())
                .set("checked", is_selected(selected, &value));
            let input = format!("<input{}></input>", attribute_string(&attributes));
            format
                .replace("[label]", &escape(&display.to_text()))
                .replace("[name]", &name)
                .replace("[checkable]", &input)
        })
        .join("")
}

/// `<option>` children for a select, grouping nested objects.
pub fn select_options(field: &Field, selected: &Value) -> String {
    entries(&field.options())
        .into_iter()
        .map(|(value, display)| match display {
            Value::Object(_) => {
                let group = entries(display)
                    .into_iter()
                    .map(|(value, display)| select_option(&value, display, selected))
                    .join("");
                format!(r#"<optgroup label="{}">{}</optgroup>"#, escape(&value), group)
            }
            _ => select_option(&value, display, selected),
        })
        .join("")
}

fn select_option(value: &str, display: &Value, selected: &Value) -> String {
    let mut attributes = AttributeStore::new();
    attributes
        .set("value", value)
        .set("selected", is_selected(selected, value));
    format!(
        "<option{}>{}</option>",
        attributes.to_attribute_string(),
        escape(&display.to_text())
    )
}
