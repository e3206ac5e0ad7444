//! Per-kind property hooks.
//!
//! A set-hook transforms a value before it is stored (returning `None`
//! removes the property); a get-hook transforms the stored value on read.
//! Tables are built once per element kind.

use crate::element::Element;
use crate::naming::{BaseNames, compute_name};
use crate::property::Prop;
use formwork_types::{AttributeStore, Value, ValueExt};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type SetHook = fn(&Element, Prop) -> Option<Prop>;
pub type GetHook = fn(&Element, Prop) -> Prop;

#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyHooks {
    pub on_set: Option<SetHook>,
    pub on_get: Option<GetHook>,
}

#[derive(Debug, Default)]
pub struct HookTable {
    hooks: HashMap<&'static str, PropertyHooks>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_set(mut self, name: &'static str, hook: SetHook) -> Self {
        self.hooks.entry(name).or_default().on_set = Some(hook);
        self
    }

    pub fn on_get(mut self, name: &'static str, hook: GetHook) -> Self {
        self.hooks.entry(name).or_default().on_get = Some(hook);
        self
    }

    pub fn setter(&self, name: &str) -> Option<SetHook> {
        self.hooks.get(name).and_then(|h| h.on_set)
    }

    pub fn getter(&self, name: &str) -> Option<GetHook> {
        self.hooks.get(name).and_then(|h| h.on_get)
    }
}

pub(crate) static ELEMENT_HOOKS: Lazy<HookTable> =
    Lazy::new(|| HookTable::new().on_set("container", set_container));

pub(crate) static FIELD_HOOKS: Lazy<HookTable> = Lazy::new(|| {
    HookTable::new()
        .on_set("container", set_container)
        .on_set("label", set_label)
        .on_get("label", get_label)
        .on_get("name", get_name)
});

pub(crate) static FORM_HOOKS: Lazy<HookTable> = Lazy::new(HookTable::new);

/// `false`/`null` drop the container, a string becomes a classed `div`,
/// an object becomes a `div` with those attributes.
fn set_container(_owner: &Element, value: Prop) -> Option<Prop> {
    match value {
        Prop::Value(Value::Null | Value::Bool(false)) => None,
        Prop::Value(Value::Bool(true)) => Some(Element::new().into()),
        Prop::Value(Value::String(class)) => Some(Element::new().with_class(&class).into()),
        Prop::Value(attrs @ Value::Object(_)) => {
            let mut container = Element::new();
            container.fill(AttributeStore::from_value(&attrs));
            Some(container.into())
        }
        Prop::Value(other) => {
            log::warn!("Ignoring container value {other}: expected element, string or object");
            None
        }
        element_or_lazy => Some(element_or_lazy),
    }
}

fn set_label(_owner: &Element, value: Prop) -> Option<Prop> {
    match value {
        Prop::Value(Value::Null | Value::Bool(false)) => None,
        Prop::Value(text) => Some(label_element(text).into()),
        Prop::Element(mut label) => {
            label.set_property("tag", "label");
            Some(Prop::Element(label))
        }
        lazy => Some(lazy),
    }
}

/// Ties the label to its field through `for`.
fn get_label(owner: &Element, value: Prop) -> Prop {
    let mut label = match value.resolve() {
        Prop::Element(label) => *label,
        Prop::Value(Value::Null | Value::Bool(false)) => return Prop::NULL,
        Prop::Value(text) => label_element(text),
        Prop::Lazy(_) => return Prop::NULL,
    };
    if let Some(name) = owner.property_text("name") {
        label.set_attr("for", name);
    }
    label.into()
}

fn get_name(owner: &Element, value: Prop) -> Prop {
    let own = match value.into_value() {
        Value::Bool(false) => return Prop::Value(Value::Bool(false)),
        Value::Null => owner.slug(),
        other => other.as_text(),
    };
    let base = BaseNames::from_value(&owner.property_value("baseNames"));
    let multiple = owner.property_value("multiple").is_truthy();
    compute_name(own.as_deref(), &base, multiple).map_or(Prop::NULL, Prop::from)
}

fn label_element(text: Value) -> Element {
    let mut label = Element::new();
    label.set_property("tag", "label");
    label.set_property("value", text);
    label
}
