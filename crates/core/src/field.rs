//! Form fields.
//!
//! A [`Field`] is an [`Element`] of kind `Field`: it carries a slug, a
//! computed submitted name, an optional label and description, and an
//! option list for checkable controls. It derefs to [`Element`] for
//! everything else.

use crate::element::{Element, ElementKind};
use crate::naming::{self, BaseNames, NameSegment};
use crate::property::Prop;
use formwork_types::{AttrValue, Value, ValueExt};
use std::ops::{Deref, DerefMut};

/// How a field expands its option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkable {
    /// One `<input>` per option, substituted into the checkable format.
    Input,
    /// `<option>`/`<optgroup>` children of a `<select>`.
    Select,
}

impl Checkable {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(Checkable::Input),
            "select" => Some(Checkable::Select),
            _ => None,
        }
    }
}

pub const DEFAULT_CHECKABLE_FORMAT: &str = "<label>[checkable] [label]</label>";

#[derive(Debug, Clone)]
pub struct Field(Element);

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    pub fn new() -> Self {
        Field(Element::of_kind(ElementKind::Field))
    }

    pub fn make(properties: Value, attributes: Value) -> Self {
        Field::new().with_properties(properties).with_attributes(attributes)
    }

    pub(crate) fn from_element(element: Element) -> Self {
        debug_assert_eq!(element.kind(), ElementKind::Field);
        Field(element)
    }

    /// Wraps any element for storage in a form node.
    pub(crate) fn wrap(element: Element) -> Self {
        Field(element)
    }

    pub fn into_element(self) -> Element {
        self.0
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    /// The submitted name, composed from base names, own name and
    /// `multiple`. `None` when the field is unnamed.
    pub fn name(&self) -> Option<String> {
        self.property_text("name")
    }

    /// The name in dotted form, the key used for old input and errors.
    pub fn dot_name(&self) -> Option<String> {
        self.name().map(|n| naming::dot_name(&n))
    }

    /// Alias of [`Field::dot_name`] used when naming ids and lookups.
    pub fn safe_name(&self) -> Option<String> {
        self.dot_name()
    }

    pub fn base_names(&self) -> BaseNames {
        BaseNames::from_value(&self.property_value("baseNames"))
    }

    /// Adds a base-name segment, outermost when `on_top`.
    pub fn add_name(&mut self, segment: impl Into<NameSegment>, on_top: bool) -> &mut Self {
        let mut base = self.base_names();
        base.push(segment.into(), on_top);
        self.set_property("baseNames", base.to_value());
        self
    }

    pub fn set_base_names(&mut self, base: BaseNames) -> &mut Self {
        self.set_property("baseNames", base.to_value());
        self
    }

    pub fn label(&self) -> Option<Element> {
        self.get_property("label", Prop::NULL).into_element()
    }

    pub fn description(&self) -> Option<String> {
        self.property_text("description").filter(|d| !d.is_empty())
    }

    pub fn field_type(&self) -> String {
        self.property_text("type").unwrap_or_else(|| "text".to_string())
    }

    pub fn is_rowable(&self) -> bool {
        self.property_flag("rowable")
    }

    pub fn is_multiple(&self) -> bool {
        self.property_flag("multiple")
    }

    pub fn ignores_label(&self) -> bool {
        self.property_flag("ignoreLabel")
    }

    pub fn ignores_description(&self) -> bool {
        self.property_flag("ignoreDescription")
    }

    pub fn checkable(&self) -> Option<Checkable> {
        self.property_text("checkable").and_then(|c| Checkable::from_name(&c))
    }

    pub fn checkable_format(&self) -> String {
        self.property_text("checkable-format")
            .unwrap_or_else(|| DEFAULT_CHECKABLE_FORMAT.to_string())
    }

    pub fn options(&self) -> Value {
        self.property_value("options")
    }

    // --- fluent construction --------------------------------------------

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.0.set_properties(properties);
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.0 = self.0.with_attributes(attributes);
        self
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<Prop>) -> Self {
        self.0.set_property(name, value);
        self
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.0.set_attr(key, value);
        self
    }

    pub fn with_label(self, label: impl Into<Prop>) -> Self {
        self.with_prop("label", label)
    }

    pub fn with_value(self, value: impl Into<Prop>) -> Self {
        self.with_prop("value", value)
    }
}

impl Deref for Field {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.0
    }
}

impl DerefMut for Field {
    fn deref_mut(&mut self) -> &mut Element {
        &mut self.0
    }
}

impl From<Field> for Element {
    fn from(field: Field) -> Self {
        field.0
    }
}

/// Whether `candidate` is among the field's current value(s).
pub fn is_selected(current: &Value, candidate: &str) -> bool {
    match current {
        Value::Array(values) => values.iter().any(|v| v.to_text() == candidate),
        Value::Null => false,
        other => other.to_text() == candidate,
    }
}
