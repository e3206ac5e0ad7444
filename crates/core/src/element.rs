//! The generic element: attributes, properties and appendages.
//!
//! Every renderable thing in a form is an [`Element`]. Attributes end up in
//! the markup; properties steer the renderer (`tag`, `value`, `label`,
//! `container`, ...). [`Element::set`] routes a key to whichever of the two
//! already knows it, falling back to attributes.

use crate::error::RenderError;
use crate::field::Field;
use crate::hooks::{ELEMENT_HOOKS, FIELD_HOOKS, FORM_HOOKS, HookTable};
use crate::property::{Prop, PropertyStore};
use crate::render::{RenderTarget, Renderer};
use formwork_types::{AttrValue, AttributeStore, Value, ValueExt};
use serde_json::json;
use std::fmt;
use std::sync::Arc;

pub type RenderCallback = Arc<dyn Fn(&mut Element) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Element,
    Field,
    Form,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Element => "element",
            ElementKind::Field => "field",
            ElementKind::Form => "form",
        }
    }

    pub(crate) fn hooks(self) -> &'static HookTable {
        match self {
            ElementKind::Element => &ELEMENT_HOOKS,
            ElementKind::Field => &FIELD_HOOKS,
            ElementKind::Form => &FORM_HOOKS,
        }
    }

    fn defaults(self) -> Vec<(&'static str, Prop)> {
        match self {
            ElementKind::Element => vec![("tag", "div".into()), ("value", Prop::NULL)],
            ElementKind::Form => vec![("tag", "form".into()), ("value", Prop::NULL)],
            ElementKind::Field => vec![
                ("tag", "input".into()),
                ("name", Prop::NULL),
                ("slug", Prop::NULL),
                ("rowable", true.into()),
                ("type", "text".into()),
                ("rules", "".into()),
                ("options", json!([]).into()),
                ("variables", json!([]).into()),
                ("description", Prop::NULL),
                ("multiple", false.into()),
                ("baseNames", json!([]).into()),
                ("label", Prop::NULL),
                ("ignoreLabel", false.into()),
                ("ignoreDescription", false.into()),
                ("value", Prop::NULL),
                ("checkable", Prop::NULL),
                ("checkable-format", Prop::NULL),
                ("row", Prop::NULL),
                ("order", Prop::NULL),
                ("view", Prop::NULL),
                ("container", Element::new().with_class("form-group").into()),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Prepend,
    Append,
}

/// Elements rendered immediately before or after their owner.
///
/// Within one list, inserting an element whose slug is already present
/// replaces the earlier one in place.
#[derive(Debug, Clone, Default)]
pub struct Appendages {
    prepend: Vec<Element>,
    append: Vec<Element>,
}

impl Appendages {
    pub fn get(&self, placement: Placement) -> &[Element] {
        match placement {
            Placement::Prepend => &self.prepend,
            Placement::Append => &self.append,
        }
    }

    fn list_mut(&mut self, placement: Placement) -> &mut Vec<Element> {
        match placement {
            Placement::Prepend => &mut self.prepend,
            Placement::Append => &mut self.append,
        }
    }

    pub fn insert(&mut self, placement: Placement, element: Element) -> &mut Element {
        let list = self.list_mut(placement);
        let existing = element
            .slug()
            .and_then(|slug| list.iter().position(|e| e.slug().as_deref() == Some(slug.as_str())));
        let index = match existing {
            Some(index) => {
                list[index] = element;
                index
            }
            None => {
                list.push(element);
                list.len() - 1
            }
        };
        &mut list[index]
    }

    pub fn is_empty(&self) -> bool {
        self.prepend.is_empty() && self.append.is_empty()
    }
}

#[derive(Clone)]
pub struct Element {
    kind: ElementKind,
    attributes: AttributeStore,
    properties: PropertyStore,
    appendages: Appendages,
    render_callback: Option<RenderCallback>,
    renderer: Option<Arc<dyn Renderer>>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("attributes", &self.attributes)
            .field("properties", &self.properties)
            .field("appendages", &self.appendages)
            .field("render_callback", &self.render_callback.is_some())
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl Element {
    pub fn new() -> Self {
        Self::of_kind(ElementKind::Element)
    }

    pub(crate) fn of_kind(kind: ElementKind) -> Self {
        let mut properties = PropertyStore::new();
        for (name, value) in kind.defaults() {
            properties.insert(name, value);
        }
        Self {
            kind,
            attributes: AttributeStore::new(),
            properties,
            appendages: Appendages::default(),
            render_callback: None,
            renderer: None,
        }
    }

    /// An element from a property object and an attribute object.
    pub fn make(properties: Value, attributes: Value) -> Self {
        Self::new().with_properties(properties).with_attributes(attributes)
    }

    /// A fresh element sharing this element's renderer.
    pub fn new_instance(&self, properties: Value, attributes: Value) -> Element {
        let mut element = Element::make(properties, attributes);
        element.renderer = self.renderer.clone();
        element
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    // --- generic access -------------------------------------------------

    /// Stores `value` as a property if `key` is a known property name,
    /// otherwise as an attribute.
    pub fn set(&mut self, key: &str, value: impl Into<Prop>) -> &mut Self {
        if self.properties.contains(key) {
            return self.set_property(key, value);
        }
        match value.into().resolve() {
            Prop::Value(value) => {
                self.attributes.set(key, value);
            }
            Prop::Element(_) | Prop::Lazy(_) => {
                log::warn!("Attribute '{key}' only accepts plain values; ignoring");
            }
        }
        self
    }

    /// Reads a property or attribute, `default` when absent.
    pub fn get(&self, key: &str, default: Value) -> Value {
        if self.properties.contains(key) {
            return self.get_property(key, default).into_value();
        }
        match self.attributes.get(key) {
            Some(AttrValue::Text(text)) => Value::from(text.as_str()),
            Some(AttrValue::Flag) => Value::Bool(true),
            Some(AttrValue::List(items)) => Value::from(items.clone()),
            Some(AttrValue::Null) | None => default,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.properties.is_set(key) || self.attributes.get(key).is_some_and(|v| !v.is_null())
    }

    // --- properties -----------------------------------------------------

    pub fn set_property(&mut self, name: &str, value: impl Into<Prop>) -> &mut Self {
        let value = value.into();
        let stored = match self.kind.hooks().setter(name) {
            Some(hook) => hook(self, value).unwrap_or(Prop::NULL),
            None => value,
        };
        self.properties.insert(name, stored);
        self
    }

    /// Sets every key of a JSON object as a property.
    pub fn set_properties(&mut self, properties: Value) -> &mut Self {
        match properties {
            Value::Object(map) => {
                for (name, value) in map {
                    self.set_property(&name, value);
                }
            }
            Value::Null => {}
            other => log::warn!("Expected a property object, got {other}"),
        }
        self
    }

    /// The property value after lazy resolution and the get-hook.
    pub fn get_property(&self, name: &str, default: impl Into<Prop>) -> Prop {
        let stored = match self.properties.get(name) {
            Some(prop) if !prop.is_null() => prop.clone().resolve(),
            _ => default.into(),
        };
        match self.kind.hooks().getter(name) {
            Some(hook) => hook(self, stored),
            None => stored,
        }
    }

    pub fn property_value(&self, name: &str) -> Value {
        self.get_property(name, Prop::NULL).into_value()
    }

    pub fn property_text(&self, name: &str) -> Option<String> {
        match self.property_value(name) {
            Value::Bool(false) => None,
            other => other.as_text(),
        }
    }

    pub fn property_flag(&self, name: &str) -> bool {
        self.property_value(name).is_truthy()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.is_set(name)
    }

    pub fn is_property(&self, name: &str) -> bool {
        self.properties.contains(name)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Prop> {
        self.properties.remove(name)
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn tag(&self) -> String {
        self.property_text("tag").unwrap_or_else(|| "div".to_string())
    }

    pub fn value(&self) -> Value {
        self.property_value("value")
    }

    pub fn slug(&self) -> Option<String> {
        self.property_text("slug").filter(|s| !s.is_empty())
    }

    pub fn container(&self) -> Option<Element> {
        self.get_property("container", Prop::NULL).into_element()
    }

    pub fn container_mut(&mut self) -> Option<&mut Element> {
        match self.properties.get_mut("container") {
            Some(Prop::Element(container)) => Some(container),
            _ => None,
        }
    }

    // --- attributes -----------------------------------------------------

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set(key, value);
        self
    }

    pub fn attr_text(&self, key: &str) -> Option<String> {
        self.attributes.get_text(key)
    }

    /// Overwrites every attribute in `attributes`.
    pub fn fill(&mut self, attributes: AttributeStore) -> &mut Self {
        self.attributes.fill(attributes);
        self
    }

    /// Unions list attributes and classes, overwrites the rest.
    pub fn merge_attributes(&mut self, attributes: &AttributeStore) -> &mut Self {
        self.attributes.merge(attributes);
        self
    }

    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.attributes.add_class(class);
        self
    }

    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        self.attributes.remove_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attributes.has_class(class)
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set_data(key, value);
        self
    }

    pub fn get_data(&self, key: &str) -> Option<String> {
        self.attributes.get_data(key)
    }

    /// Attribute markup through the renderer when one is attached.
    pub fn attribute_string(&self) -> String {
        match &self.renderer {
            Some(renderer) => renderer.attribute_string(&self.attributes),
            None => self.attributes.to_attribute_string(),
        }
    }

    // --- appendages -----------------------------------------------------

    pub fn prepend(&mut self, element: impl Into<Element>) -> &mut Element {
        self.appendages.insert(Placement::Prepend, element.into())
    }

    pub fn append(&mut self, element: impl Into<Element>) -> &mut Element {
        self.appendages.insert(Placement::Append, element.into())
    }

    pub fn prepend_with(&mut self, properties: Value, attributes: Value) -> &mut Element {
        let element = self.new_instance(properties, attributes);
        self.prepend(element)
    }

    pub fn append_with(&mut self, properties: Value, attributes: Value) -> &mut Element {
        let element = self.new_instance(properties, attributes);
        self.append(element)
    }

    pub fn appended(&self, placement: Placement) -> &[Element] {
        self.appendages.get(placement)
    }

    pub fn appendages(&self) -> &Appendages {
        &self.appendages
    }

    // --- rendering ------------------------------------------------------

    /// Registers a callback run on a snapshot of this element right before
    /// it renders.
    pub fn on_render(&mut self, callback: impl Fn(&mut Element) + Send + Sync + 'static) -> &mut Self {
        self.render_callback = Some(Arc::new(callback));
        self
    }

    pub fn set_renderer(&mut self, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn renderer(&self) -> Option<&Arc<dyn Renderer>> {
        self.renderer.as_ref()
    }

    /// The element as it will render: a clone with the render callback
    /// applied.
    pub fn prepared(&self) -> Element {
        let mut snapshot = self.clone();
        if let Some(callback) = &self.render_callback {
            callback(&mut snapshot);
        }
        snapshot
    }

    /// Renders through the attached renderer.
    ///
    /// # Errors
    ///
    /// `RenderError::RendererNotConfigured` when no renderer is attached.
    pub fn html(&self) -> Result<String, RenderError> {
        let renderer = self.renderer.clone().ok_or(RenderError::RendererNotConfigured)?;
        self.html_with(renderer.as_ref())
    }

    pub fn html_with(&self, renderer: &dyn Renderer) -> Result<String, RenderError> {
        let snapshot = self.prepared();
        match snapshot.kind {
            ElementKind::Field => renderer.render(RenderTarget::Field(&Field::from_element(snapshot))),
            _ => renderer.render(RenderTarget::Element(&snapshot)),
        }
    }

    // --- fluent construction --------------------------------------------

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.set_property("tag", tag);
        self
    }

    pub fn with_value(mut self, value: impl Into<Prop>) -> Self {
        self.set_property("value", value);
        self
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<Prop>) -> Self {
        self.set_property(name, value);
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

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.set_properties(properties);
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.attributes.merge(&AttributeStore::from_value(&attributes));
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }
}
