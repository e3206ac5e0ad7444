//! Forms: an ordered set of fields and elements laid out in rows.
//!
//! Fields are added through typed helpers ([`Form::text`], [`Form::select`],
//! ...) or by type name ([`Form::input`], [`Form::add`], [`Form::call`]). A
//! type name resolves to a registered macro first, then to a built-in field
//! type. Each node is keyed by its slug; adding
//! a node with a slug that is already present replaces it in place.
//!
//! Rendering never mutates the form. [`Form::prepared`] produces the snapshot
//! a renderer sees: render callbacks applied and the form's
//! `baseFieldName` pushed onto every field's base names.

mod macros;
mod rows;
mod types;

pub use macros::{FieldArgs, FieldMacro, MacroRegistry, MacroRegistryBuilder};
pub use rows::{Row, RowId};
pub use types::FieldType;

use crate::config::FormConfig;
use crate::element::{Element, ElementKind, RenderCallback};
use crate::error::{FormError, RenderError};
use crate::field::Field;
use crate::node::Node;
use crate::property::Prop;
use crate::render::{RenderTarget, Renderer};
use formwork_types::{AttributeStore, Map, Value, ValueExt};
use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::json;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

pub type FormCallback = Arc<dyn Fn(&mut Form) + Send + Sync>;

#[derive(Clone, Default)]
struct FormCallbacks {
    form: Vec<FormCallback>,
    field: Vec<RenderCallback>,
    element: Vec<RenderCallback>,
}

macro_rules! define_field_helpers {
    ($($method:ident => $variant:ident),* $(,)?) => {
        $(
            pub fn $method(
                &mut self,
                slug: &str,
                value: impl Into<Value>,
                properties: Value,
            ) -> &mut Field {
                self.typed(FieldType::$variant, slug, value.into(), properties)
            }
        )*
    };
}

#[derive(Clone)]
pub struct Form {
    element: Element,
    nodes: Vec<Node>,
    callbacks: FormCallbacks,
    macros: Arc<MacroRegistry>,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("element", &self.element)
            .field("nodes", &self.nodes)
            .field("macros", &self.macros)
            .finish_non_exhaustive()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self::with_config(&FormConfig::default())
    }

    pub fn with_config(config: &FormConfig) -> Self {
        let mut element = Element::of_kind(ElementKind::Form);
        element.set_properties(config.properties());
        Self {
            element,
            nodes: Vec::new(),
            callbacks: FormCallbacks::default(),
            macros: Arc::default(),
        }
    }

    pub fn make(properties: Value, attributes: Value) -> Self {
        Self::new().with_properties(properties).with_attributes(attributes)
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.element.set_properties(properties);
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.element
            .merge_attributes(&AttributeStore::from_value(&attributes));
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.element.set_renderer(renderer);
        self
    }

    pub fn with_macros(mut self, macros: Arc<MacroRegistry>) -> Self {
        self.macros = macros;
        self
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    pub fn macros(&self) -> &MacroRegistry {
        &self.macros
    }

    // --- adding nodes ---------------------------------------------------

    /// Adds a field. A `type` property names a built-in field type or a
    /// registered macro.
    ///
    /// Returns the field stored under `slug`. A macro that adds its fields
    /// under other slugs returns `None`.
    ///
    /// # Errors
    ///
    /// `FormError::UnknownFieldType` when `type` is neither a built-in nor a
    /// registered macro; any error the macro itself returns.
    pub fn add(&mut self, slug: &str, properties: Value) -> Result<Option<&mut Field>, FormError> {
        self.add_with_attributes(slug, properties, Value::Null)
    }

    pub fn add_with_attributes(
        &mut self,
        slug: &str,
        properties: Value,
        attributes: Value,
    ) -> Result<Option<&mut Field>, FormError> {
        let mut properties = into_map(properties);
        let type_name = match properties.get("type") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Null) | None => None,
            Some(other) => return Err(FormError::UnknownFieldType(other.to_text())),
        };
        match type_name {
            Some(name) if self.macros.contains(&name) => {
                properties.remove("type");
                let value = properties.remove("value").unwrap_or(Value::Null);
                if !attributes.is_null() {
                    merge_attr(&mut properties, attributes);
                }
                self.invoke_macro(&name, slug, value, Value::Object(properties))
            }
            Some(name) => {
                let field_type = resolve_type(&name)?;
                Ok(Some(self.insert_field(slug, Some(field_type), properties, attributes)))
            }
            None => Ok(Some(self.insert_field(slug, None, properties, attributes))),
        }
    }

    /// Adds a field of the named type: a registered macro first, then a
    /// built-in.
    ///
    /// # Errors
    ///
    /// `FormError::UnknownFieldType` when `field_type` is neither; any
    /// error the macro itself returns.
    pub fn input(
        &mut self,
        field_type: &str,
        slug: &str,
        value: impl Into<Value>,
        properties: Value,
    ) -> Result<Option<&mut Field>, FormError> {
        let value = value.into();
        if self.macros.contains(field_type) {
            return self.invoke_macro(field_type, slug, value, properties);
        }
        let field_type = resolve_type(field_type)?;
        Ok(Some(self.typed(field_type, slug, value, properties)))
    }

    /// Like [`Form::input`], for callers that only need the side effect.
    ///
    /// # Errors
    ///
    /// `FormError::UnknownFieldType` when `name` is neither a macro nor a
    /// built-in; any error the macro itself returns.
    pub fn call(
        &mut self,
        name: &str,
        slug: &str,
        value: impl Into<Value>,
        properties: Value,
    ) -> Result<(), FormError> {
        self.input(name, slug, value, properties).map(|_| ())
    }

    fn invoke_macro(
        &mut self,
        name: &str,
        slug: &str,
        value: Value,
        properties: Value,
    ) -> Result<Option<&mut Field>, FormError> {
        let Some(factory) = self.macros.get(name).cloned() else {
            return Err(FormError::UnknownFieldType(name.to_string()));
        };
        log::debug!("Invoking field macro '{}' for '{}'", name, slug);
        let args = FieldArgs {
            slug: slug.to_string(),
            value,
            properties,
        };
        factory(self, args)?;
        Ok(self.get_field_mut(slug).and_then(Node::as_field_mut))
    }

    /// Adds a field of a built-in type.
    pub fn typed(
        &mut self,
        field_type: FieldType,
        slug: &str,
        value: Value,
        properties: Value,
    ) -> &mut Field {
        let mut properties = into_map(properties);
        properties.insert("value".to_string(), value);
        properties.insert("type".to_string(), Value::from(field_type.name()));
        self.insert_field(slug, Some(field_type), properties, Value::Null)
    }

    define_field_helpers! {
        text => Text,
        password => Password,
        email => Email,
        number => Number,
        date => Date,
        search => Search,
        tel => Tel,
        url => Url,
        color => Color,
        file => File,
        textarea => Textarea,
        select => Select,
        checkbox => Checkbox,
        radio => Radio,
        button => Button,
        label => Label,
        fieldset => Fieldset,
        legend => Legend,
        optgroup => Optgroup,
        option => Option,
        datalist => Datalist,
        keygen => Keygen,
        output => Output,
    }

    /// A non-rowable hidden input without label or container.
    pub fn hidden(&mut self, slug: &str, value: impl Into<Value>, properties: Value) -> &mut Field {
        let properties = with_defaults(
            json!({"rowable": false, "label": false, "container": false}),
            properties,
        );
        self.typed(FieldType::Hidden, slug, value.into(), properties)
    }

    /// A non-rowable, unnamed `type="submit"` button.
    pub fn submit(&mut self, value: impl Into<Value>, properties: Value) -> &mut Field {
        let properties = with_defaults(
            json!({"rowable": false, "label": false, "attr": {"class": "btn btn-primary"}}),
            properties,
        );
        let button = self.typed(FieldType::Button, "submit", value.into(), properties);
        button.set_attr("type", "submit");
        button.set_property("name", false);
        button
    }

    /// Adds a plain element (or a prebuilt field) to the form.
    pub fn add_element(&mut self, node: impl Into<Node>) -> &mut Node {
        let mut node = node.into();
        if node.renderer().is_none() {
            if let Some(renderer) = self.element.renderer() {
                node.set_renderer(renderer.clone());
            }
        }
        let index = self.insert_node(node);
        &mut self.nodes[index]
    }

    fn insert_field(
        &mut self,
        slug: &str,
        field_type: Option<FieldType>,
        properties: Map<String, Value>,
        attributes: Value,
    ) -> &mut Field {
        let mut merged = field_type.map(FieldType::properties).unwrap_or_default();
        merged.extend(properties);
        merged.insert("slug".to_string(), Value::from(slug));

        let mut field = Field::make(
            Value::Object(merged),
            self.element.property_value("fieldAttributes"),
        );
        if let Some(field_type) = field_type {
            field.merge_attributes(&AttributeStore::from_value(&field_type.attributes()));
        }
        field.merge_attributes(&AttributeStore::from_value(&attributes));
        if let Some(renderer) = self.element.renderer() {
            field.set_renderer(renderer.clone());
        }

        let index = self.insert_node(Node::from(field));
        self.nodes[index].field_slot()
    }

    fn insert_node(&mut self, mut node: Node) -> usize {
        if let Some(extra) = node.remove_property("attr") {
            let extra = AttributeStore::from_value(&extra.into_value());
            node.merge_attributes(&extra);
        }
        if !node.has_property("order") {
            node.set_property("order", self.nodes.len());
        }
        match node.slug().and_then(|slug| self.position(&slug)) {
            Some(index) => {
                log::debug!("Replacing form element '{}'", node.slug().unwrap_or_default());
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn position(&self, slug: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.slug().as_deref() == Some(slug))
    }

    // --- lookup ---------------------------------------------------------

    pub fn get_field(&self, slug: &str) -> Option<&Node> {
        self.position(slug).map(|i| &self.nodes[i])
    }

    pub fn get_field_mut(&mut self, slug: &str) -> Option<&mut Node> {
        self.position(slug).map(move |i| &mut self.nodes[i])
    }

    /// Sets the value of the node under `slug`, if there is one.
    pub fn set_value(&mut self, slug: &str, value: impl Into<Prop>) -> &mut Self {
        if let Some(node) = self.get_field_mut(slug) {
            node.set_property("value", value);
        }
        self
    }

    /// `property` of every node, keyed by slug (or insertion index for
    /// slug-less nodes).
    pub fn fetch_property(&self, property: &str, default: Value) -> IndexMap<String, Value> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let key = node.slug().unwrap_or_else(|| i.to_string());
                (key, node.get_property(property, default.clone()).into_value())
            })
            .collect()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // --- layout ---------------------------------------------------------

    /// Nodes stably sorted by their `order` property.
    pub fn ordered(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .sorted_by(|a, b| order_of(a).total_cmp(&order_of(b)))
            .collect()
    }

    /// Rowable nodes grouped into layout rows.
    pub fn rows(&self) -> Vec<Row<'_>> {
        rows::group_rows(self.ordered().into_iter().filter(|n| n.is_rowable()))
    }

    /// Nodes rendered after the rows, outside any row container.
    pub fn non_rowable(&self) -> Vec<&Node> {
        self.ordered()
            .into_iter()
            .filter(|n| !n.is_rowable())
            .collect()
    }

    /// Column-width class for a row holding `row_size` nodes.
    pub fn column_class(&self, row_size: usize) -> String {
        let max_columns = self.number_property("maxColumns", 12);
        let divisor = if self.element.property_flag("sizeColumnsByRow") {
            row_size
        } else {
            self.number_property("perRow", 1)
        };
        let prefix = self.element.property_text("rowClass").unwrap_or_default();
        format!("{}{}", prefix, max_columns / divisor.max(1))
    }

    /// A fresh row container carrying `rowAttributes`.
    pub fn row_element(&self) -> Element {
        self.element
            .new_instance(Value::Null, self.element.property_value("rowAttributes"))
    }

    fn number_property(&self, name: &str, default: usize) -> usize {
        self.element
            .property_value(name)
            .to_number()
            .filter(|n| *n >= 0.0)
            .map_or(default, |n| n as usize)
    }

    // --- callbacks ------------------------------------------------------

    pub fn on_render_form(&mut self, callback: impl Fn(&mut Form) + Send + Sync + 'static) -> &mut Self {
        self.callbacks.form.push(Arc::new(callback));
        self
    }

    pub fn on_render_field(
        &mut self,
        callback: impl Fn(&mut Element) + Send + Sync + 'static,
    ) -> &mut Self {
        self.callbacks.field.push(Arc::new(callback));
        self
    }

    pub fn on_render_element(
        &mut self,
        callback: impl Fn(&mut Element) + Send + Sync + 'static,
    ) -> &mut Self {
        self.callbacks.element.push(Arc::new(callback));
        self
    }

    // --- rendering ------------------------------------------------------

    /// The form as a renderer sees it. See the module docs.
    pub fn prepared(&self) -> Form {
        let mut form = self.clone();
        for callback in &self.callbacks.form {
            callback(&mut form);
        }
        form.element = form.element.prepared();

        let base = form
            .element
            .property_text("baseFieldName")
            .filter(|b| !b.is_empty());
        for node in &mut form.nodes {
            if let (Some(base), Some(field)) = (&base, node.as_field_mut()) {
                field.add_name(base.as_str(), true);
            }
            let callbacks = if node.is_field() {
                &self.callbacks.field
            } else {
                &self.callbacks.element
            };
            for callback in callbacks {
                let element: &mut Element = &mut *node;
                callback(element);
            }
        }
        form
    }

    /// # Errors
    ///
    /// `RenderError::RendererNotConfigured` when no renderer is attached.
    pub fn open(&self) -> Result<String, RenderError> {
        self.renderer_or_err()?.render_form_open(&self.prepared())
    }

    /// # Errors
    ///
    /// `RenderError::RendererNotConfigured` when no renderer is attached.
    pub fn close(&self) -> Result<String, RenderError> {
        self.renderer_or_err()?.render_form_close(&self.prepared())
    }

    /// # Errors
    ///
    /// `RenderError::RendererNotConfigured` when no renderer is attached.
    pub fn html(&self) -> Result<String, RenderError> {
        let renderer = self.renderer_or_err()?;
        self.html_with(renderer.as_ref())
    }

    pub fn html_with(&self, renderer: &dyn Renderer) -> Result<String, RenderError> {
        let form = self.prepared();
        log::debug!("Rendering form with {} elements", form.len());
        renderer.render(RenderTarget::Form(&form))
    }

    fn renderer_or_err(&self) -> Result<Arc<dyn Renderer>, RenderError> {
        self.element
            .renderer()
            .cloned()
            .ok_or(RenderError::RendererNotConfigured)
    }
}

impl Deref for Form {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.element
    }
}

impl DerefMut for Form {
    fn deref_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}

fn resolve_type(name: &str) -> Result<FieldType, FormError> {
    FieldType::from_name(name).ok_or_else(|| FormError::UnknownFieldType(name.to_string()))
}

fn order_of(node: &Node) -> f64 {
    node.property_value("order").to_number().unwrap_or(f64::MAX)
}

/// Folds `attributes` into the `attr` pseudo-property, which
/// `insert_node` merges into the node's attributes.
fn merge_attr(properties: &mut Map<String, Value>, attributes: Value) {
    let mut attr = properties.remove("attr").map(into_map).unwrap_or_default();
    attr.extend(into_map(attributes));
    properties.insert("attr".to_string(), Value::Object(attr));
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            log::warn!("Expected a property object, got {other}");
            Map::new()
        }
    }
}

/// `defaults` overridden key by key by `overrides`.
fn with_defaults(defaults: Value, overrides: Value) -> Value {
    let mut merged = into_map(defaults);
    merged.extend(into_map(overrides));
    Value::Object(merged)
}
