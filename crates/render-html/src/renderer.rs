//! Markup generation.
//!
//! Every target renders in three steps: its own markup, then its prepend
//! and append appendages (one per line around it), then its container, if
//! it has one, with the whole result as the container's body.
//!
//! Fields are decorated on a clone before rendering: name and type
//! attributes, label, description, old-input value and validation error.

use crate::config::RendererConfig;
use crate::events::{EventDispatcher, RenderEvent};
use crate::options;
use crate::views::FieldViews;
use formwork_core::{
    Checkable, Element, Field, Form, Placement, RenderError, RenderTarget, Renderer,
};
use formwork_traits::{CsrfTokenProvider, OldInput, ValidationErrors};
use formwork_types::{AttributeStore, Value, ValueExt, escape};
use serde_json::json;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RendererConfig,
    errors: Option<Arc<dyn ValidationErrors>>,
    old_input: Option<Arc<dyn OldInput>>,
    csrf: Option<Arc<dyn CsrfTokenProvider>>,
    events: EventDispatcher,
    views: FieldViews,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_errors(mut self, errors: Arc<dyn ValidationErrors>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_old_input(mut self, old_input: Arc<dyn OldInput>) -> Self {
        self.old_input = Some(old_input);
        self
    }

    pub fn with_csrf(mut self, csrf: Arc<dyn CsrfTokenProvider>) -> Self {
        self.csrf = Some(csrf);
        self
    }

    /// Adds a listener for `event` (`form.rendering:field`, ...) or for
    /// every event with [`crate::ANY_EVENT`].
    pub fn listen(
        mut self,
        event: &str,
        listener: impl Fn(&RenderEvent<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.events.listen(event, Arc::new(listener));
        self
    }

    /// Registers a Handlebars view for a field type or a named view.
    ///
    /// # Errors
    ///
    /// `RenderError::Template` when the template does not parse.
    pub fn with_field_view(mut self, name: &str, template: &str) -> Result<Self, RenderError> {
        self.views.register(name, template)?;
        Ok(self)
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn into_shared(self) -> Arc<dyn Renderer> {
        Arc::new(self)
    }

    /// `<tag attrs>body</tag>`; an `input` without an explicit body has
    /// no content.
    ///
    /// Without an explicit body, the element's `value` is emitted as is. It
    /// is trusted markup: callers escape user text before setting it on a
    /// plain element. Field bodies arrive here already escaped.
    fn element_html(&self, element: &Element, body: Option<String>) -> String {
        let tag = element.tag();
        let attributes = self.attribute_string(element.attributes());
        let body = match body {
            Some(body) => body,
            None if tag == "input" => String::new(),
            None => element.value().to_text(),
        };
        format!("<{tag}{attributes}>{body}</{tag}>")
    }

    fn hidden_input(&self, name: &str, value: &str) -> String {
        let mut attributes = AttributeStore::new();
        attributes
            .set("type", "hidden")
            .set("name", name)
            .set("value", value);
        format!("<input{}></input>", self.attribute_string(&attributes))
    }

    fn wrap(&self, element: &Element, body: String) -> Result<String, RenderError> {
        let mut parts = Vec::new();
        for prepended in element.appended(Placement::Prepend) {
            parts.push(prepended.html_with(self)?);
        }
        parts.push(body);
        for appended in element.appended(Placement::Append) {
            parts.push(appended.html_with(self)?);
        }
        let output = parts.join("\n");
        Ok(match element.container() {
            Some(container) => self.element_html(&container, Some(output)),
            None => output,
        })
    }

    fn decorate_field(&self, field: &Field) -> Field {
        let mut field = field.clone();
        let name = field.name();
        let checkable = field.checkable();

        // Checkable inputs carry name and type on each option instead.
        if checkable != Some(Checkable::Input) {
            if let Some(name) = &name {
                field.set_attr("name", name.as_str());
            }
            if matches!(field.tag().as_str(), "input" | "button") && field.attr_text("type").is_none() {
                let field_type = field.field_type();
                field.set_attr("type", field_type);
            }
        }
        if checkable == Some(Checkable::Select) && field.is_multiple() {
            field.set_attr("multiple", true);
        }

        if !field.ignores_label() {
            if let Some(mut label) = field.label() {
                label.add_class(&self.config.label_class);
                label.set_property("slug", "label");
                field.prepend(label);
            }
        }
        if !field.ignores_description() {
            if let Some(description) = field.description() {
                let description = Element::new()
                    .with_prop("slug", "description")
                    .with_value(description)
                    .with_class(&self.config.description_class);
                field.append(description);
            }
        }

        let value = field
            .dot_name()
            .and_then(|dotted| self.old_input.as_ref()?.get(&dotted))
            .unwrap_or_else(|| field.value());
        field.set_property("value", value);

        if let Some(errors) = &self.errors {
            let key = [field.slug(), field.dot_name()]
                .into_iter()
                .flatten()
                .find(|key| errors.has(key));
            if let Some(key) = key {
                let message = errors.first(&key).unwrap_or_default();
                let error = Element::new()
                    .with_prop("slug", "errMsg")
                    .with_value(escape(&message).into_owned())
                    .with_class(&self.config.error_message_class);
                field.append(error);
                if let Some(container) = field.container_mut() {
                    container.add_class(&self.config.error_state_class);
                }
            }
        }
        field
    }

    fn field_html(&self, field: &Field) -> Result<String, RenderError> {
        if let Some(view) = self.view_for(field) {
            return self.views.render(&view, &self.view_context(field));
        }
        let value = field.value();
        let html = match field.checkable() {
            Some(Checkable::Input) => {
                let inputs = options::input_options(field, &value, |a| self.attribute_string(a));
                self.element_html(field, Some(inputs))
            }
            Some(Checkable::Select) => {
                self.element_html(field, Some(options::select_options(field, &value)))
            }
            None if field.tag() == "input" => {
                let mut control = field.element().clone();
                if !value.is_null() {
                    control.set_attr("value", value.to_text());
                }
                self.element_html(&control, None)
            }
            None => self.element_html(field, Some(escape(&value.to_text()).into_owned())),
        };
        Ok(html)
    }

    fn view_for(&self, field: &Field) -> Option<String> {
        if let Some(view) = field.property_text("view").filter(|v| self.views.has(v)) {
            return Some(view);
        }
        let field_type = field.field_type();
        self.views.has(&field_type).then_some(field_type)
    }

    fn view_context(&self, field: &Field) -> Value {
        json!({
            "name": field.name(),
            "slug": field.slug(),
            "type": field.field_type(),
            "value": field.value(),
            "attributes": self.attribute_string(field.attributes()),
            "label": field.label().map(|label| label.value().to_text()),
            "description": field.description(),
            "options": field.options(),
        })
    }

    fn form_html(&self, form: &Form) -> Result<String, RenderError> {
        let rows = form.rows();
        let mut parts = Vec::with_capacity(rows.len());
        for row in &rows {
            let column = form.column_class(row.len());
            let cells = row
                .nodes
                .iter()
                .map(|node| {
                    let mut node = (*node).clone();
                    if let Some(container) = node.container_mut() {
                        container.add_class(&column);
                    }
                    node.html_with(self)
                })
                .collect::<Result<Vec<_>, _>>()?;
            parts.push(self.element_html(&form.row_element(), Some(cells.join("\n"))));
        }
        let loose = form.non_rowable();
        for node in &loose {
            parts.push(node.html_with(self)?);
        }
        log::debug!("Rendered form: {} rows, {} non-rowable elements", rows.len(), loose.len());

        let open = self.render_form_open(form)?;
        let close = self.render_form_close(form)?;
        Ok(format!("{open}\n{}\n{close}", parts.join("\n")))
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, target: RenderTarget<'_>) -> Result<String, RenderError> {
        let kind = target.kind().as_str();
        self.events.fire("rendering", kind, target);
        let (body, element): (String, Cow<'_, Element>) = match target {
            RenderTarget::Field(field) => {
                self.events.fire("field.rendering", &field.field_type(), target);
                let decorated = self.decorate_field(field);
                let body = self.field_html(&decorated)?;
                (body, Cow::Owned(decorated.into_element()))
            }
            RenderTarget::Form(form) => (self.form_html(form)?, Cow::Borrowed(form.element())),
            RenderTarget::Element(element) => (self.element_html(element, None), Cow::Borrowed(element)),
        };
        self.events.fire("rendered", kind, target);
        self.wrap(&element, body)
    }

    fn render_form_open(&self, form: &Form) -> Result<String, RenderError> {
        let mut element = form.element().clone();
        let verb = element
            .attr_text("method")
            .unwrap_or_else(|| "post".to_string())
            .to_uppercase();
        let spoofed = !matches!(verb.as_str(), "GET" | "POST");
        element.set_attr("method", if spoofed { "POST" } else { verb.as_str() });
        if element.property_flag("files") {
            element.set_attr("enctype", "multipart/form-data");
        }

        let mut open = format!("<{}{}>", element.tag(), self.attribute_string(element.attributes()));
        if spoofed {
            open.push('\n');
            open.push_str(&self.hidden_input(&self.config.method_field, &verb));
        }
        Ok(open)
    }

    fn render_form_close(&self, form: &Form) -> Result<String, RenderError> {
        let mut close = String::new();
        if form.property_flag("csrfToken") {
            if let Some(csrf) = &self.csrf {
                close.push_str(&self.hidden_input(&self.config.token_field, &csrf.token()));
                close.push('\n');
            }
        }
        close.push_str(&format!("</{}>", form.tag()));
        Ok(close)
    }
}
