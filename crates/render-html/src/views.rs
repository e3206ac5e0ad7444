//! Handlebars field views.
//!
//! A view replaces the built-in control markup of a field. Views are looked
//! up by the field's `view` property first, then by its field type. The
//! label, description, error message and container still wrap the result.

use formwork_core::RenderError;
use formwork_types::Value;
use handlebars::Handlebars;

#[derive(Debug, Clone)]
pub struct FieldViews {
    registry: Handlebars<'static>,
}

impl Default for FieldViews {
    fn default() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        Self { registry }
    }
}

impl FieldViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `template` under `name` (a view name or a field type).
    ///
    /// # Errors
    ///
    /// `RenderError::Template` when the template does not parse.
    pub fn register(&mut self, name: &str, template: &str) -> Result<(), RenderError> {
        self.registry
            .register_template_string(name, template)
            .map_err(|e| RenderError::Template(e.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    pub fn render(&self, name: &str, context: &Value) -> Result<String, RenderError> {
        self.registry
            .render(name, context)
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}
