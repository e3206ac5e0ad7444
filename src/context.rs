//! The bootstrap context.
//!
//! A [`Formwork`] is built once at startup and holds what every form,
//! table and helper needs: the configuration, the shared renderer, the
//! field macro registry and the URL generator. Objects it creates carry
//! their own references, so the context can be dropped afterwards.

use crate::config::FormworkConfig;
use crate::error::FormworkError;
use formwork_core::{Element, Field, FieldArgs, Form, FormError, MacroRegistry, Renderer};
use formwork_core::form::MacroRegistryBuilder;
use formwork_html::{BreadCrumbs, FormHelpers, HtmlBuilder};
use formwork_render_html::HtmlRenderer;
use formwork_table::Table;
use formwork_traits::{CsrfTokenProvider, OldInput, StaticToken, UrlGenerator, ValidationErrors};
use formwork_types::Value;
use std::fmt;
use std::sync::Arc;

/// Shared state for building and rendering forms.
#[derive(Clone)]
pub struct Formwork {
    config: FormworkConfig,
    renderer: Option<Arc<dyn Renderer>>,
    macros: Arc<MacroRegistry>,
    url: Option<Arc<dyn UrlGenerator>>,
}

impl fmt::Debug for Formwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formwork")
            .field("config", &self.config)
            .field("renderer", &self.renderer)
            .field("macros", &self.macros.len())
            .field("url", &self.url)
            .finish()
    }
}

impl Formwork {
    pub fn builder() -> FormworkBuilder {
        FormworkBuilder::default()
    }

    pub fn config(&self) -> &FormworkConfig {
        &self.config
    }

    /// # Errors
    ///
    /// `FormworkError::RendererNotConfigured` when the context was built
    /// without a renderer.
    pub fn renderer(&self) -> Result<&Arc<dyn Renderer>, FormworkError> {
        self.renderer.as_ref().ok_or(FormworkError::RendererNotConfigured)
    }

    pub fn macros(&self) -> &Arc<MacroRegistry> {
        &self.macros
    }

    /// A new form with the configured defaults, macros and renderer.
    pub fn form(&self) -> Form {
        let form = Form::with_config(&self.config.form).with_macros(Arc::clone(&self.macros));
        match &self.renderer {
            Some(renderer) => form.with_renderer(Arc::clone(renderer)),
            None => form,
        }
    }

    /// A plain element bound to the configured renderer.
    pub fn element(&self, properties: Value, attributes: Value) -> Element {
        let mut element = Element::make(properties, attributes);
        if let Some(renderer) = &self.renderer {
            element.set_renderer(Arc::clone(renderer));
        }
        element
    }

    /// A standalone field bound to the configured renderer.
    pub fn field(&self, properties: Value, attributes: Value) -> Field {
        let mut field = Field::make(properties, attributes);
        if let Some(renderer) = &self.renderer {
            field.set_renderer(Arc::clone(renderer));
        }
        field
    }

    pub fn table(&self) -> Table {
        Table::with_config(self.config.table.clone())
    }

    /// # Errors
    ///
    /// `FormworkError::Config` when no URL generator was configured.
    pub fn html(&self) -> Result<HtmlBuilder, FormworkError> {
        let url = self.url.as_ref().ok_or_else(|| {
            FormworkError::Config("No URL generator has been configured. Use `with_url_generator`.".to_string())
        })?;
        Ok(HtmlBuilder::new(Arc::clone(url)))
    }

    pub fn form_helpers(&self) -> Result<FormHelpers, FormworkError> {
        Ok(FormHelpers::new(self.html()?))
    }

    pub fn breadcrumbs(&self) -> Result<BreadCrumbs, FormworkError> {
        Ok(BreadCrumbs::new(self.html()?))
    }

    /// Renders `form` with the context renderer, whatever renderer the
    /// form itself carries.
    pub fn render_form(&self, form: &Form) -> Result<String, FormworkError> {
        let renderer = self.renderer()?;
        Ok(form.html_with(renderer.as_ref())?)
    }
}

/// A builder for creating a [`Formwork`] context.
#[derive(Default)]
pub struct FormworkBuilder {
    config: FormworkConfig,
    renderer: Option<Arc<dyn Renderer>>,
    html: Option<HtmlParts>,
    macros: MacroRegistryBuilder,
    url: Option<Arc<dyn UrlGenerator>>,
}

/// Collaborators for the built-in HTML renderer, assembled at `build`.
#[derive(Default)]
struct HtmlParts {
    errors: Option<Arc<dyn ValidationErrors>>,
    old_input: Option<Arc<dyn OldInput>>,
    csrf: Option<Arc<dyn CsrfTokenProvider>>,
}

impl FormworkBuilder {
    pub fn with_config(mut self, config: FormworkConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON string.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, FormworkError> {
        self.config = FormworkConfig::from_json(json)?;
        Ok(self)
    }

    /// Uses a custom renderer. Overrides [`Self::with_html_renderer`].
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Uses the built-in [`HtmlRenderer`], configured from
    /// `FormworkConfig::renderer`. Forms get a random CSRF token unless
    /// [`Self::with_csrf`] supplies one.
    pub fn with_html_renderer(mut self) -> Self {
        self.html.get_or_insert_with(HtmlParts::default);
        self
    }

    pub fn with_errors(mut self, errors: Arc<dyn ValidationErrors>) -> Self {
        self.html.get_or_insert_with(HtmlParts::default).errors = Some(errors);
        self
    }

    pub fn with_old_input(mut self, old_input: Arc<dyn OldInput>) -> Self {
        self.html.get_or_insert_with(HtmlParts::default).old_input = Some(old_input);
        self
    }

    pub fn with_csrf(mut self, csrf: Arc<dyn CsrfTokenProvider>) -> Self {
        self.html.get_or_insert_with(HtmlParts::default).csrf = Some(csrf);
        self
    }

    /// Registers a field macro, usable as a field type on every form.
    pub fn with_macro<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&mut Form, FieldArgs) -> Result<(), FormError> + Send + Sync + 'static,
    {
        self.macros = self.macros.register(name, factory);
        self
    }

    pub fn with_url_generator(mut self, url: Arc<dyn UrlGenerator>) -> Self {
        self.url = Some(url);
        self
    }

    /// # Errors
    ///
    /// `FormworkError::Config` when the configuration fails validation.
    pub fn build(self) -> Result<Formwork, FormworkError> {
        self.config.validate()?;

        let renderer = match (self.renderer, self.html) {
            (Some(renderer), _) => Some(renderer),
            (None, Some(parts)) => Some(Self::html_renderer(&self.config, parts)),
            (None, None) => None,
        };
        let macros = Arc::new(self.macros.build());
        log::debug!(
            "Built formwork context: renderer={}, {} macros",
            renderer.is_some(),
            macros.len()
        );

        Ok(Formwork {
            config: self.config,
            renderer,
            macros,
            url: self.url,
        })
    }

    fn html_renderer(config: &FormworkConfig, parts: HtmlParts) -> Arc<dyn Renderer> {
        let csrf = parts
            .csrf
            .unwrap_or_else(|| Arc::new(StaticToken::random()));
        let mut renderer = HtmlRenderer::new()
            .with_config(config.renderer.clone())
            .with_csrf(csrf);
        if let Some(errors) = parts.errors {
            renderer = renderer.with_errors(errors);
        }
        if let Some(old_input) = parts.old_input {
            renderer = renderer.with_old_input(old_input);
        }
        renderer.into_shared()
    }
}
