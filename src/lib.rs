//! Object-oriented builders for HTML forms, fields, tables and breadcrumb
//! trails.
//!
//! The workspace is split by concern:
//!
//! - [`formwork_types`]: dynamic values, attribute storage and escaping.
//! - [`formwork_traits`]: request-state collaborators (validation errors,
//!   old input, CSRF tokens, URL generation).
//! - [`formwork_core`]: the element, field and form model.
//! - [`formwork_render_html`]: the HTML renderer.
//! - [`formwork_table`] and [`formwork_html`]: tables and markup helpers.
//!
//! This crate ties them together behind a [`Formwork`] context:
//!
//! ```no_run
//! use formwork::{Formwork, json};
//!
//! let formwork = Formwork::builder().with_html_renderer().build()?;
//! let mut form = formwork.form();
//! form.text("email", "", json!({"label": "Email"}));
//! form.submit("Save", json!({}));
//! println!("{}", form.html()?);
//! # Ok::<(), formwork::FormworkError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;

pub use config::FormworkConfig;
pub use context::{Formwork, FormworkBuilder};
pub use error::FormworkError;

pub use formwork_core::{
    BaseNames, Checkable, Element, ElementKind, Field, FieldArgs, FieldType, Form, FormConfig,
    FormError, LazyValue, MacroRegistry, NameSegment, Node, Placement, Prop, RenderError,
    RenderTarget, Renderer,
};
pub use formwork_html::{ActionButton, Atts, BreadCrumbs, FormHelpers, HtmlBuilder, Routable};
pub use formwork_render_html::{HtmlRenderer, RendererConfig};
pub use formwork_table::{Cell, Table, TableConfig};
pub use formwork_traits::{
    BaseUrlGenerator, CsrfTokenProvider, InMemoryOldInput, MessageBag, OldInput, StaticToken,
    UrlGenerator, ValidationErrors,
};
pub use formwork_types::{AttrValue, AttributeStore, Value, escape};
pub use serde_json::json;

