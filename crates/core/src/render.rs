//! The renderer seam.
//!
//! Elements, fields and forms hold an optional shared [`Renderer`] and
//! delegate markup generation to it.

use crate::element::{Element, ElementKind};
use crate::error::RenderError;
use crate::field::Field;
use crate::form::Form;
use formwork_types::AttributeStore;
use std::fmt::Debug;

/// What is being rendered.
#[derive(Debug, Clone, Copy)]
pub enum RenderTarget<'a> {
    Element(&'a Element),
    Field(&'a Field),
    Form(&'a Form),
}

impl RenderTarget<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            RenderTarget::Element(_) => ElementKind::Element,
            RenderTarget::Field(_) => ElementKind::Field,
            RenderTarget::Form(_) => ElementKind::Form,
        }
    }

    /// The underlying element (a form's own `<form>` element).
    pub fn element(&self) -> &Element {
        match self {
            RenderTarget::Element(element) => element,
            RenderTarget::Field(field) => field,
            RenderTarget::Form(form) => form,
        }
    }
}

pub trait Renderer: Send + Sync + Debug {
    /// Full markup for `target`, including appendages and container.
    fn render(&self, target: RenderTarget<'_>) -> Result<String, RenderError>;

    /// The opening `<form>` tag plus anything injected right after it.
    fn render_form_open(&self, form: &Form) -> Result<String, RenderError>;

    /// Anything injected before the closing tag, then `</form>`.
    fn render_form_close(&self, form: &Form) -> Result<String, RenderError>;

    fn attribute_string(&self, attributes: &AttributeStore) -> String {
        attributes.to_attribute_string()
    }
}
