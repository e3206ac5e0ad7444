//! HTML renderer for formwork.
//!
//! [`HtmlRenderer`] turns elements, fields and forms into markup strings,
//! consulting optional collaborators for validation errors, previously
//! submitted input and the CSRF token.

mod config;
mod events;
mod options;
mod renderer;
mod views;

pub use config::RendererConfig;
pub use events::{ANY_EVENT, EventDispatcher, Listener, RenderEvent};
pub use options::{input_options, select_options};
pub use renderer::HtmlRenderer;
pub use views::FieldViews;
