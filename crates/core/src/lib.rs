//! Element, field and form model.
//!
//! This crate holds the renderer-agnostic half of formwork: attribute and
//! property storage, field naming, form row layout and the [`Renderer`]
//! trait that concrete renderers implement.

pub mod config;
pub mod element;
pub mod error;
pub mod field;
pub mod form;
pub mod hooks;
pub mod naming;
pub mod node;
pub mod property;
pub mod render;

pub use config::FormConfig;
pub use element::{Appendages, Element, ElementKind, Placement, RenderCallback};
pub use error::{FormError, RenderError};
pub use field::{Checkable, Field};
pub use form::{FieldArgs, FieldMacro, FieldType, Form, MacroRegistry, Row, RowId};
pub use naming::{BaseNames, NameSegment};
pub use node::Node;
pub use property::{LazyValue, Prop, PropertyStore};
pub use render::{RenderTarget, Renderer};
