//! Collaborator traits consumed by the renderers.
//!
//! The form renderer reads request state through these seams instead of a
//! framework session: validation errors from the previous submission, the
//! previously submitted input, the CSRF token, and URL generation for links.
//! Each trait ships with an in-memory implementation.

pub mod errors;
pub mod input;
pub mod token;
pub mod url;

pub use errors::{MessageBag, ValidationErrors};
pub use input::{InMemoryOldInput, OldInput};
pub use token::{CsrfTokenProvider, StaticToken};
pub use url::{BaseUrlGenerator, UrlError, UrlGenerator};
