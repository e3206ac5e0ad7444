use formwork_core::{FormError, RenderError};
use thiserror::Error;

/// Top-level error for the formwork facade.
#[derive(Error, Debug)]
pub enum FormworkError {
    #[error("No renderer has been configured")]
    RendererNotConfigured,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}
