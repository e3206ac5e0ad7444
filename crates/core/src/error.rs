use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("No renderer configured for this element")]
    RendererNotConfigured,
    #[error("Template rendering error: {0}")]
    Template(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown field type '{0}': not a built-in type or registered macro")]
    UnknownFieldType(String),
    #[error("Field macro '{name}' failed: {message}")]
    Macro { name: String, message: String },
    #[error(transparent)]
    Render(#[from] RenderError),
}
