use serde::{Deserialize, Serialize};

/// Class names and reserved field names used by [`crate::HtmlRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub label_class: String,
    pub description_class: String,
    pub error_message_class: String,
    /// Added to a field's container when the field has an error.
    pub error_state_class: String,
    pub token_field: String,
    pub method_field: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            label_class: "field-label".to_string(),
            description_class: "field-description".to_string(),
            error_message_class: "error-msg".to_string(),
            error_state_class: "has-error".to_string(),
            token_field: "_token".to_string(),
            method_field: "_method".to_string(),
        }
    }
}
