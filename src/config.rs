use crate::error::FormworkError;
use formwork_core::FormConfig;
use formwork_render_html::RendererConfig;
use formwork_table::TableConfig;
use serde::{Deserialize, Serialize};

/// Settings for everything the [`crate::Formwork`] context builds.
///
/// Every section and every key is optional:
///
/// ```json
/// {
///   "form": { "max_columns": 12, "per_row": 2 },
///   "renderer": { "label_class": "control-label" },
///   "table": { "datatable": true }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormworkConfig {
    pub form: FormConfig,
    pub renderer: RendererConfig,
    pub table: TableConfig,
}

impl FormworkConfig {
    pub fn from_json(json: &str) -> Result<Self, FormworkError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects layouts that cannot produce a column class.
    pub fn validate(&self) -> Result<(), FormworkError> {
        if self.form.max_columns == 0 {
            return Err(FormworkError::Config("form.max_columns must be at least 1".to_string()));
        }
        if self.form.per_row == 0 {
            return Err(FormworkError::Config("form.per_row must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial() {
        let config = FormworkConfig::from_json(r#"{"form": {"per_row": 3}, "table": {"datatable": true}}"#).unwrap();
        assert_eq!(config.form.per_row, 3);
        assert_eq!(config.form.max_columns, 12);
        assert!(config.table.datatable);
        assert_eq!(config.renderer, RendererConfig::default());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(FormworkConfig::from_json("{"), Err(FormworkError::Json(_))));
        assert!(matches!(
            FormworkConfig::from_json(r#"{"form": {"per_row": 0}}"#),
            Err(FormworkError::Config(_))
        ));
    }
}
