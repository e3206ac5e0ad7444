use formwork_types::Value;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Form-wide defaults, applied as a new form's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Emit the hidden CSRF token field before `</form>`.
    pub csrf_token: bool,
    /// Add `enctype="multipart/form-data"`.
    pub files: bool,
    pub max_columns: u32,
    pub per_row: u32,
    /// Size columns by each row's element count rather than `per_row`.
    pub size_columns_by_row: bool,
    pub row_class: String,
    pub row_attributes_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            csrf_token: true,
            files: false,
            max_columns: 12,
            per_row: 1,
            size_columns_by_row: true,
            row_class: "col-md-".to_string(),
            row_attributes_class: "field-row row".to_string(),
        }
    }
}

impl FormConfig {
    pub fn properties(&self) -> Value {
        json!({
            "csrfToken": self.csrf_token,
            "perRow": self.per_row,
            "files": self.files,
            "maxColumns": self.max_columns,
            "rowClass": self.row_class,
            "sizeColumnsByRow": self.size_columns_by_row,
            "baseFieldName": null,
            "rowAttributes": { "class": self.row_attributes_class },
            "fieldAttributes": {},
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: FormConfig = serde_json::from_str(r#"{"max_columns": 24, "files": true}"#).unwrap();
        assert_eq!(config.max_columns, 24);
        assert!(config.files);
        assert!(config.csrf_token);
        assert_eq!(config.row_class, "col-md-");
    }

    #[test]
    fn test_properties() {
        let props = FormConfig::default().properties();
        assert_eq!(props["maxColumns"], 12);
        assert_eq!(props["rowAttributes"]["class"], "field-row row");
        assert_eq!(props["baseFieldName"], Value::Null);
    }
}
