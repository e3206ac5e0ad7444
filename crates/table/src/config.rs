use serde::{Deserialize, Serialize};

pub const DEFAULT_EMPTY_MESSAGE: &str = "Looks like there are no records to display.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Label of the single row shown when the body has no cells.
    pub empty_message: String,
    /// Adds `data-datatable="true"` to the table.
    pub datatable: bool,
    /// Leaves out the `<thead>`.
    pub skip_headers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            datatable: false,
            skip_headers: false,
        }
    }
}
