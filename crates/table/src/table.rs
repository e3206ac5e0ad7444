//! The table builder.
//!
//! Cells are stored by row id and column slug. Rendering works on a copy:
//! the builder callback and the per-item row builder populate it just in
//! time, so a table can be rendered repeatedly with the same result.

use crate::cell::Cell;
use crate::config::TableConfig;
use formwork_types::{AttrValue, AttributeStore, Value, ValueExt};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub type TableBuilder = Arc<dyn Fn(&mut Table) + Send + Sync>;
/// Called once per item with the item and its index.
pub type RowBuilder = Arc<dyn Fn(&mut Table, &Value, usize) + Send + Sync>;
pub type CellCallback = Arc<dyn Fn(&mut Cell) + Send + Sync>;

#[derive(Clone, Default)]
pub struct Table {
    attributes: AttributeStore,
    row_attributes: AttributeStore,
    headers: IndexMap<String, Cell>,
    rows: IndexMap<String, IndexMap<String, Cell>>,
    config: TableConfig,
    items: Vec<Value>,
    builder: Option<TableBuilder>,
    row_builder: Option<RowBuilder>,
    empty_callback: Option<CellCallback>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("attributes", &self.attributes)
            .field("headers", &self.headers)
            .field("rows", &self.rows)
            .field("config", &self.config)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Attributes applied to every body row.
    pub fn row_attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.row_attributes
    }

    // --- cells ----------------------------------------------------------

    /// Declares (or replaces) a column. The label defaults to the slug.
    pub fn header(&mut self, slug: &str, label: Option<&str>) -> &mut Cell {
        let cell = Cell::header(label.unwrap_or(slug));
        self.headers.insert(slug.to_string(), cell);
        &mut self.headers[slug]
    }

    /// Declares one column per label, keyed by the slugified label.
    pub fn headers_from_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for label in labels {
            let slug = slug::slugify(label);
            self.header(&slug, Some(label));
        }
        self
    }

    /// Stores (or replaces) the cell at `row`/`column`.
    pub fn cell(&mut self, row: impl ToString, column: &str, cell: impl Into<Cell>) -> &mut Cell {
        let columns = self.rows.entry(row.to_string()).or_default();
        columns.insert(column.to_string(), cell.into());
        &mut columns[column]
    }

    /// Stores the cell for `model`, keyed by its `id`.
    pub fn entity(&mut self, model: &Value, column: &str, cell: impl Into<Cell>) -> &mut Cell {
        let id = model.get("id").map(ValueExt::to_text).unwrap_or_default();
        self.cell(id, column, cell)
    }

    /// The cell at `row`/`column`, created empty if missing.
    pub fn get_cell(&mut self, row: impl ToString, column: &str) -> &mut Cell {
        self.rows
            .entry(row.to_string())
            .or_default()
            .entry(column.to_string())
            .or_default()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Body cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    // --- population -----------------------------------------------------

    pub fn set_builder(&mut self, builder: impl Fn(&mut Table) + Send + Sync + 'static) -> &mut Self {
        self.builder = Some(Arc::new(builder));
        self
    }

    /// Items fed one by one to the row builder at render time.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Value>) -> &mut Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn set_row_builder(
        &mut self,
        builder: impl Fn(&mut Table, &Value, usize) + Send + Sync + 'static,
    ) -> &mut Self {
        self.row_builder = Some(Arc::new(builder));
        self
    }

    // --- options --------------------------------------------------------

    pub fn skip_headers(&mut self, skip: bool) -> &mut Self {
        self.config.skip_headers = skip;
        self
    }

    pub fn set_datatable(&mut self, datatable: bool) -> &mut Self {
        self.config.datatable = datatable;
        self
    }

    pub fn empty_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.config.empty_message = message.into();
        self
    }

    /// Customises the cell shown when the table has no body cells.
    pub fn set_empty_message_callback(
        &mut self,
        callback: impl Fn(&mut Cell) + Send + Sync + 'static,
    ) -> &mut Self {
        self.empty_callback = Some(Arc::new(callback));
        self
    }

    // --- rendering ------------------------------------------------------

    pub fn render(&self) -> String {
        let mut table = self.clone();
        if let Some(builder) = &self.builder {
            builder(&mut table);
        }
        if let Some(row_builder) = &self.row_builder {
            for (index, item) in self.items.iter().enumerate() {
                row_builder(&mut table, item, index);
            }
        }
        log::debug!(
            "Rendering table: {} columns, {} rows",
            table.header_count(),
            table.rows.len()
        );
        table.markup()
    }

    fn markup(&mut self) -> String {
        if self.config.datatable {
            self.attributes.set("data-datatable", "true");
        }

        let mut lines = vec![format!("<table{}>", self.attributes)];
        if !self.config.skip_headers && !self.headers.is_empty() {
            let headers: String = self.headers.values().map(Cell::render).collect();
            lines.push(format!("<thead><tr>{headers}</tr></thead>"));
        }
        lines.push(format!("<tbody>{}</tbody>", self.body()));
        lines.push("</table>".to_string());
        lines.join("\n")
    }

    fn body(&self) -> String {
        if self.is_empty() {
            let mut cell = Cell::new(self.config.empty_message.as_str())
                .with_attr("colspan", self.header_count().max(1).to_string());
            if let Some(callback) = &self.empty_callback {
                callback(&mut cell);
            }
            return format!("<tr{}>{}</tr>", self.row_attributes, cell.render());
        }

        self.rows
            .values()
            .map(|columns| {
                let cells: String = if self.headers.is_empty() {
                    columns.values().map(Cell::render).collect()
                } else {
                    self.headers
                        .keys()
                        .filter_map(|slug| columns.get(slug))
                        .map(Cell::render)
                        .collect()
                };
                format!("<tr{}>{}</tr>", self.row_attributes, cells)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
