use crate::node::Node;
use formwork_types::ValueExt;
use indexmap::IndexMap;

/// One layout row: the nodes sharing a `row` id, or a single ungrouped node.
#[derive(Debug)]
pub struct Row<'a> {
    pub id: RowId,
    pub nodes: Vec<&'a Node>,
}

impl Row<'_> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Caller-assigned through the `row` property.
    Named(String),
    /// A node without a `row`; numbered in encounter order.
    Single(usize),
}

/// Groups already-ordered nodes into rows, keeping the order in which each
/// row is first seen.
pub(crate) fn group_rows<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Vec<Row<'a>> {
    let mut next_single = 0;
    let mut rows: IndexMap<RowId, Vec<&'a Node>> = IndexMap::new();
    for node in nodes {
        let id = match node.property_value("row").as_text() {
            Some(name) if !name.is_empty() => RowId::Named(name),
            _ => {
                next_single += 1;
                RowId::Single(next_single)
            }
        };
        rows.entry(id).or_default().push(node);
    }
    rows.into_iter().map(|(id, nodes)| Row { id, nodes }).collect()
}
