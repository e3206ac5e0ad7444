use crate::element::{Element, ElementKind};
use crate::field::Field;
use std::ops::{Deref, DerefMut};

/// A child of a form: a plain element or a field.
///
/// The node behaves as a field when its element is of kind `Field`.
#[derive(Debug, Clone)]
pub struct Node(Field);

impl Node {
    pub fn as_field(&self) -> Option<&Field> {
        self.is_field().then_some(&self.0)
    }

    pub fn as_field_mut(&mut self) -> Option<&mut Field> {
        if self.is_field() { Some(&mut self.0) } else { None }
    }

    pub fn is_field(&self) -> bool {
        self.0.kind() == ElementKind::Field
    }

    /// Non-fields are always rowable.
    pub fn is_rowable(&self) -> bool {
        !self.is_field() || self.0.is_rowable()
    }

    pub fn into_element(self) -> Element {
        self.0.into_element()
    }

    /// The wrapped field. Only valid for nodes built from a [`Field`].
    pub(crate) fn field_slot(&mut self) -> &mut Field {
        &mut self.0
    }
}

impl Deref for Node {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.0
    }
}

impl DerefMut for Node {
    fn deref_mut(&mut self) -> &mut Element {
        &mut self.0
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node(Field::wrap(element))
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Node(field)
    }
}
