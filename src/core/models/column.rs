use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 9;

/// Stable identifier of a column, e.g. `col-3f9a0c21b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(format!("col-{}", random_suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id for a column's "add note" button. Only used as a DOM hook.
pub fn generate_button_id() -> String {
    format!("add-note-{}", random_suffix())
}

// Hex digits of a v4 uuid, so the suffix is always alphanumeric.
fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(ID_SUFFIX_LEN);
    suffix
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// `None` until the column is adopted by the board.
    pub id: Option<ColumnId>,
    /// Canonical sort key. `None` until adopted.
    pub order: Option<u32>,
    pub span: u32,
    pub title: String,
    pub notes: Vec<Note>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>, span: u32, order: u32) -> Self {
        Self {
            id: Some(id),
            order: Some(order),
            span: span.max(1),
            title: title.into(),
            notes: Vec::new(),
        }
    }

    /// A column inserted without identity. It receives an id and an order
    /// the next time the board is adopted or saved.
    pub fn unassigned(title: impl Into<String>, span: u32) -> Self {
        Self {
            id: None,
            order: None,
            span: span.max(1),
            title: title.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ColumnId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn is(&self, id: &ColumnId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn set_span(&mut self, span: u32) {
        self.span = span.max(1);
    }

    /// Value of the `grid-column` style for this column.
    pub fn grid_column(&self) -> String {
        format!("span {}", self.span)
    }

    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() {
            fallback
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_prefix_and_alphanumeric_suffix() {
        let id = ColumnId::generate();
        let suffix = id.as_str().strip_prefix("col-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));

        let button = generate_button_id();
        assert!(button.starts_with("add-note-"));
        assert_eq!(button.len(), "add-note-".len() + 9);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ColumnId::generate(), ColumnId::generate());
    }

    #[test]
    fn span_is_never_zero() {
        let mut column = Column::new(ColumnId::new("col-a"), "A", 0, 0);
        assert_eq!(column.span, 1);
        column.set_span(0);
        assert_eq!(column.span, 1);
        assert_eq!(column.grid_column(), "span 1");
    }

    #[test]
    fn empty_title_falls_back() {
        let column = Column::unassigned("", 10);
        assert_eq!(column.display_title("New Column"), "New Column");
        assert!(column.id.is_none());
        assert!(column.order.is_none());
    }
}
