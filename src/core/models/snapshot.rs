use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::column::{ColumnId, Note};
use crate::core::error::{BoardError, BoardResult};

/// Persisted state of one column. Field defaults keep older or hand-edited
/// records readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<i64>,
}

impl ColumnRecord {
    /// Negative orders were written by older boards for unplaced columns.
    pub fn order(&self) -> Option<u32> {
        self.order.and_then(|order| u32::try_from(order).ok())
    }

    pub fn span_or(&self, default_span: u32) -> u32 {
        match self.span {
            Some(span) => u32::try_from(span.max(1)).unwrap_or(u32::MAX),
            None => default_span.max(1),
        }
    }
}

/// Layout and content of the whole board, keyed by column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    columns: BTreeMap<ColumnId, ColumnRecord>,
}

impl BoardSnapshot {
    pub fn from_json(raw: &str) -> BoardResult<Self> {
        serde_json::from_str(raw).map_err(BoardError::Corrupt)
    }

    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string(self).map_err(BoardError::Serialize)
    }

    pub fn insert(&mut self, id: ColumnId, record: ColumnRecord) {
        self.columns.insert(id, record);
    }

    pub fn get(&self, id: &ColumnId) -> Option<&ColumnRecord> {
        self.columns.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &ColumnRecord)> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_stored_format() {
        let raw = r#"{
            "col-a": {"title": "Inbox", "notes": [{"content": "milk"}], "order": 1, "span": 6},
            "col-b": {"title": "Done", "notes": [], "order": 0, "span": 10}
        }"#;
        let snapshot = BoardSnapshot::from_json(raw).unwrap();

        assert_eq!(snapshot.len(), 2);
        let a = snapshot.get(&ColumnId::new("col-a")).unwrap();
        assert_eq!(a.title, "Inbox");
        assert_eq!(a.notes, vec![Note::new("milk")]);
        assert_eq!(a.order(), Some(1));
        assert_eq!(a.span_or(10), 6);
    }

    #[test]
    fn tolerates_legacy_and_partial_records() {
        let raw = r#"{
            "col-a": {"columnId": "col-a", "title": "Old", "notes": [], "order": -1, "span": 0},
            "col-b": {}
        }"#;
        let snapshot = BoardSnapshot::from_json(raw).unwrap();

        let a = snapshot.get(&ColumnId::new("col-a")).unwrap();
        assert_eq!(a.order(), None);
        assert_eq!(a.span_or(10), 1);

        let b = snapshot.get(&ColumnId::new("col-b")).unwrap();
        assert_eq!(b.title, "");
        assert_eq!(b.order(), None);
        assert_eq!(b.span_or(10), 10);
    }

    #[test]
    fn rejects_non_json() {
        let err = BoardSnapshot::from_json("not json {").unwrap_err();
        assert!(matches!(err, BoardError::Corrupt(_)));
    }

    #[test]
    fn writes_flat_object_keyed_by_id() {
        let mut snapshot = BoardSnapshot::default();
        snapshot.insert(
            ColumnId::new("col-a"),
            ColumnRecord {
                title: "Inbox".into(),
                notes: vec![Note::new("milk")],
                order: Some(0),
                span: Some(10),
            },
        );

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "col-a": {"title": "Inbox", "notes": [{"content": "milk"}], "order": 0, "span": 10}
            })
        );
    }
}
