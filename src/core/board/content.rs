use super::Board;
use crate::core::error::{BoardError, BoardResult};
use crate::core::models::{Column, ColumnId, Note};

impl Board {
    /// Appends a new column after every existing one. Unordered columns are
    /// adopted first so the new column's order really is the last one.
    pub fn add_column(&mut self, title: &str, span: u32) -> BoardResult<ColumnId> {
        if title.trim().is_empty() {
            return Err(BoardError::EmptyInput);
        }
        self.adopt_unassigned();
        let id = ColumnId::generate();
        let order = self.next_order();
        self.columns.push(Column::new(id.clone(), title, span, order));
        Ok(id)
    }

    pub fn add_note(&mut self, column_id: &ColumnId, text: &str) -> BoardResult<()> {
        if text.trim().is_empty() {
            return Err(BoardError::EmptyInput);
        }
        let column = self
            .column_mut(column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.clone()))?;
        column.notes.push(Note::new(text));
        Ok(())
    }

    /// Removes a column together with its notes. The remaining orders are
    /// left as they are; gaps are fine for sorting.
    pub fn delete_column(&mut self, column_id: &ColumnId) -> BoardResult<Column> {
        let index = self
            .index_of(column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.clone()))?;
        Ok(self.columns.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{BoardSnapshot, ColumnRecord};

    #[test]
    fn add_column_appends_with_next_order() {
        let mut board = Board::new(vec![Column::new(ColumnId::new("col-a"), "A", 10, 4)]);

        let id = board.add_column("Groceries", 10).unwrap();

        let column = board.column(&id).unwrap();
        assert_eq!(column.title, "Groceries");
        assert_eq!(column.order, Some(5));
        assert_eq!(board.index_of(&id), Some(1));
    }

    #[test]
    fn add_column_stays_last_behind_unordered_columns() {
        let mut snapshot = BoardSnapshot::default();
        for (id, order) in [("col-a", 0), ("col-legacy", -1)] {
            snapshot.insert(
                ColumnId::new(id),
                ColumnRecord {
                    title: id.into(),
                    notes: Vec::new(),
                    order: Some(order),
                    span: Some(10),
                },
            );
        }
        let mut board = Board::from_snapshot(&snapshot, 10);
        assert_eq!(board.column(&ColumnId::new("col-legacy")).unwrap().order, None);

        let id = board.add_column("New", 10).unwrap();
        let before_save: Vec<_> = board.columns().iter().map(|c| c.id.clone()).collect();
        let saved = board.snapshot();
        let after_save: Vec<_> = board.columns().iter().map(|c| c.id.clone()).collect();

        assert_eq!(before_save, after_save);
        assert_eq!(board.index_of(&id), Some(2));
        assert_eq!(saved.get(&ColumnId::new("col-legacy")).unwrap().order(), Some(1));
        assert_eq!(saved.get(&id).unwrap().order(), Some(2));
    }

    #[test]
    fn input_is_stored_as_typed() {
        let mut board = Board::default();
        let id = board.add_column("  Groceries ", 10).unwrap();
        board.add_note(&id, " two  spaces ").unwrap();

        let column = board.column(&id).unwrap();
        assert_eq!(column.title, "  Groceries ");
        assert_eq!(column.notes[0].content, " two  spaces ");
    }

    #[test]
    fn add_column_on_empty_board_starts_at_zero() {
        let mut board = Board::default();
        let id = board.add_column("First", 6).unwrap();
        assert_eq!(board.column(&id).unwrap().order, Some(0));
        assert_eq!(board.column(&id).unwrap().span, 6);
    }

    #[test]
    fn empty_input_is_rejected_without_mutation() {
        let mut board = Board::new(vec![Column::new(ColumnId::new("col-a"), "A", 10, 0)]);
        let before = board.clone();

        assert!(matches!(board.add_column("   ", 10), Err(BoardError::EmptyInput)));
        assert!(matches!(
            board.add_note(&ColumnId::new("col-a"), ""),
            Err(BoardError::EmptyInput)
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn notes_append_in_order() {
        let id = ColumnId::new("col-a");
        let mut board = Board::new(vec![Column::new(id.clone(), "A", 10, 0)]);

        board.add_note(&id, "one").unwrap();
        board.add_note(&id, "two").unwrap();

        let contents: Vec<_> = board.column(&id).unwrap().notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn unknown_column_is_reported() {
        let mut board = Board::default();
        let missing = ColumnId::new("col-missing");
        assert!(matches!(board.add_note(&missing, "x"), Err(BoardError::UnknownColumn(_))));
        assert!(matches!(board.delete_column(&missing), Err(BoardError::UnknownColumn(_))));
    }

    #[test]
    fn deleted_column_disappears_from_next_snapshot() {
        let a = ColumnId::new("col-a");
        let b = ColumnId::new("col-b");
        let mut board = Board::new(vec![
            Column::new(a.clone(), "A", 10, 0),
            Column::new(b.clone(), "B", 10, 1),
        ]);

        let removed = board.delete_column(&a).unwrap();
        assert_eq!(removed.title, "A");

        let snapshot: BoardSnapshot = board.snapshot();
        assert!(snapshot.get(&a).is_none());
        assert!(snapshot.get(&b).is_some());
    }
}
