use crate::core::config::BoardConfig;
use crate::core::models::{BoardSnapshot, Column, ColumnId, ColumnRecord};

/// Columns in rendering order.
///
/// The persisted `order` of each column is the sort key; the position in
/// `columns` is kept consistent with it by every mutation below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub(super) columns: Vec<Column>,
}

impl Board {
    /// Columns are sorted by order; unordered ones go last as given.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut board = Self { columns };
        board.sort_by_order();
        board
    }

    /// Board shown when nothing has been stored yet.
    pub fn with_default_column(config: &BoardConfig) -> Self {
        Self::new(vec![Column::new(
            ColumnId::generate(),
            config.default_column_title.clone(),
            config.default_span,
            0,
        )])
    }

    /// Rebuilds a board from a stored record. Content comes from the records,
    /// then the regular layout pass applies order and span.
    pub fn from_snapshot(snapshot: &BoardSnapshot, default_span: u32) -> Self {
        let columns = snapshot
            .iter()
            .map(|(id, record)| {
                Column::unassigned(record.title.clone(), default_span)
                    .with_id(id.clone())
                    .with_notes(record.notes.clone())
            })
            .collect();
        let mut board = Self { columns };
        board.apply_layout(snapshot, default_span);
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.is(id))
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.is(id))
    }

    pub fn index_of(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.is(id))
    }

    /// Appends a column as-is. Columns without id or order are picked up by
    /// [`Board::adopt_unassigned`].
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Next free order value: one past the highest assigned order.
    pub fn next_order(&self) -> u32 {
        self.columns
            .iter()
            .filter_map(|c| c.order)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Applies stored spans and orders to the columns already on the board.
    ///
    /// Columns without a record get the default span and lose their order,
    /// which sorts them after every known column while keeping their current
    /// relative order.
    pub fn apply_layout(&mut self, snapshot: &BoardSnapshot, default_span: u32) {
        for column in &mut self.columns {
            match column.id.as_ref().and_then(|id| snapshot.get(id)) {
                Some(record) => {
                    column.set_span(record.span_or(default_span));
                    column.order = record.order();
                }
                None => {
                    column.set_span(default_span);
                    column.order = None;
                }
            }
        }
        self.sort_by_order();
    }

    /// Fallback for an unreadable record: every column gets the default
    /// span, order is left alone.
    pub fn reset_spans(&mut self, default_span: u32) {
        for column in &mut self.columns {
            column.set_span(default_span);
        }
    }

    /// Moves the column at `from` to `to` and renumbers every order to match
    /// the new positions. Returns false when nothing moved.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        let len = self.columns.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.order = Some(u32::try_from(index).unwrap_or(u32::MAX));
        }
        true
    }

    /// Gives every column lacking an id or order a fresh id and the next
    /// free order, in rendering order. Returns how many columns changed.
    pub fn adopt_unassigned(&mut self) -> usize {
        let mut next = self.next_order();
        let mut adopted = 0;
        for column in &mut self.columns {
            let mut changed = false;
            if column.order.is_none() {
                column.order = Some(next);
                next = next.saturating_add(1);
                changed = true;
            }
            if column.id.is_none() {
                column.id = Some(ColumnId::generate());
                changed = true;
            }
            if changed {
                adopted += 1;
            }
        }
        if adopted > 0 {
            self.sort_by_order();
        }
        adopted
    }

    /// The record to persist. Adopts unassigned columns first so every
    /// column on the board has an entry.
    pub fn snapshot(&mut self) -> BoardSnapshot {
        self.adopt_unassigned();
        self.to_snapshot()
    }

    /// The record for the board as it is. Columns that were never adopted
    /// are left out.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for column in &self.columns {
            let Some(id) = column.id.clone() else {
                continue;
            };
            snapshot.insert(
                id,
                ColumnRecord {
                    title: column.title.clone(),
                    notes: column.notes.clone(),
                    order: column.order.map(i64::from),
                    span: Some(i64::from(column.span)),
                },
            );
        }
        snapshot
    }

    fn sort_by_order(&mut self) {
        // Stable, so equal keys keep arrival order.
        self.columns.sort_by_key(|c| c.order.map_or(u64::MAX, u64::from));
    }
}
