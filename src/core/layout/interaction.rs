use super::geometry::{Point, Rect};
use crate::core::models::ColumnId;

/// Pointer interaction in progress. Lives from pointer-down to pointer-up
/// and is never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
}

impl Interaction {
    pub fn column(&self) -> Option<&ColumnId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(drag) => Some(&drag.column),
            Interaction::Resizing(resize) => Some(&resize.column),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub column: ColumnId,
    /// Pointer x at the last committed move.
    pub anchor_x: f64,
    /// Pointer position relative to the column's top-left corner at grab time.
    pub grab_offset: Point,
    /// Top-left corner of the floating ghost.
    pub ghost: Point,
}

impl DragState {
    pub fn new(column: ColumnId, pointer: Point, rect: &Rect) -> Self {
        let grab_offset = pointer.offset_from(rect.origin());
        Self {
            column,
            anchor_x: pointer.x,
            grab_offset,
            ghost: pointer.offset_from(grab_offset),
        }
    }

    pub fn ghost_at(&self, pointer: Point) -> Point {
        pointer.offset_from(self.grab_offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    pub column: ColumnId,
    pub anchor_x: f64,
    pub initial_width: f64,
    pub initial_span: u32,
}
