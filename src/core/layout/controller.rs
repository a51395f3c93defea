use super::geometry::{
    classify_hit, drag_shift, resize_steps, shifted_index, HitZone, LayoutMetrics, Point, Rect,
};
use super::interaction::{DragState, Interaction, ResizeState};
use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::models::ColumnId;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// What a controller call did, for the host to render or persist.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    EditModeChanged { enabled: bool },
    GhostMoved(Point),
    Reordered { column: ColumnId, from: usize, to: usize },
    Resized { column: ColumnId, span: u32 },
}

impl LayoutAction {
    pub fn requires_save(&self) -> bool {
        match self {
            LayoutAction::EditModeChanged { enabled } => !enabled,
            LayoutAction::GhostMoved(_) => false,
            LayoutAction::Reordered { .. } | LayoutAction::Resized { .. } => true,
        }
    }
}

/// Drag/resize state machine over a [`Board`].
///
/// The controller never touches the browser: the host measures rectangles,
/// container width and font size and passes them in.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutController {
    edit_mode: bool,
    interaction: Interaction,
    resize_margin_px: f64,
}

impl LayoutController {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            edit_mode: false,
            interaction: Interaction::Idle,
            resize_margin_px: config.resize_margin_px,
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn is_dragging(&self, column: &ColumnId) -> bool {
        matches!(&self.interaction, Interaction::Dragging(drag) if &drag.column == column)
    }

    pub fn is_resizing(&self, column: &ColumnId) -> bool {
        matches!(&self.interaction, Interaction::Resizing(resize) if &resize.column == column)
    }

    /// Column and top-left corner of the drag ghost, while dragging.
    pub fn ghost(&self) -> Option<(&ColumnId, Point)> {
        match &self.interaction {
            Interaction::Dragging(drag) => Some((&drag.column, drag.ghost)),
            _ => None,
        }
    }

    /// Switching edit mode off ends any interaction and asks for a save.
    pub fn toggle_edit_mode(&mut self) -> Vec<LayoutAction> {
        self.edit_mode = !self.edit_mode;
        if !self.edit_mode {
            self.interaction = Interaction::Idle;
        }
        vec![LayoutAction::EditModeChanged { enabled: self.edit_mode }]
    }

    /// Starts a drag or a resize on `column`. Returns the zone that was hit,
    /// or `None` when the press is ignored (edit mode off, an interaction
    /// already running, unknown column).
    pub fn pointer_down(
        &mut self,
        board: &Board,
        column: &ColumnId,
        pointer: Point,
        rect: Rect,
    ) -> Option<HitZone> {
        if !self.edit_mode || !self.interaction.is_idle() {
            return None;
        }
        let span = board.column(column)?.span;

        let zone = classify_hit(&rect, pointer.x, self.resize_margin_px);
        self.interaction = match zone {
            HitZone::ResizeHandle => Interaction::Resizing(ResizeState {
                column: column.clone(),
                anchor_x: pointer.x,
                initial_width: rect.width,
                initial_span: span,
            }),
            HitZone::Body => Interaction::Dragging(DragState::new(column.clone(), pointer, &rect)),
        };
        Some(zone)
    }

    pub fn pointer_move(
        &mut self,
        board: &mut Board,
        pointer: Point,
        metrics: LayoutMetrics,
    ) -> Vec<LayoutAction> {
        match &mut self.interaction {
            Interaction::Idle => Vec::new(),
            Interaction::Dragging(drag) => Self::drag_to(drag, board, pointer, metrics),
            Interaction::Resizing(resize) => Self::resize_to(resize, board, pointer, metrics),
        }
    }

    /// Ends the interaction. Returns the column that was being dragged or
    /// resized.
    pub fn pointer_up(&mut self) -> Option<ColumnId> {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => None,
            Interaction::Dragging(drag) => Some(drag.column),
            Interaction::Resizing(resize) => Some(resize.column),
        }
    }

    fn drag_to(
        drag: &mut DragState,
        board: &mut Board,
        pointer: Point,
        metrics: LayoutMetrics,
    ) -> Vec<LayoutAction> {
        drag.ghost = drag.ghost_at(pointer);
        let mut actions = vec![LayoutAction::GhostMoved(drag.ghost)];

        // The column may have been deleted underneath the drag.
        let Some(from) = board.index_of(&drag.column) else {
            return actions;
        };
        let shift = drag_shift(pointer.x - drag.anchor_x, metrics.container_width, board.len());
        if shift == 0 {
            return actions;
        }
        let to = shifted_index(from, shift, board.len());
        if board.move_column(from, to) {
            drag.anchor_x = pointer.x;
            actions.push(LayoutAction::Reordered {
                column: drag.column.clone(),
                from,
                to,
            });
        }
        actions
    }

    fn resize_to(
        resize: &mut ResizeState,
        board: &mut Board,
        pointer: Point,
        metrics: LayoutMetrics,
    ) -> Vec<LayoutAction> {
        let steps = resize_steps(pointer.x - resize.anchor_x, metrics.root_font_px);
        if steps == 0 {
            return Vec::new();
        }
        // Keep the sub-unit remainder so slow drags still add up.
        resize.anchor_x += steps as f64 * metrics.root_font_px;

        let Some(column) = board.column_mut(&resize.column) else {
            return Vec::new();
        };
        let span = (i64::from(column.span) + steps).clamp(1, i64::from(u32::MAX)) as u32;
        if span == column.span {
            return Vec::new();
        }
        column.set_span(span);
        vec![LayoutAction::Resized {
            column: resize.column.clone(),
            span,
        }]
    }
}
