use leptos::prelude::*;

use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::error::BoardError;
use crate::core::layout::{LayoutAction, LayoutController, LayoutMetrics, Point, Rect};
use crate::core::models::ColumnId;
use crate::core::services::BoardStore;
use crate::features::board::services::{persist_board, report_rejected, restore_board};

/// Reactive board plus the layout controller driving it. Every mutation
/// that changes what is stored ends in [`BoardHook::persist`].
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub layout: RwSignal<LayoutController>,
    store: StoredValue<BoardStore>,
    config: StoredValue<BoardConfig>,
}

pub fn use_board(config: BoardConfig) -> BoardHook {
    let store = BoardStore::open(&config.storage_key);
    if !store.is_persistent() {
        web_sys::console::error_1(&"localStorage unavailable, board will not survive a reload".into());
    }

    let board = RwSignal::new(restore_board(&store, &config));
    let layout = RwSignal::new(LayoutController::new(&config));

    BoardHook {
        board,
        layout,
        store: StoredValue::new(store),
        config: StoredValue::new(config),
    }
}

impl BoardHook {
    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    pub fn persist(&self) {
        let board = self.board;
        self.store.with_value(|store| persist_board(board, store));
    }

    fn apply(&self, actions: &[LayoutAction]) {
        if actions.iter().any(LayoutAction::requires_save) {
            self.persist();
        }
    }

    pub fn toggle_edit_mode(&self) {
        let actions = self
            .layout
            .try_update(|layout| layout.toggle_edit_mode())
            .unwrap_or_default();
        self.apply(&actions);
    }

    pub fn pointer_down(&self, column: ColumnId, pointer: Point, rect: Rect) {
        if !self.layout.with_untracked(|layout| layout.edit_mode()) {
            return;
        }
        let board = self.board;
        self.layout.maybe_update(|layout| {
            board
                .with_untracked(|board| layout.pointer_down(board, &column, pointer, rect))
                .is_some()
        });
    }

    pub fn pointer_move(&self, pointer: Point, metrics: LayoutMetrics) {
        if self.layout.with_untracked(|layout| layout.interaction().is_idle()) {
            return;
        }
        let board = self.board;
        let mut actions = Vec::new();
        self.layout.maybe_update(|layout| {
            board.maybe_update(|board| {
                actions = layout.pointer_move(board, pointer, metrics);
                actions.iter().any(LayoutAction::requires_save)
            });
            !actions.is_empty()
        });
        self.apply(&actions);
    }

    pub fn pointer_up(&self) {
        if self.layout.with_untracked(|layout| layout.interaction().is_idle()) {
            return;
        }
        self.layout.update(|layout| {
            layout.pointer_up();
        });
    }

    pub fn add_column(&self, title: String) {
        let span = self.config.with_value(|config| config.default_span);
        let mut result = Err(BoardError::EmptyInput);
        self.board.maybe_update(|board| {
            result = board.add_column(&title, span).map(|_| ());
            result.is_ok()
        });
        self.finish("Add column", result);
    }

    pub fn add_note(&self, column: ColumnId, text: String) {
        let mut result = Err(BoardError::EmptyInput);
        self.board.maybe_update(|board| {
            result = board.add_note(&column, &text);
            result.is_ok()
        });
        self.finish("Add note", result);
    }

    pub fn delete_column(&self, column: ColumnId) {
        let mut result = Err(BoardError::UnknownColumn(column.clone()));
        self.board.maybe_update(|board| {
            result = board.delete_column(&column).map(|_| ());
            result.is_ok()
        });
        self.finish("Delete column", result);
    }

    fn finish(&self, action: &str, result: Result<(), BoardError>) {
        match result {
            Ok(()) => self.persist(),
            Err(e) => report_rejected(action, &e),
        }
    }
}
