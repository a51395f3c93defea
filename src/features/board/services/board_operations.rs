use leptos::prelude::*;

use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::error::BoardError;
use crate::core::models::BoardSnapshot;
use crate::core::services::{load_snapshot, save_snapshot, BoardStore};

// Restore the board from storage, falling back to a fresh board
pub fn restore_board(store: &BoardStore, config: &BoardConfig) -> Board {
    match load_snapshot(store) {
        Ok(Some(snapshot)) => {
            web_sys::console::log_1(&format!("Restored board with {} columns", snapshot.len()).into());
            Board::from_snapshot(&snapshot, config.default_span)
        }
        Ok(None) => Board::with_default_column(config),
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading board configuration: {}", e).into());
            let mut board = Board::with_default_column(config);
            board.reset_spans(config.default_span);
            board
        }
    }
}

// Snapshot the whole board and replace the stored record
pub fn persist_board(board: RwSignal<Board>, store: &BoardStore) {
    // Only notify subscribers when adoption actually handed out ids or orders.
    let mut snapshot: Option<BoardSnapshot> = None;
    board.maybe_update(|board| {
        let adopted = board.adopt_unassigned();
        snapshot = Some(board.to_snapshot());
        adopted > 0
    });
    // A disposed signal must never overwrite the stored record with nothing.
    let Some(snapshot) = snapshot else {
        return;
    };
    match save_snapshot(store, &snapshot) {
        Ok(()) => {
            web_sys::console::log_1(&format!("Board saved ({} columns)", snapshot.len()).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to save board: {}", e).into());
        }
    }
}

pub fn report_rejected(action: &str, error: &BoardError) {
    match error {
        BoardError::EmptyInput => {
            web_sys::console::log_1(&format!("{} skipped: {}", action, error).into());
        }
        _ => {
            web_sys::console::error_1(&format!("{} failed: {}", action, error).into());
        }
    }
}
