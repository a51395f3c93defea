pub mod column;
pub mod ghost;
pub mod header;
pub mod text_entry_modal;

pub use column::BoardColumn;
pub use ghost::DragGhost;
pub use header::BoardHeader;
pub use text_entry_modal::TextEntryModal;
