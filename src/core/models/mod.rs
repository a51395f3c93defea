pub mod column;
pub mod snapshot;

pub use column::{generate_button_id, Column, ColumnId, Note};
pub use snapshot::{BoardSnapshot, ColumnRecord};
