use thiserror::Error;

use crate::core::models::ColumnId;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("local storage is not available in this browsing context")]
    StorageUnavailable,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("stored board record is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to serialize board: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("column {0} does not exist")]
    UnknownColumn(ColumnId),

    #[error("input is empty")]
    EmptyInput,
}

pub type BoardResult<T> = Result<T, BoardError>;
