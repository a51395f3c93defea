use std::sync::{Arc, Mutex};

use crate::core::error::{BoardError, BoardResult};
use crate::core::models::BoardSnapshot;

/// Raw access to the persisted board record.
pub trait SnapshotStore {
    fn read(&self) -> BoardResult<Option<String>>;
    fn write(&self, contents: &str) -> BoardResult<()>;
}

/// `window.localStorage`, one record under `key`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Probes `localStorage` once so callers can pick a fallback up front.
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }

    fn storage() -> BoardResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(BoardError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))?
            .ok_or(BoardError::StorageUnavailable)
    }
}

impl SnapshotStore for LocalStorageStore {
    fn read(&self) -> BoardResult<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }

    fn write(&self, contents: &str) -> BoardResult<()> {
        Self::storage()?
            .set_item(&self.key, contents)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }
}

/// In-process record. Used when `localStorage` is blocked; the board then
/// lives only as long as the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> BoardResult<Option<String>> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn write(&self, contents: &str) -> BoardResult<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(contents.to_string());
        Ok(())
    }
}

/// Where the board is persisted for this page.
#[derive(Debug, Clone)]
pub enum BoardStore {
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl BoardStore {
    pub fn open(key: &str) -> Self {
        if LocalStorageStore::is_available() {
            BoardStore::Local(LocalStorageStore::new(key))
        } else {
            BoardStore::Memory(MemoryStore::default())
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BoardStore::Local(_))
    }
}

impl SnapshotStore for BoardStore {
    fn read(&self) -> BoardResult<Option<String>> {
        match self {
            BoardStore::Local(store) => store.read(),
            BoardStore::Memory(store) => store.read(),
        }
    }

    fn write(&self, contents: &str) -> BoardResult<()> {
        match self {
            BoardStore::Local(store) => store.write(contents),
            BoardStore::Memory(store) => store.write(contents),
        }
    }
}

/// `Ok(None)` when nothing has been stored yet.
pub fn load_snapshot(store: &impl SnapshotStore) -> BoardResult<Option<BoardSnapshot>> {
    match store.read()? {
        Some(raw) => BoardSnapshot::from_json(&raw).map(Some),
        None => Ok(None),
    }
}

/// Replaces the stored record with `snapshot`.
pub fn save_snapshot(store: &impl SnapshotStore, snapshot: &BoardSnapshot) -> BoardResult<()> {
    let raw = snapshot.to_json()?;
    store.write(&raw)
}
