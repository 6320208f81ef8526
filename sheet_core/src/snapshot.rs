//! SnapshotStore - draft persistence seam for in-progress selections
//!
//! The engine owns only the interface; scheduling (debounce, autosave
//! timers) belongs entirely to the calling application. Implementations
//! must treat `save` as a full overwrite of any previous snapshot.

use crate::assemble::Selections;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to access snapshot storage: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to encode snapshot: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Storage for a single in-progress draft
pub trait SnapshotStore {
    /// Persist the current selections, replacing any previous draft
    fn save(&mut self, selections: &Selections) -> Result<(), SnapshotError>;

    /// Load the stored draft, or None when no draft exists
    fn load(&self) -> Result<Option<Selections>, SnapshotError>;

    /// Discard the stored draft
    fn clear(&mut self) -> Result<(), SnapshotError>;
}

/// In-memory store, useful for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    draft: Option<String>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        MemorySnapshotStore::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&mut self, selections: &Selections) -> Result<(), SnapshotError> {
        self.draft = Some(serde_json::to_string(selections)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<Selections>, SnapshotError> {
        match &self.draft {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.draft = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let mut store = MemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());

        let mut selections = Selections::new();
        selections.name = "Draft Hero".to_string();
        store.save(&selections).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, selections);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_draft() {
        let mut store = MemorySnapshotStore::new();

        let mut first = Selections::new();
        first.name = "First".to_string();
        store.save(&first).unwrap();

        let mut second = Selections::new();
        second.name = "Second".to_string();
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap().name, "Second");
    }
}
