//! 工具歷史紀錄（最新在前，依鍵值去重）。

use crate::core::{HistoryEntry, Storage};
use crate::utils::error::Result;
use std::marker::PhantomData;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

pub struct History<S: Storage, T: HistoryEntry> {
    storage: S,
    limit: usize,
    _entry: PhantomData<T>,
}

impl<S: Storage, T: HistoryEntry> History<S, T> {
    pub fn new(storage: S, limit: usize) -> Self {
        Self {
            storage,
            limit,
            _entry: PhantomData,
        }
    }

    /// Reads the stored list. Unreadable data is discarded.
    pub fn entries(&self) -> Result<Vec<T>> {
        let Some(data) = self.storage.read_file(T::STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!("Failed to parse history '{}': {}", T::STORAGE_KEY, e);
                self.storage.remove_file(T::STORAGE_KEY)?;
                Ok(Vec::new())
            }
        }
    }

    pub fn find(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|entry| entry.history_key() == key))
    }

    /// Puts `entry` first, dropping older entries with the same key.
    pub fn record(&self, entry: T) -> Result<Vec<T>> {
        let mut entries = self.entries()?;
        entries.retain(|e| e.history_key() != entry.history_key());
        entries.insert(0, entry);
        entries.truncate(self.limit);
        self.save(&entries)?;
        Ok(entries)
    }

    pub fn remove(&self, key: &str) -> Result<Vec<T>> {
        let mut entries = self.entries()?;
        entries.retain(|e| e.history_key() != key);
        self.save(&entries)?;
        Ok(entries)
    }

    pub fn clear(&self) -> Result<()> {
        tracing::debug!("Clearing history '{}'", T::STORAGE_KEY);
        self.storage.remove_file(T::STORAGE_KEY)
    }

    fn save(&self, entries: &[T]) -> Result<()> {
        let data = serde_json::to_vec(entries)?;
        self.storage.write_file(T::STORAGE_KEY, &data)
    }
}
