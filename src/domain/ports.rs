use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value storage for serialized history lists.
pub trait Storage {
    /// Returns `None` when nothing is stored under `key`.
    fn read_file(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write_file(&self, key: &str, data: &[u8]) -> Result<()>;
    fn remove_file(&self, key: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn history_limit(&self) -> usize;
    fn source_host(&self) -> &str;
    fn target_host(&self) -> &str;
    fn display_param(&self) -> &str;
    fn scan_suffixes(&self) -> &[String];
}

/// An item kept in a tool's history list.
pub trait HistoryEntry: Serialize + DeserializeOwned + Clone {
    /// Fixed storage key of the list.
    const STORAGE_KEY: &'static str;

    /// Entries with equal keys replace each other.
    fn history_key(&self) -> &str;
}
