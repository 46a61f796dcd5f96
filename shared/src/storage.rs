//! JSON-serialized task lists in a key-value store.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::StorageError;
use crate::task::Task;

/// Key holding the active list.
pub const ACTIVE_KEY: &str = "tasks";
/// Key holding the archived list.
pub const ARCHIVED_KEY: &str = "archivedTasks";

/// String key-value persistence, the shape of browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing serialization.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the list stored under `key`. A missing, unreadable or non-JSON value
/// loads as an empty list. Records that are not valid tasks are skipped and
/// the rest kept.
pub fn load(store: &impl KeyValueStore, key: &str) -> Vec<Task> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("could not read {key:?}: {e}");
            return Vec::new();
        }
    };
    let records = match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            log::warn!("discarding unparseable {key:?}: {e}");
            return Vec::new();
        }
    };
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) if !task.text.trim().is_empty() => Some(task),
            Ok(task) => {
                log::warn!("skipping {key:?}[{i}]: task {} has empty text", task.id);
                None
            }
            Err(e) => {
                log::warn!("skipping {key:?}[{i}]: {e}");
                None
            }
        })
        .collect()
}

pub fn save(store: &mut impl KeyValueStore, key: &str, tasks: &[Task]) -> Result<(), StorageError> {
    let json = serde_json::to_string(tasks)?;
    store.set(key, &json)
}
