//! Record persistence over key-value storage.
//!
//! Each repository owns one storage key and moves the whole list at once:
//! `load` reads and decodes the persisted JSON array, `save_all` re-encodes
//! and overwrites it. Missing or unreadable data degrades to an empty list
//! and is logged; it is never an error for the caller.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::storage::{KeyValueStorage, MESSAGES_KEY, TODOS_KEY};
use crate::domain::{Message, StorageError, Todo};

pub struct MessageRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl MessageRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<Message> {
        load_list(self.storage.as_ref(), MESSAGES_KEY)
    }

    pub fn save_all(&self, messages: &[Message]) -> Result<(), StorageError> {
        save_list(self.storage.as_ref(), MESSAGES_KEY, messages)
    }
}

pub struct TodoRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl TodoRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Vec<Todo> {
        load_list(self.storage.as_ref(), TODOS_KEY)
    }

    pub fn save_all(&self, todos: &[Todo]) -> Result<(), StorageError> {
        save_list(self.storage.as_ref(), TODOS_KEY, todos)
    }
}

fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("Failed to read '{key}' from storage: {err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("Discarding corrupt data under '{key}': {err}");
            Vec::new()
        }
    }
}

fn save_list<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(records)
        .map_err(|e| StorageError::Write(format!("serialization failed: {e}")))?;
    storage.set(key, &raw)
}
