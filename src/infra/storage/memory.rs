use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStorage;
use crate::domain::StorageError;

/// HashMap-backed storage for `--memory` sessions and tests. Nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .expect("MemoryStorage: failed to acquire lock");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .expect("MemoryStorage: failed to acquire lock");
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
