//! Key-value persistence for the widget record lists.
//!
//! Storage is string-valued and synchronous: one key per widget, read once
//! at startup and overwritten wholesale on every mutation. Backends only
//! move strings; JSON encoding lives in the repositories.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::domain::StorageError;

/// Storage key for the contact inbox.
pub const MESSAGES_KEY: &str = "contactMessages";
/// Storage key for the todo list.
pub const TODOS_KEY: &str = "todos";

/// Synchronous string-valued key-value storage.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`; `None` when the key was never
    /// written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
