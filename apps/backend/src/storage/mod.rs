//! String key-value persistence behind the local guest store.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("storage I/O failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::infra(InfraErrorKind::Storage, err.to_string())
    }
}

/// Persistent string map. Reads of absent keys return `None`.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys double as file names, so only `[A-Za-z0-9_-]` is accepted.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
