//! Storage abstraction for manuscripts and finished books
//!
//! The conversion job reads its input and writes its output through
//! [`StorageProvider`], so the same job runs against a local directory, an
//! in-memory map in tests, or any object store wrapped behind the trait.

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract storage provider trait
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read data from the given path
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Write data to the given path
    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Delete data at the given path
    async fn delete(&self, path: &str) -> StorageResult<()>;

    /// List entries under the given prefix
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Check if a path exists
    async fn exists(&self, path: &str) -> StorageResult<bool>;

    /// Get the size of a file in bytes
    async fn size(&self, path: &str) -> StorageResult<u64>;
}

fn map_io(path: &str, err: std::io::Error) -> StorageError {
    match err.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(path.to_string()),
        _ => StorageError::BackendError(format!("{}: {}", path, err)),
    }
}

/// Local filesystem storage provider
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage provider with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key below the root, refusing anything that would escape it
    fn full_path(&self, path: &str) -> StorageResult<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in Path::new(path).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => {
                    return Err(StorageError::PermissionDenied(format!(
                        "path escapes storage root: {}",
                        path
                    )));
                }
            }
        }

        Ok(self.root.join(normalized))
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path)?;
        tokio::fs::read(full_path).await.map_err(|e| map_io(path, e))
    }

    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()> {
        let full_path = self.full_path(path)?;
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io(path, e))?;
        }

        // Write beside the target and rename so readers never see half a book
        let temp_path = full_path.with_extension("part");
        tokio::fs::write(&temp_path, data)
            .await
            .map_err(|e| map_io(path, e))?;
        tokio::fs::rename(&temp_path, &full_path)
            .await
            .map_err(|e| map_io(path, e))
    }

    async fn delete(&self, path: &str) -> StorageResult<()> {
        let full_path = self.full_path(path)?;
        tokio::fs::remove_file(full_path)
            .await
            .map_err(|e| map_io(path, e))
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let full_path = self.full_path(prefix)?;
        let mut entries = Vec::new();
        let mut read_dir = tokio::fs::read_dir(&full_path)
            .await
            .map_err(|e| map_io(prefix, e))?;

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| map_io(prefix, e))?
        {
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }

        entries.sort();
        Ok(entries)
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        let full_path = self.full_path(path)?;
        tokio::fs::try_exists(full_path)
            .await
            .map_err(|e| map_io(path, e))
    }

    async fn size(&self, path: &str) -> StorageResult<u64> {
        let full_path = self.full_path(path)?;
        let metadata = tokio::fs::metadata(full_path)
            .await
            .map_err(|e| map_io(path, e))?;
        Ok(metadata.len())
    }
}

/// In-memory storage provider (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::BackendError("memory storage lock poisoned".to_string())
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        self.data
            .read()
            .map_err(|_| Self::poisoned())?
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, data: Vec<u8>) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|_| Self::poisoned())?
            .insert(path.to_string(), data);
        Ok(())
    }

    async fn delete(&self, path: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|_| Self::poisoned())?
            .remove(path)
            .ok_or_else(|| StorageError::NotFound(path.to_string()))?;
        Ok(())
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .data
            .read()
            .map_err(|_| Self::poisoned())?
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self
            .data
            .read()
            .map_err(|_| Self::poisoned())?
            .contains_key(path))
    }

    async fn size(&self, path: &str) -> StorageResult<u64> {
        self.data
            .read()
            .map_err(|_| Self::poisoned())?
            .get(path)
            .map(|d| d.len() as u64)
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}
