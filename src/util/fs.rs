//! Filesystem collaborator used to clone file-based databases.

use std::{io, path::Path};

use async_trait::async_trait;

/// The filesystem operations the isolation preparer needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Creates `path` and any missing parents. Succeeds if the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copies `from` to `to` byte for byte, returning the number of bytes copied.
    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// `FileSystem` backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        tokio::fs::try_exists(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        tokio::fs::copy(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}
