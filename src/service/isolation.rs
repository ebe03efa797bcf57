//! Per-run isolation for file-based databases.
//!
//! Each run gets a private byte-for-byte copy of the configured database file, placed in a
//! `test/` directory next to the source and named `test-<token>-<file name>`. The source
//! file is only ever read. Server-based targets are left alone; runs sharing a server rely
//! on the seeding transaction's isolation level instead.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::{
    error::isolation::IsolationError,
    model::driver::ConnectionTarget,
    util::fs::{FileSystem, LocalFileSystem},
};

/// Name of the directory clones are placed in, relative to the source file's directory.
pub const ISOLATION_DIR: &str = "test";

/// Literal tag every clone file name starts with.
pub const CLONE_TAG: &str = "test";

/// Length of the random token in clone file names.
pub const TOKEN_LENGTH: usize = 12;

/// A private copy of a file-based database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseClone {
    /// The file that was copied.
    pub source: PathBuf,
    /// The copy this run connects to.
    pub path: PathBuf,
}

/// Connection target the rest of the run must use.
#[derive(Debug, Clone)]
pub struct IsolatedTarget {
    pub target: ConnectionTarget,
    /// The clone `target` points at, or `None` when no clone was needed.
    pub clone: Option<DatabaseClone>,
}

/// Clones file-based databases so concurrent or repeated runs never share a file.
pub struct IsolationPreparer<F = LocalFileSystem> {
    fs: F,
}

impl IsolationPreparer<LocalFileSystem> {
    pub fn new() -> Self {
        Self::with_fs(LocalFileSystem)
    }
}

impl Default for IsolationPreparer<LocalFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> IsolationPreparer<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Clones the target's database file and returns a target pointing at the clone.
    ///
    /// Server-based and in-memory targets are returned unchanged with no clone.
    ///
    /// # Arguments
    /// - `target` - The configured connection target
    ///
    /// # Returns
    /// - `Ok(IsolatedTarget)` - Target to connect to, with the clone if one was made
    /// - `Err(IsolationError::SourceMissing)` - The database file to clone does not exist
    /// - `Err(IsolationError::SourceUnreadable)` - Its existence could not be checked
    /// - `Err(IsolationError::InvalidFilePath)` - The path has no file name component
    /// - `Err(IsolationError::CreateDir)` - The isolation directory could not be created
    /// - `Err(IsolationError::Copy)` - Copying the file failed
    pub async fn prepare(&self, target: ConnectionTarget) -> Result<IsolatedTarget, IsolationError> {
        let Some(source) = target.file_path() else {
            tracing::debug!(
                database = %target,
                driver = %target.driver(),
                "No database file to clone, using target as configured"
            );
            return Ok(IsolatedTarget {
                target,
                clone: None,
            });
        };

        let exists = self
            .fs
            .exists(&source)
            .await
            .map_err(|e| IsolationError::SourceUnreadable {
                path: source.clone(),
                source: e,
            })?;
        if !exists {
            return Err(IsolationError::SourceMissing { path: source });
        }

        let file_name = source
            .file_name()
            .ok_or_else(|| IsolationError::InvalidFilePath {
                path: source.clone(),
            })?
            .to_string_lossy()
            .into_owned();

        let isolation_dir = isolation_dir_for(&source);
        self.fs
            .create_dir_all(&isolation_dir)
            .await
            .map_err(|source| IsolationError::CreateDir {
                path: isolation_dir.clone(),
                source,
            })?;

        let clone_path = isolation_dir.join(clone_file_name(&file_name));
        let bytes = self
            .fs
            .copy(&source, &clone_path)
            .await
            .map_err(|e| IsolationError::Copy {
                from: source.clone(),
                to: clone_path.clone(),
                source: e,
            })?;

        let target = target.with_file_path(&clone_path);
        tracing::info!(
            source = %source.display(),
            clone = %clone_path.display(),
            bytes,
            "Cloned database for isolated test run"
        );

        Ok(IsolatedTarget {
            target,
            clone: Some(DatabaseClone {
                source,
                path: clone_path,
            }),
        })
    }

    /// Deletes a clone made by `prepare`.
    ///
    /// The source file is never touched.
    pub async fn discard(&self, clone: &DatabaseClone) -> Result<(), IsolationError> {
        self.fs
            .remove_file(&clone.path)
            .await
            .map_err(|source| IsolationError::Remove {
                path: clone.path.clone(),
                source,
            })?;

        tracing::info!(clone = %clone.path.display(), "Discarded database clone");

        Ok(())
    }
}

/// Directory clones of `source` are placed in.
fn isolation_dir_for(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(ISOLATION_DIR),
        _ => PathBuf::from(ISOLATION_DIR),
    }
}

/// Builds a unique clone file name: `test-<token>-<file_name>`.
pub fn clone_file_name(file_name: &str) -> String {
    format!("{}-{}-{}", CLONE_TAG, generate_token(), file_name)
}

/// Generates a random alphanumeric token of `TOKEN_LENGTH` characters.
///
/// Uses uppercase letters, lowercase letters and digits from the thread-local generator.
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_alphanumeric_of_fixed_length() {
        let token = generate_token();

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn clone_name_wraps_token_between_tag_and_file_name() {
        let name = clone_file_name("app.db");

        assert!(name.starts_with("test-"));
        assert!(name.ends_with("-app.db"));
        assert_eq!(name.len(), "test-".len() + TOKEN_LENGTH + "-app.db".len());
    }

    #[test]
    fn clone_names_differ_between_calls() {
        assert_ne!(clone_file_name("app.db"), clone_file_name("app.db"));
    }

    #[test]
    fn isolation_dir_sits_next_to_source() {
        assert_eq!(
            isolation_dir_for(Path::new("/data/app.db")),
            PathBuf::from("/data/test")
        );
        assert_eq!(isolation_dir_for(Path::new("app.db")), PathBuf::from("test"));
    }
}
