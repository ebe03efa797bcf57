use std::path::PathBuf;
use thiserror::Error;

/// Failures while preparing an isolated copy of a file-based database.
///
/// All of these are unrecoverable: without a private clone the run would share state
/// with other test runs, so setup stops instead of falling back to the source file.
#[derive(Error, Debug)]
pub enum IsolationError {
    /// The database file to clone does not exist.
    #[error("Source database file '{}' does not exist", path.display())]
    SourceMissing { path: PathBuf },

    /// Checking whether the source database file exists failed.
    #[error("Failed to inspect source database file '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The connection string names a path with no file component.
    #[error("Database path '{}' has no file name to clone", path.display())]
    InvalidFilePath { path: PathBuf },

    /// The isolation directory could not be created.
    #[error("Failed to create isolation directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying the source database into the isolation directory failed.
    #[error("Failed to copy '{}' to '{}': {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing a clone during teardown failed.
    #[error("Failed to remove database clone '{}': {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
