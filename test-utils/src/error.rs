use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory SQLite database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
