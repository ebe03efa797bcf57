//! Error types for fixture provisioning.
//!
//! `AppError` aggregates every failure the setup routine can hit. None of them are
//! recovered locally: each aborts the setup step, because the e2e suite must not run
//! against a partially or ambiguously seeded database. `SetupFailure` decorates an
//! `AppError` with the connection target and engine kind for diagnostics.

pub mod config;
pub mod isolation;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, isolation::IsolationError},
    model::driver::DatabaseDriver,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Cloning the file-based database into its isolation directory failed.
    #[error(transparent)]
    IsolationErr(#[from] IsolationError),

    /// Database operation error from SeaORM.
    ///
    /// Covers connection failures, migration failures and transaction aborts such as an
    /// unexpected constraint violation while seeding.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The password-hash collaborator rejected its input.
    #[error(transparent)]
    HashErr(#[from] bcrypt::BcryptError),

    /// Serializing the fixture manifest failed.
    #[error(transparent)]
    ManifestErr(#[from] serde_json::Error),

    /// Writing the fixture manifest failed.
    #[error("Failed to write fixture manifest to '{path}': {source}")]
    IoErr {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal setup failure with the context needed to debug it.
///
/// `target` is the connection target in effect when the failure happened, so after a
/// successful clone it names the cloned file rather than the source database. Passwords
/// in server URLs are masked.
#[derive(Error, Debug)]
#[error("e2e fixture setup failed against {target} ({driver}): {source}")]
pub struct SetupFailure {
    pub target: String,
    pub driver: DatabaseDriver,
    #[source]
    pub source: AppError,
}
