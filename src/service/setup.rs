//! The whole provisioning routine, run once before the e2e suite.
//!
//! Steps run strictly in order: isolate, connect (and migrate), hash, seed, close. Every
//! failure aborts the run and is reported as a `SetupFailure` naming the connection target
//! in effect at that point.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    config::Config,
    error::{AppError, SetupFailure},
    model::{
        driver::{ConnectionTarget, DatabaseDriver},
        report::SeedReport,
    },
    service::{
        isolation::IsolationPreparer,
        password::{BcryptHasher, PasswordHasher},
        seed::FixtureSeeder,
    },
    startup,
    util::fs::{FileSystem, LocalFileSystem},
};

/// Outcome of a successful setup run.
///
/// `database_url` is the connection string the e2e suite must use; for file-based
/// engines it points at this run's clone.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureManifest {
    pub database_url: String,
    pub driver: DatabaseDriver,
    pub account_id: String,
    pub email: String,
    pub password: String,
    pub workspace_id: String,
    pub base_id: String,
    pub clone_path: Option<PathBuf>,
    pub report: SeedReport,
}

/// Runs isolation and seeding against the configured database.
pub struct E2eSetup<F = LocalFileSystem, H = BcryptHasher> {
    isolation: IsolationPreparer<F>,
    hasher: H,
}

impl E2eSetup<LocalFileSystem, BcryptHasher> {
    /// Creates a setup using the local filesystem and a bcrypt hasher at `bcrypt_cost`.
    pub fn new(bcrypt_cost: u32) -> Self {
        Self::with_parts(IsolationPreparer::new(), BcryptHasher::new(bcrypt_cost))
    }
}

impl<F: FileSystem, H: PasswordHasher> E2eSetup<F, H> {
    pub fn with_parts(isolation: IsolationPreparer<F>, hasher: H) -> Self {
        Self { isolation, hasher }
    }

    /// Provisions the fixture.
    ///
    /// # Arguments
    /// - `config` - Connection target, fixture values and run options
    ///
    /// # Returns
    /// - `Ok(FixtureManifest)` - Fixture is in place; use `database_url` from here on
    /// - `Err(SetupFailure)` - The first failing step, with the target it ran against
    pub async fn run(&self, config: &Config) -> Result<FixtureManifest, SetupFailure> {
        tracing::info!(
            database = %config.database,
            driver = %config.database.driver(),
            "Preparing e2e fixture"
        );

        let isolated = self
            .isolation
            .prepare(config.database.clone())
            .await
            .map_err(|e| failure(&config.database, e.into()))?;
        let target = isolated.target;

        let manifest = self
            .provision(config, &target)
            .await
            .map_err(|e| failure(&target, e))?;

        let manifest = FixtureManifest {
            clone_path: isolated.clone.map(|clone| clone.path),
            ..manifest
        };

        if let Some(path) = &config.manifest_path {
            write_manifest(path, &manifest)
                .await
                .map_err(|e| failure(&target, e))?;
        }

        tracing::info!(
            database = %target,
            noop = manifest.report.is_noop(),
            "E2e fixture ready"
        );

        Ok(manifest)
    }

    async fn provision(
        &self,
        config: &Config,
        target: &ConnectionTarget,
    ) -> Result<FixtureManifest, AppError> {
        let db = startup::connect_to_database(target, config.run_migrations).await?;

        let fixture = &config.fixture;
        let seeded = match self.hasher.hash(&fixture.password) {
            Ok(credentials) => FixtureSeeder::new(&db, target.driver())
                .seed(fixture, &credentials)
                .await
                .map_err(AppError::from),
            Err(e) => Err(e),
        };

        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
        let report = seeded?;

        Ok(FixtureManifest {
            database_url: target.as_str().to_string(),
            driver: target.driver(),
            account_id: fixture.account_id.clone(),
            email: fixture.email.clone(),
            password: fixture.password.clone(),
            workspace_id: fixture.workspace_id.clone(),
            base_id: fixture.base_id.clone(),
            clone_path: None,
            report,
        })
    }
}

async fn write_manifest(path: &Path, manifest: &FixtureManifest) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(manifest)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| AppError::IoErr {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(path = %path.display(), "Wrote fixture manifest");

    Ok(())
}

fn failure(target: &ConnectionTarget, source: AppError) -> SetupFailure {
    SetupFailure {
        target: target.redacted().into_owned(),
        driver: target.driver(),
        source,
    }
}
