use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing_subscriber::EnvFilter;

use crate::model::driver::ConnectionTarget;

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. Logs go to stderr; stdout is reserved for
/// the resolved connection string.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the target database and optionally runs pending migrations.
///
/// # Arguments
/// - `target` - Connection target, after any isolation rewrite
/// - `run_migrations` - Whether to apply pending SeaORM migrations
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database, migrated if requested
/// - `Err(DbErr)` - Failed to connect to the database or run migrations
pub async fn connect_to_database(
    target: &ConnectionTarget,
    run_migrations: bool,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(target.connect_url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if run_migrations {
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}
