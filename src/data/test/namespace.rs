use super::*;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Transaction};

fn postgres_with_exec_results(count: usize) -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results((0..count).map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }))
        .into_connection()
}

/// Tests the DDL issued to create a base schema.
///
/// Expected: Ok with a single quoted `CREATE SCHEMA IF NOT EXISTS`
#[tokio::test]
async fn creates_schema_if_not_exists() -> Result<(), DbErr> {
    let db = postgres_with_exec_results(1);

    let repo = NamespaceRepository::new(&db);
    repo.create_if_not_exists("bseTestBaseId").await?;

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::one(Statement::from_string(
            DatabaseBackend::Postgres,
            "CREATE SCHEMA IF NOT EXISTS \"bseTestBaseId\"",
        ))]
    );

    Ok(())
}

/// Tests the DDL issued to lock a base schema down.
///
/// Expected: Ok with a single `REVOKE ALL ... FROM PUBLIC`
#[tokio::test]
async fn revokes_public_access() -> Result<(), DbErr> {
    let db = postgres_with_exec_results(1);

    let repo = NamespaceRepository::new(&db);
    repo.revoke_public_access("bseTestBaseId").await?;

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::one(Statement::from_string(
            DatabaseBackend::Postgres,
            "REVOKE ALL ON SCHEMA \"bseTestBaseId\" FROM PUBLIC",
        ))]
    );

    Ok(())
}

/// Tests that schema DDL is refused on SQLite.
///
/// Expected: Err(DbErr::Custom) for both statements
#[tokio::test]
async fn refuses_sqlite() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NamespaceRepository::new(db);

    assert!(matches!(
        repo.create_if_not_exists("bseTestBaseId").await,
        Err(DbErr::Custom(_))
    ));
    assert!(matches!(
        repo.revoke_public_access("bseTestBaseId").await,
        Err(DbErr::Custom(_))
    ));

    Ok(())
}
