//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an account, a workspace created by it, and the owner membership linking them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, workspace, membership))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owned_workspace(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::workspace::Model,
        entity::membership::Model,
    ),
    DbErr,
> {
    let account = crate::factory::account::create_account(db).await?;
    let workspace = crate::factory::workspace::create_workspace(db, &account.id).await?;
    let membership =
        crate::factory::membership::create_membership(db, &workspace.id, &account.id).await?;

    Ok((account, workspace, membership))
}
