//! Idempotent, all-or-nothing seeding of the fixture rows.
//!
//! Every existence check and insert runs inside one transaction at the strictest isolation
//! level the engine offers. Rows are looked up by natural key and created only when
//! missing, so seeding an already seeded database performs reads only.
//!
//! The membership is created together with the workspace and is not looked up on its own:
//! a workspace whose owner membership was removed is left as is.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::store::{FixtureStore, SeaOrmFixtureStore},
    model::{
        account::CreateAccountParam,
        base::CreateBaseParam,
        driver::DatabaseDriver,
        fixture::{Fixture, PasswordCredentials},
        membership::{CreateMembershipParam, Role},
        report::SeedReport,
        workspace::CreateWorkspaceParam,
    },
};

/// Seeds the fixture through a `DatabaseConnection`, owning the transaction.
pub struct FixtureSeeder<'a> {
    db: &'a DatabaseConnection,
    driver: DatabaseDriver,
}

impl<'a> FixtureSeeder<'a> {
    /// Creates a new FixtureSeeder.
    ///
    /// # Arguments
    /// - `db` - Connection to the (possibly cloned) target database
    /// - `driver` - Capability of the engine behind `db`
    pub fn new(db: &'a DatabaseConnection, driver: DatabaseDriver) -> Self {
        Self { db, driver }
    }

    /// Ensures the fixture rows exist, committing all inserts at once.
    ///
    /// Any failure rolls the transaction back so no partial fixture is ever visible.
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - What was created; empty when the fixture already existed
    /// - `Err(DbErr)` - Connection failure or an aborted transaction
    pub async fn seed(
        &self,
        fixture: &Fixture,
        credentials: &PasswordCredentials,
    ) -> Result<SeedReport, DbErr> {
        let txn = self
            .db
            .begin_with_config(self.driver.isolation_level(), None)
            .await?;

        let store = SeaOrmFixtureStore::new(&txn);
        let outcome = seed_fixture(&store, self.driver, fixture, credentials).await;

        match outcome {
            Ok(report) => {
                txn.commit().await?;
                tracing::info!(
                    account_created = report.account_created,
                    workspace_created = report.workspace_created,
                    membership_created = report.membership_created,
                    namespace_provisioned = report.namespace_provisioned,
                    base_created = report.base_created,
                    "Fixture seeded"
                );
                Ok(report)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!("Failed to roll back fixture transaction: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

/// Creates whichever fixture rows are missing from `store`.
///
/// Transaction handling belongs to the caller; every call goes through `store`.
///
/// # Arguments
/// - `store` - Database collaborator, normally bound to an open transaction
/// - `driver` - Decides whether the base needs a schema of its own
/// - `fixture` - Natural keys and values to seed
/// - `credentials` - Pre-computed salt and hash for the account
///
/// # Returns
/// - `Ok(SeedReport)` - What was created
/// - `Err(DbErr)` - The first failing lookup or write
pub async fn seed_fixture<S>(
    store: &S,
    driver: DatabaseDriver,
    fixture: &Fixture,
    credentials: &PasswordCredentials,
) -> Result<SeedReport, DbErr>
where
    S: FixtureStore + ?Sized,
{
    let existing_account = store.find_account_by_email(&fixture.email).await?;
    let existing_workspace = store.find_workspace(&fixture.workspace_id).await?;
    let existing_base = store.find_base(&fixture.base_id).await?;

    let mut report = SeedReport::default();

    // An account already holding the fixture email keeps its own id.
    let owner_id = match existing_account {
        Some(account) => account.id,
        None => {
            let account = store
                .create_account(CreateAccountParam {
                    id: fixture.account_id.clone(),
                    name: fixture.display_name().to_string(),
                    email: fixture.email.clone(),
                    salt: credentials.salt.clone(),
                    password_hash: credentials.hash.clone(),
                })
                .await?;
            report.account_created = true;
            account.id
        }
    };

    if existing_workspace.is_none() {
        store
            .create_workspace(CreateWorkspaceParam {
                id: fixture.workspace_id.clone(),
                name: fixture.workspace_name.clone(),
                created_by: owner_id.clone(),
            })
            .await?;
        report.workspace_created = true;

        store
            .create_membership(CreateMembershipParam {
                workspace_id: fixture.workspace_id.clone(),
                account_id: owner_id.clone(),
                role: Role::Owner,
                created_by: owner_id.clone(),
            })
            .await?;
        report.membership_created = true;
    }

    if existing_base.is_none() {
        if driver.supports_namespaces() {
            // Locked down before the base row exists so the schema is never public.
            store.create_namespace(&fixture.base_id).await?;
            store.revoke_public_access(&fixture.base_id).await?;
            report.namespace_provisioned = true;
        }

        store
            .create_base(CreateBaseParam {
                id: fixture.base_id.clone(),
                workspace_id: fixture.workspace_id.clone(),
                name: fixture.base_name.clone(),
                order: fixture.base_order,
                created_by: owner_id,
            })
            .await?;
        report.base_created = true;
    }

    Ok(report)
}
