use super::*;
use crate::{model::membership::Role, service::seed::FixtureSeeder};

async fn count_rows(db: &sea_orm::DatabaseConnection) -> Result<[u64; 4], DbErr> {
    Ok([
        entity::prelude::Account::find().count(db).await?,
        entity::prelude::Workspace::find().count(db).await?,
        entity::prelude::Membership::find().count(db).await?,
        entity::prelude::Base::find().count(db).await?,
    ])
}

/// Tests seeding an empty database.
///
/// Verifies exactly one row of each fixture entity is created with the fixed
/// identifiers, and that the owner membership links the account to the workspace.
///
/// Expected: Ok with everything but the namespace reported as created
#[tokio::test]
async fn seeds_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = Fixture::default();

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&fixture, &test_credentials()).await?;

    assert!(report.account_created);
    assert!(report.workspace_created);
    assert!(report.membership_created);
    assert!(report.base_created);
    assert!(!report.namespace_provisioned);
    assert_eq!(count_rows(db).await?, [1, 1, 1, 1]);

    let account = entity::prelude::Account::find_by_id("usrTestUserId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(account.email, "test@e2e.com");
    assert_eq!(account.name, "test");
    assert_eq!(account.salt, Some(test_credentials().salt));
    assert_eq!(account.password, Some(test_credentials().hash));

    let workspace = entity::prelude::Workspace::find_by_id("spcTestSpaceId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(workspace.name, "test space");
    assert_eq!(workspace.created_by, "usrTestUserId");

    let membership = entity::prelude::Membership::find().one(db).await?.unwrap();
    assert_eq!(membership.workspace_id, "spcTestSpaceId");
    assert_eq!(membership.account_id, "usrTestUserId");
    assert_eq!(membership.role_name, Role::Owner.as_str());

    let base = entity::prelude::Base::find_by_id("bseTestBaseId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(base.workspace_id, "spcTestSpaceId");
    assert_eq!(base.name, "test base");
    assert_eq!(base.order, 1.0);
    assert_eq!(base.created_by, "usrTestUserId");

    Ok(())
}

/// Tests seeding the same database twice.
///
/// Verifies the second run leaves every row untouched, including timestamps and
/// credentials, even though it is handed a different salt and hash.
///
/// Expected: Ok with a no-op report and identical rows
#[tokio::test]
async fn second_run_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = Fixture::default();
    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);

    seeder.seed(&fixture, &test_credentials()).await?;
    let accounts = entity::prelude::Account::find().all(db).await?;
    let workspaces = entity::prelude::Workspace::find().all(db).await?;
    let memberships = entity::prelude::Membership::find().all(db).await?;
    let bases = entity::prelude::Base::find().all(db).await?;

    let other_credentials = PasswordCredentials {
        salt: "$2b$04$zyxwvutsrqponmlkjihgfe".to_string(),
        hash: "$2b$04$zyxwvutsrqponmlkjihgfeother".to_string(),
    };
    let report = seeder.seed(&fixture, &other_credentials).await?;

    assert!(report.is_noop());
    assert_eq!(entity::prelude::Account::find().all(db).await?, accounts);
    assert_eq!(entity::prelude::Workspace::find().all(db).await?, workspaces);
    assert_eq!(entity::prelude::Membership::find().all(db).await?, memberships);
    assert_eq!(entity::prelude::Base::find().all(db).await?, bases);

    Ok(())
}

/// Tests that a failure part-way through leaves no fixture rows behind.
///
/// A trigger rejects the base insert, which runs after the account, workspace and
/// membership inserts in the same transaction.
///
/// Expected: Err with all four tables still empty
#[tokio::test]
async fn failed_seed_rolls_back_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    db.execute_unprepared(
        "CREATE TRIGGER reject_base_insert BEFORE INSERT ON base \
         BEGIN SELECT RAISE(ABORT, 'base insert rejected'); END;",
    )
    .await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let result = seeder.seed(&Fixture::default(), &test_credentials()).await;

    assert!(result.is_err());
    assert_eq!(count_rows(db).await?, [0, 0, 0, 0]);

    Ok(())
}

/// Tests seeding when the fixture account already exists.
///
/// Expected: Ok with the existing account kept and the rest created
#[tokio::test]
async fn keeps_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::account::AccountFactory::new(db)
        .id("usrTestUserId")
        .name("Existing")
        .email("test@e2e.com")
        .build()
        .await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&Fixture::default(), &test_credentials()).await?;

    assert!(!report.account_created);
    assert!(report.workspace_created);
    assert!(report.membership_created);
    assert!(report.base_created);
    assert_eq!(count_rows(db).await?, [1, 1, 1, 1]);

    let account = entity::prelude::Account::find_by_id("usrTestUserId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(account, existing);

    Ok(())
}

/// Tests seeding when the fixture email belongs to an account with another id.
///
/// Verifies the existing account becomes the owner: the workspace, membership and
/// base all reference its id rather than the fixture id.
///
/// Expected: Ok with no second account and every reference pointing at the existing one
#[tokio::test]
async fn reuses_account_registered_under_other_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .id("usrSomeoneElse")
        .email("test@e2e.com")
        .build()
        .await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&Fixture::default(), &test_credentials()).await?;

    assert!(!report.account_created);
    assert!(report.membership_created);
    assert_eq!(count_rows(db).await?, [1, 1, 1, 1]);
    assert!(entity::prelude::Account::find_by_id("usrTestUserId")
        .one(db)
        .await?
        .is_none());

    let workspace = entity::prelude::Workspace::find_by_id("spcTestSpaceId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(workspace.created_by, "usrSomeoneElse");
    assert_eq!(workspace.last_modified_by, "usrSomeoneElse");

    let membership = entity::prelude::Membership::find().one(db).await?.unwrap();
    assert_eq!(membership.account_id, "usrSomeoneElse");
    assert_eq!(membership.created_by, "usrSomeoneElse");

    let base = entity::prelude::Base::find_by_id("bseTestBaseId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(base.created_by, "usrSomeoneElse");

    Ok(())
}

/// Tests seeding when the workspace exists but its owner membership was removed.
///
/// The membership is only created together with the workspace, so it is not restored.
///
/// Expected: Ok with no membership created and the base still created
#[tokio::test]
async fn does_not_restore_missing_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .id("usrTestUserId")
        .email("test@e2e.com")
        .build()
        .await?;
    factory::workspace::WorkspaceFactory::new(db, &account.id)
        .id("spcTestSpaceId")
        .build()
        .await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&Fixture::default(), &test_credentials()).await?;

    assert!(!report.workspace_created);
    assert!(!report.membership_created);
    assert!(report.base_created);
    assert_eq!(count_rows(db).await?, [1, 1, 0, 1]);

    Ok(())
}

/// Tests seeding when only the base is missing.
///
/// Expected: Ok with just the base created
#[tokio::test]
async fn creates_only_missing_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .id("usrTestUserId")
        .email("test@e2e.com")
        .build()
        .await?;
    let workspace = factory::workspace::WorkspaceFactory::new(db, &account.id)
        .id("spcTestSpaceId")
        .build()
        .await?;
    factory::create_membership(db, &workspace.id, &account.id).await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&Fixture::default(), &test_credentials()).await?;

    assert!(report.base_created);
    assert!(!report.account_created);
    assert!(!report.workspace_created);
    assert!(!report.membership_created);
    assert_eq!(count_rows(db).await?, [1, 1, 1, 1]);

    Ok(())
}

/// Tests that an existing base with the fixture id is left alone.
///
/// Expected: Ok with the base's original order kept
#[tokio::test]
async fn keeps_existing_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::account::AccountFactory::new(db)
        .id("usrTestUserId")
        .email("test@e2e.com")
        .build()
        .await?;
    let workspace = factory::workspace::WorkspaceFactory::new(db, &account.id)
        .id("spcTestSpaceId")
        .build()
        .await?;
    factory::create_membership(db, &workspace.id, &account.id).await?;
    factory::base::BaseFactory::new(db, &workspace.id, &account.id)
        .id("bseTestBaseId")
        .order(7.0)
        .build()
        .await?;

    let seeder = FixtureSeeder::new(db, DatabaseDriver::FileBased);
    let report = seeder.seed(&Fixture::default(), &test_credentials()).await?;

    assert!(report.is_noop());
    let base = entity::prelude::Base::find_by_id("bseTestBaseId")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(base.order, 7.0);

    Ok(())
}
