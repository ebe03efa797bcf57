use super::*;

/// Tests creating a base under a workspace.
///
/// Expected: Ok with the given order and creator
#[tokio::test]
async fn creates_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, workspace, _) = factory::helpers::create_owned_workspace(db).await?;

    let repo = BaseRepository::new(db);
    let base = repo
        .create(CreateBaseParam {
            id: "bseTestBaseId".to_string(),
            workspace_id: workspace.id.clone(),
            name: "test base".to_string(),
            order: 1.0,
            created_by: account.id.clone(),
        })
        .await?;

    assert_eq!(base.id, "bseTestBaseId");
    assert_eq!(base.workspace_id, workspace.id);
    assert_eq!(base.order, 1.0);
    assert_eq!(base.created_by, account.id);

    Ok(())
}

/// Tests that a base must belong to an existing workspace.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_workspace() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;

    let repo = BaseRepository::new(db);
    let result = repo
        .create(CreateBaseParam {
            id: "bseTestBaseId".to_string(),
            workspace_id: "spcMissing".to_string(),
            name: "test base".to_string(),
            order: 1.0,
            created_by: account.id,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Base::find().count(db).await?, 0);

    Ok(())
}

/// Tests finding a base by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_base_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_fixture_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, workspace, _) = factory::helpers::create_owned_workspace(db).await?;
    let base = factory::base::BaseFactory::new(db, &workspace.id, &account.id)
        .id("bseTestBaseId")
        .order(3.5)
        .build()
        .await?;

    let repo = BaseRepository::new(db);

    let found = repo.find_by_id(&base.id).await?.unwrap();
    assert_eq!(found.order, 3.5);

    assert!(repo.find_by_id("bseMissing").await?.is_none());

    Ok(())
}
