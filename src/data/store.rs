//! The database collaborator the fixture seeder talks to.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    data::{
        account::AccountRepository, base::BaseRepository, membership::MembershipRepository,
        namespace::NamespaceRepository, workspace::WorkspaceRepository,
    },
    model::{
        account::{Account, CreateAccountParam},
        base::{Base, CreateBaseParam},
        membership::{CreateMembershipParam, Membership},
        workspace::{CreateWorkspaceParam, Workspace},
    },
};

/// Lookups and writes needed to seed the fixture.
///
/// Implementations are expected to run every call against the same transaction so the
/// seeder sees one consistent snapshot and its writes commit or roll back together.
#[async_trait]
pub trait FixtureStore: Send + Sync {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr>;

    async fn find_workspace(&self, id: &str) -> Result<Option<Workspace>, DbErr>;

    async fn find_base(&self, id: &str) -> Result<Option<Base>, DbErr>;

    async fn create_account(&self, param: CreateAccountParam) -> Result<Account, DbErr>;

    async fn create_workspace(&self, param: CreateWorkspaceParam) -> Result<Workspace, DbErr>;

    async fn create_membership(&self, param: CreateMembershipParam)
        -> Result<Membership, DbErr>;

    /// Creates the schema backing a base, if missing.
    async fn create_namespace(&self, name: &str) -> Result<(), DbErr>;

    /// Removes default `PUBLIC` privileges from a base schema.
    async fn revoke_public_access(&self, name: &str) -> Result<(), DbErr>;

    async fn create_base(&self, param: CreateBaseParam) -> Result<Base, DbErr>;
}

/// `FixtureStore` backed by the SeaORM repositories.
///
/// Usually wraps a `DatabaseTransaction`.
pub struct SeaOrmFixtureStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmFixtureStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C> FixtureStore for SeaOrmFixtureStore<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        AccountRepository::new(self.db).find_by_email(email).await
    }

    async fn find_workspace(&self, id: &str) -> Result<Option<Workspace>, DbErr> {
        WorkspaceRepository::new(self.db).find_by_id(id).await
    }

    async fn find_base(&self, id: &str) -> Result<Option<Base>, DbErr> {
        BaseRepository::new(self.db).find_by_id(id).await
    }

    async fn create_account(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        AccountRepository::new(self.db).create(param).await
    }

    async fn create_workspace(&self, param: CreateWorkspaceParam) -> Result<Workspace, DbErr> {
        WorkspaceRepository::new(self.db).create(param).await
    }

    async fn create_membership(
        &self,
        param: CreateMembershipParam,
    ) -> Result<Membership, DbErr> {
        MembershipRepository::new(self.db).create(param).await
    }

    async fn create_namespace(&self, name: &str) -> Result<(), DbErr> {
        NamespaceRepository::new(self.db)
            .create_if_not_exists(name)
            .await
    }

    async fn revoke_public_access(&self, name: &str) -> Result<(), DbErr> {
        NamespaceRepository::new(self.db)
            .revoke_public_access(name)
            .await
    }

    async fn create_base(&self, param: CreateBaseParam) -> Result<Base, DbErr> {
        BaseRepository::new(self.db).create(param).await
    }
}
