use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000001_create_account_table::Account,
    m20251210_000002_create_workspace_table::Workspace,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Membership::Table)
                    .if_not_exists()
                    .col(pk_auto(Membership::Id))
                    .col(string(Membership::WorkspaceId))
                    .col(string(Membership::RoleName))
                    .col(string(Membership::AccountId))
                    .col(string(Membership::CreatedBy))
                    .col(string(Membership::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(Membership::CreatedTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_workspace_id")
                            .from(Membership::Table, Membership::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_membership_account_id")
                            .from(Membership::Table, Membership::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_membership_workspace_account_unique")
                            .col(Membership::WorkspaceId)
                            .col(Membership::AccountId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Membership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Membership {
    Table,
    Id,
    WorkspaceId,
    RoleName,
    AccountId,
    CreatedBy,
    LastModifiedBy,
    CreatedTime,
}
