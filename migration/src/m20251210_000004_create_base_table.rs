use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000002_create_workspace_table::Workspace;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Base::Table)
                    .if_not_exists()
                    .col(string(Base::Id).primary_key())
                    .col(string(Base::WorkspaceId))
                    .col(string(Base::Name))
                    .col(double(Base::Order))
                    .col(string(Base::CreatedBy))
                    .col(string(Base::LastModifiedBy))
                    .col(
                        timestamp_with_time_zone(Base::CreatedTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_base_workspace_id")
                            .from(Base::Table, Base::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Base::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Base {
    Table,
    Id,
    WorkspaceId,
    Name,
    Order,
    CreatedBy,
    LastModifiedBy,
    CreatedTime,
}
