//! Membership data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::model::membership::{CreateMembershipParam, Membership};

/// Repository providing database operations for workspace memberships.
pub struct MembershipRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership attributed to `param.created_by`.
    pub async fn create(&self, param: CreateMembershipParam) -> Result<Membership, DbErr> {
        let entity = entity::membership::ActiveModel {
            workspace_id: ActiveValue::Set(param.workspace_id),
            role_name: ActiveValue::Set(param.role.as_str().to_string()),
            account_id: ActiveValue::Set(param.account_id),
            created_by: ActiveValue::Set(param.created_by.clone()),
            last_modified_by: ActiveValue::Set(param.created_by),
            created_time: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Membership::from_entity(entity)
    }
}

// Membership lookups back the repository tests only; seeding never reads memberships.
#[cfg(test)]
impl<'a, C: ConnectionTrait> MembershipRepository<'a, C> {
    /// Finds the membership linking an account to a workspace.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - Membership found
    /// - `Ok(None)` - The account is not a member of the workspace
    /// - `Err(DbErr)` - Database error, or the stored role is unknown
    pub async fn find(
        &self,
        workspace_id: &str,
        account_id: &str,
    ) -> Result<Option<Membership>, DbErr> {
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let entity = entity::prelude::Membership::find()
            .filter(entity::membership::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::membership::Column::AccountId.eq(account_id))
            .one(self.db)
            .await?;

        entity.map(Membership::from_entity).transpose()
    }
}
