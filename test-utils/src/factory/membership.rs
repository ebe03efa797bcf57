//! Membership factory for linking accounts to workspaces.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memberships.
///
/// Defaults to the `owner` role with the member recorded as creator.
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    workspace_id: String,
    account_id: String,
    role_name: String,
}

impl<'a> MembershipFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, workspace_id: &str, account_id: &str) -> Self {
        Self {
            db,
            workspace_id: workspace_id.to_string(),
            account_id: account_id.to_string(),
            role_name: "owner".to_string(),
        }
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    /// Builds and inserts the membership entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::membership::Model)` - Created membership entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            workspace_id: ActiveValue::Set(self.workspace_id),
            role_name: ActiveValue::Set(self.role_name),
            account_id: ActiveValue::Set(self.account_id.clone()),
            created_by: ActiveValue::Set(self.account_id.clone()),
            last_modified_by: ActiveValue::Set(self.account_id),
            created_time: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owner membership for the account in the workspace.
pub async fn create_membership(
    db: &DatabaseConnection,
    workspace_id: &str,
    account_id: &str,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db, workspace_id, account_id)
        .build()
        .await
}
