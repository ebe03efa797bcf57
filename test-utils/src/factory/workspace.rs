//! Workspace factory for creating test workspace entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test workspaces attributed to an account.
pub struct WorkspaceFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    created_by: String,
}

impl<'a> WorkspaceFactory<'a> {
    /// Creates a new WorkspaceFactory with default values.
    ///
    /// Defaults:
    /// - id: `"spc{id}"` where id is auto-incremented
    /// - name: `"Workspace {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - Account ID recorded as creator and last modifier
    pub fn new(db: &'a DatabaseConnection, created_by: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("spc{}", id),
            name: format!("Workspace {}", id),
            created_by: created_by.to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the workspace entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::workspace::Model)` - Created workspace entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::workspace::Model, DbErr> {
        entity::workspace::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            created_by: ActiveValue::Set(self.created_by.clone()),
            last_modified_by: ActiveValue::Set(self.created_by),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a workspace with default values.
pub async fn create_workspace(
    db: &DatabaseConnection,
    created_by: &str,
) -> Result<entity::workspace::Model, DbErr> {
    WorkspaceFactory::new(db, created_by).build().await
}
