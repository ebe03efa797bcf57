//! Workspace data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::workspace::{CreateWorkspaceParam, Workspace};

/// Repository providing database operations for workspaces.
pub struct WorkspaceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkspaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a workspace by id.
    ///
    /// # Returns
    /// - `Ok(Some(Workspace))` - Workspace found
    /// - `Ok(None)` - No workspace with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Workspace>, DbErr> {
        let entity = entity::prelude::Workspace::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Workspace::from_entity))
    }

    /// Inserts a workspace attributed to `param.created_by`.
    pub async fn create(&self, param: CreateWorkspaceParam) -> Result<Workspace, DbErr> {
        let entity = entity::workspace::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            created_by: ActiveValue::Set(param.created_by.clone()),
            last_modified_by: ActiveValue::Set(param.created_by),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Workspace::from_entity(entity))
    }
}
