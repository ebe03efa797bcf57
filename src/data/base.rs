//! Base data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::base::{Base, CreateBaseParam};

/// Repository providing database operations for bases.
pub struct BaseRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BaseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a base by id.
    ///
    /// # Returns
    /// - `Ok(Some(Base))` - Base found
    /// - `Ok(None)` - No base with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Base>, DbErr> {
        let entity = entity::prelude::Base::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Base::from_entity))
    }

    /// Inserts a base; creator and last modifier are both `param.created_by`.
    pub async fn create(&self, param: CreateBaseParam) -> Result<Base, DbErr> {
        let entity = entity::base::ActiveModel {
            id: ActiveValue::Set(param.id),
            workspace_id: ActiveValue::Set(param.workspace_id),
            name: ActiveValue::Set(param.name),
            order: ActiveValue::Set(param.order),
            created_by: ActiveValue::Set(param.created_by.clone()),
            last_modified_by: ActiveValue::Set(param.created_by),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Base::from_entity(entity))
    }
}
