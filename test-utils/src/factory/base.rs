//! Base factory for creating test sub-workspace entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bases nested under a workspace.
pub struct BaseFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    workspace_id: String,
    name: String,
    order: f64,
    created_by: String,
}

impl<'a> BaseFactory<'a> {
    /// Creates a new BaseFactory with default values.
    ///
    /// Defaults:
    /// - id: `"bse{id}"` where id is auto-incremented
    /// - name: `"Base {id}"`
    /// - order: `1.0`
    pub fn new(db: &'a DatabaseConnection, workspace_id: &str, created_by: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("bse{}", id),
            workspace_id: workspace_id.to_string(),
            name: format!("Base {}", id),
            order: 1.0,
            created_by: created_by.to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    /// Builds and inserts the base entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::base::Model)` - Created base entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::base::Model, DbErr> {
        entity::base::ActiveModel {
            id: ActiveValue::Set(self.id),
            workspace_id: ActiveValue::Set(self.workspace_id),
            name: ActiveValue::Set(self.name),
            order: ActiveValue::Set(self.order),
            created_by: ActiveValue::Set(self.created_by.clone()),
            last_modified_by: ActiveValue::Set(self.created_by),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a base with default values under the given workspace.
pub async fn create_base(
    db: &DatabaseConnection,
    workspace_id: &str,
    created_by: &str,
) -> Result<entity::base::Model, DbErr> {
    BaseFactory::new(db, workspace_id, created_by).build().await
}
