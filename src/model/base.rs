//! Base (sub-workspace) domain model and parameters.

use chrono::{DateTime, Utc};

/// A container nested under one workspace.
///
/// On schema-capable engines a base's data lives in a schema named after its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub order: f64,
    pub created_by: String,
    pub created_time: DateTime<Utc>,
}

impl Base {
    pub fn from_entity(entity: entity::base::Model) -> Self {
        Self {
            id: entity.id,
            workspace_id: entity.workspace_id,
            name: entity.name,
            order: entity.order,
            created_by: entity.created_by,
            created_time: entity.created_time,
        }
    }
}

/// Parameters for creating a base.
#[derive(Debug, Clone)]
pub struct CreateBaseParam {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub order: f64,
    pub created_by: String,
}
