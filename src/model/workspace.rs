//! Workspace domain model and parameters.

use chrono::{DateTime, Utc};

/// Top-level organizational container owning memberships and bases.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub last_modified_by: String,
    pub created_time: DateTime<Utc>,
}

impl Workspace {
    pub fn from_entity(entity: entity::workspace::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_by: entity.created_by,
            last_modified_by: entity.last_modified_by,
            created_time: entity.created_time,
        }
    }
}

/// Parameters for creating a workspace.
///
/// `created_by` is recorded as both creator and last modifier.
#[derive(Debug, Clone)]
pub struct CreateWorkspaceParam {
    pub id: String,
    pub name: String,
    pub created_by: String,
}
