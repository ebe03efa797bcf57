//! Membership domain model, roles and parameters.

use std::fmt;

use sea_orm::DbErr;

/// Role an account holds in a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Creator,
    Editor,
    Commenter,
    Viewer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Creator => "creator",
            Self::Editor => "editor",
            Self::Commenter => "commenter",
            Self::Viewer => "viewer",
        }
    }

    /// Parses a stored role name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "creator" => Some(Self::Creator),
            "editor" => Some(Self::Editor),
            "commenter" => Some(Self::Commenter),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link between an account and a workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub workspace_id: String,
    pub account_id: String,
    pub role: Role,
    pub created_by: String,
}

impl Membership {
    /// Converts an entity model to a membership domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The converted membership
    /// - `Err(DbErr::Custom)` - The stored role name is not a known role
    pub fn from_entity(entity: entity::membership::Model) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role_name).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown role '{}' on membership {}",
                entity.role_name, entity.id
            ))
        })?;

        Ok(Self {
            workspace_id: entity.workspace_id,
            account_id: entity.account_id,
            role,
            created_by: entity.created_by,
        })
    }
}

/// Parameters for creating a membership.
///
/// `created_by` is recorded as both creator and last modifier.
#[derive(Debug, Clone)]
pub struct CreateMembershipParam {
    pub workspace_id: String,
    pub account_id: String,
    pub role: Role,
    pub created_by: String,
}
