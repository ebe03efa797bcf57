//! Account domain model and parameters.

use chrono::{DateTime, Utc};

/// A user account, unique by email.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    /// Display name of the account.
    pub name: String,
    pub email: String,
    pub created_time: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// Credentials are left behind in the data layer.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_time: entity.created_time,
        }
    }
}

/// Parameters for creating an account with pre-computed credentials.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub id: String,
    pub name: String,
    pub email: String,
    pub salt: String,
    pub password_hash: String,
}
