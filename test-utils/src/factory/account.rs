//! Account factory for creating test account entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let account = AccountFactory::new(&db)
///     .id("usrTestUserId")
///     .email("test@e2e.com")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    email: String,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - id: `"usr{id}"` where id is auto-incremented
    /// - name: `"Account {id}"`
    /// - email: `"account{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("usr{}", id),
            name: format!("Account {}", id),
            email: format!("account{}@example.com", id),
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

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// The account is inserted without credentials.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            salt: ActiveValue::Set(None),
            password: ActiveValue::Set(None),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
