//! Account data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::account::{Account, CreateAccountParam};

/// Repository providing database operations for accounts.
pub struct AccountRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an account by its email address.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account uses that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Inserts an account with the supplied salt and password hash.
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on id or email
    pub async fn create(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            id: ActiveValue::Set(param.id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            salt: ActiveValue::Set(Some(param.salt)),
            password: ActiveValue::Set(Some(param.password_hash)),
            created_time: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }
}
