//! Schema (namespace) provisioning for bases on schema-capable engines.
//!
//! SeaQuery has no statement builder for schemas, so these statements are raw DDL with the
//! schema name quoted as an identifier.

use sea_orm::{ConnectionTrait, DbBackend, DbErr};

/// Repository issuing schema DDL for base namespaces.
pub struct NamespaceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NamespaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the schema unless it already exists.
    ///
    /// # Returns
    /// - `Ok(())` - Schema exists afterwards
    /// - `Err(DbErr::Custom)` - The connection is SQLite, which has no schemas
    /// - `Err(DbErr)` - Database error while executing the DDL
    pub async fn create_if_not_exists(&self, name: &str) -> Result<(), DbErr> {
        self.ensure_supported()?;

        self.db
            .execute_unprepared(&format!(
                "CREATE SCHEMA IF NOT EXISTS {}",
                quote_identifier(name)
            ))
            .await?;

        Ok(())
    }

    /// Revokes every default privilege `PUBLIC` holds on the schema.
    ///
    /// # Returns
    /// - `Ok(())` - Schema is no longer accessible to `PUBLIC`
    /// - `Err(DbErr::Custom)` - The connection is SQLite, which has no schemas
    /// - `Err(DbErr)` - Database error while executing the DDL
    pub async fn revoke_public_access(&self, name: &str) -> Result<(), DbErr> {
        self.ensure_supported()?;

        self.db
            .execute_unprepared(&format!(
                "REVOKE ALL ON SCHEMA {} FROM PUBLIC",
                quote_identifier(name)
            ))
            .await?;

        Ok(())
    }

    fn ensure_supported(&self) -> Result<(), DbErr> {
        match self.db.get_database_backend() {
            DbBackend::Sqlite => Err(DbErr::Custom(
                "Schemas are not supported by the SQLite backend".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Quotes `name` as a SQL identifier, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_identifier() {
        assert_eq!(quote_identifier("bseTestBaseId"), "\"bseTestBaseId\"");
    }

    #[test]
    fn escapes_embedded_quotes() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
