//! Connection targets and the engine capability derived from them.
//!
//! A connection string has the form `<scheme>:<engine-specific address>`. The `file:`
//! scheme (and SQLx's native `sqlite:`) designates the file-based single-writer engine;
//! every other scheme designates a server-based engine that supports schemas.

use std::{
    borrow::Cow,
    fmt,
    path::{Path, PathBuf},
};

use sea_orm::IsolationLevel;
use serde::Serialize;
use url::Url;

use crate::error::config::ConfigError;

const SQLITE_MEMORY: &str = ":memory:";

/// What the configured engine can do, as far as fixture provisioning cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseDriver {
    /// A single database file with no schema concept (SQLite).
    FileBased,
    /// A server hosting multiple schemas per database (PostgreSQL).
    SchemaCapable,
}

impl DatabaseDriver {
    /// Determines the driver from a lower-cased connection string scheme.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "file" | "sqlite" => Self::FileBased,
            _ => Self::SchemaCapable,
        }
    }

    /// Whether each base gets its own schema.
    pub fn supports_namespaces(self) -> bool {
        matches!(self, Self::SchemaCapable)
    }

    /// Isolation level to request when opening the seeding transaction.
    ///
    /// SQLite transactions are always serializable and SeaORM cannot set a level on them,
    /// so the file-based engine requests none explicitly.
    pub fn isolation_level(self) -> Option<IsolationLevel> {
        match self {
            Self::FileBased => None,
            Self::SchemaCapable => Some(IsolationLevel::Serializable),
        }
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileBased => f.write_str("file-based"),
            Self::SchemaCapable => f.write_str("schema-capable"),
        }
    }
}

/// A parsed connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    url: String,
    scheme: String,
    driver: DatabaseDriver,
}

/// Pieces of a file-based connection string: `<scheme>:[//]<path>[?<query>]`.
struct FileParts<'a> {
    authority: &'a str,
    path: &'a str,
    query: Option<&'a str>,
}

impl ConnectionTarget {
    /// Parses a connection string and detects its driver.
    ///
    /// # Returns
    /// - `Ok(ConnectionTarget)` - Parsed target
    /// - `Err(ConfigError::MalformedDatabaseUrl)` - No scheme, an empty file path, or a
    ///   server address that is not a valid URL
    pub fn parse(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();

        let Some((scheme, rest)) = url.split_once(':') else {
            return Err(malformed(&url, "missing scheme"));
        };
        let valid_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(malformed(&url, "invalid scheme"));
        }

        let scheme = scheme.to_ascii_lowercase();
        let driver = DatabaseDriver::from_scheme(&scheme);

        match driver {
            DatabaseDriver::FileBased => {
                if rest.trim_start_matches("//").split('?').next().unwrap_or("").is_empty() {
                    return Err(malformed(&url, "missing database file path"));
                }
            }
            DatabaseDriver::SchemaCapable => {
                Url::parse(&url).map_err(|e| malformed(&url, &e.to_string()))?;
            }
        }

        Ok(Self {
            url,
            scheme,
            driver,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn driver(&self) -> DatabaseDriver {
        self.driver
    }

    fn file_parts(&self) -> Option<FileParts<'_>> {
        if self.driver != DatabaseDriver::FileBased {
            return None;
        }

        let rest = &self.url[self.scheme.len() + 1..];
        let (authority, rest) = match rest.strip_prefix("//") {
            Some(stripped) => ("//", stripped),
            None => ("", rest),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Some(FileParts {
            authority,
            path,
            query,
        })
    }

    /// Path of the database file for file-based targets.
    ///
    /// Returns `None` for server-based targets and for in-memory SQLite databases, neither
    /// of which has a file to clone.
    pub fn file_path(&self) -> Option<PathBuf> {
        let parts = self.file_parts()?;
        if parts.path == SQLITE_MEMORY {
            return None;
        }
        Some(PathBuf::from(parts.path))
    }

    /// Returns a copy of this target pointing at another database file.
    ///
    /// The scheme and any query parameters are preserved. Server-based targets are returned
    /// unchanged.
    pub fn with_file_path(&self, path: &Path) -> Self {
        let Some(parts) = self.file_parts() else {
            return self.clone();
        };

        let mut url = format!("{}:{}{}", self.scheme, parts.authority, path.to_string_lossy());
        if let Some(query) = parts.query {
            url.push('?');
            url.push_str(query);
        }

        Self {
            url,
            scheme: self.scheme.clone(),
            driver: self.driver,
        }
    }

    /// Connection string in the form the SeaORM/SQLx driver accepts.
    ///
    /// File-based targets are rewritten to the `sqlite:` scheme; server URLs pass through.
    pub fn connect_url(&self) -> String {
        match self.file_parts() {
            Some(parts) => match parts.query {
                Some(query) => format!("sqlite:{}?{}", parts.path, query),
                None => format!("sqlite:{}", parts.path),
            },
            None => self.url.clone(),
        }
    }

    /// Connection string safe to log, with any password masked.
    pub fn redacted(&self) -> Cow<'_, str> {
        if self.driver == DatabaseDriver::FileBased {
            return Cow::Borrowed(&self.url);
        }

        match Url::parse(&self.url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                if parsed.set_password(Some("****")).is_ok() {
                    Cow::Owned(parsed.to_string())
                } else {
                    Cow::Borrowed(&self.url)
                }
            }
            _ => Cow::Borrowed(&self.url),
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

fn malformed(url: &str, reason: &str) -> ConfigError {
    ConfigError::MalformedDatabaseUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
