use std::path::PathBuf;

use crate::{
    error::config::ConfigError,
    model::{driver::ConnectionTarget, fixture::Fixture},
    service::password::DEFAULT_COST,
};

const DATABASE_URL: &str = "DATABASE_URL";
const BCRYPT_COST: &str = "BCRYPT_COST";
const RUN_MIGRATIONS: &str = "E2E_RUN_MIGRATIONS";
const MANIFEST_PATH: &str = "E2E_MANIFEST_PATH";

/// Configuration for one fixture setup run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection target as configured, before any isolation rewrite.
    pub database: ConnectionTarget,
    /// Cost handed to the password-hash collaborator.
    pub bcrypt_cost: u32,
    /// Whether to apply pending migrations before seeding.
    pub run_migrations: bool,
    /// Where to write the JSON fixture manifest, if anywhere.
    pub manifest_path: Option<PathBuf>,
    pub fixture: Fixture,
}

impl Config {
    /// Creates a config for `database` with every other setting at its default.
    pub fn new(database: ConnectionTarget) -> Self {
        Self {
            database,
            bcrypt_cost: DEFAULT_COST,
            run_migrations: true,
            manifest_path: None,
            fixture: Fixture::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the config from a variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - An optional variable has an unusable value
    /// - `Err(ConfigError::MalformedDatabaseUrl)` - `DATABASE_URL` cannot be parsed
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(DATABASE_URL.to_string()))?;

        let mut config = Self::new(ConnectionTarget::parse(database_url)?);

        if let Some(value) = lookup(BCRYPT_COST) {
            config.bcrypt_cost = parse_cost(&value)?;
        }
        if let Some(value) = lookup(RUN_MIGRATIONS) {
            config.run_migrations = parse_bool(RUN_MIGRATIONS, &value)?;
        }
        config.manifest_path = lookup(MANIFEST_PATH)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_cost(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: BCRYPT_COST.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let cost: u32 = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected an integer"))?;
    if !(4..=31).contains(&cost) {
        return Err(invalid("bcrypt cost must be between 4 and 31"));
    }

    Ok(cost)
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
