use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env` file the setup routine loads for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// The connection string has no scheme or the server address is not a valid URL.
    #[error("Malformed database URL '{url}': {reason}")]
    MalformedDatabaseUrl { url: String, reason: String },
}
