use crate::error::CliError;

/// Database configuration loaded from environment variables.
///
/// There is no baked-in default URL: connection parameters always come
/// from the environment (or a `.env` file).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pool connections.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default    |
    /// |----------------------|------------|
    /// | `DATABASE_URL`       | (required) |
    /// | `DB_MAX_CONNECTIONS` | `5`        |
    pub fn from_env() -> Result<Self, CliError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| CliError::Config("DATABASE_URL must be set".to_string()))?;

        let max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().map_err(|_| {
                CliError::Config(format!("DB_MAX_CONNECTIONS must be a number, got '{raw}'"))
            })?,
            Err(_) => reelstore_db::DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}
