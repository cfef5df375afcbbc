use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Database connection pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection url, e.g. `sqlite://lighter.db?mode=rwc` or `postgres://...`
    pub url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Minimum idle connections kept open
    pub min_connections: u32,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
    /// Apply pending migrations before serving
    pub migrate: bool,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Every pooled connection to `sqlite::memory:` would open its own empty database.
    pub fn is_memory(&self) -> bool {
        self.url.starts_with("sqlite:")
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://lighter-sanctum.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 8,
            migrate: true,
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError("database.url cannot be empty".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be > 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError(
                "database.min_connections cannot exceed database.max_connections".to_string(),
            ));
        }
        if self.connect_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "database.connect_timeout must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
