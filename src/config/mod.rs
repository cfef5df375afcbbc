pub mod app;
pub mod auth;
pub mod database;
pub mod observability;
pub mod server;

pub use app::{ApiConfig, AppConfig, AppMetadata};
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use observability::{LogFormat, ObservabilityConfig};
pub use server::ServerConfig;

/// Prefix of the environment variables that override configuration files.
pub const ENV_PREFIX: &str = "LIGHTER_SANCTUM";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Checks a configuration section after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
