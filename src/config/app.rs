use serde::{Deserialize, Serialize};

use super::{
    AuthConfig, ConfigError, DatabaseConfig, ENV_PREFIX, ObservabilityConfig, ServerConfig,
    Validate,
};

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application metadata
    pub app: AppMetadata,
    /// Server configuration (host, port, workers)
    pub server: ServerConfig,
    /// Database configuration (url, pool, migrations)
    pub database: DatabaseConfig,
    /// Token guard configuration (expiration, prefix)
    pub auth: AuthConfig,
    /// Observability configuration (log level and format)
    pub observability: ObservabilityConfig,
    /// API documentation configuration
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name
    pub name: String,
    /// Application environment (development, staging, production)
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

/// API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Serve the OpenAPI document and Swagger UI under `/docs`
    pub swagger_enabled: bool,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "lighter-sanctum".to_string(),
            environment: "development".to_string(),
            shutdown_timeout: 30,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            swagger_enabled: true,
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError("app.environment cannot be empty".to_string()));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError("app.shutdown_timeout must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: LIGHTER_SANCTUM__SERVER__PORT=8080
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use ::config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
