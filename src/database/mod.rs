//! Database connection setup
//!
//! Builds the shared sea-orm connection pool from [`DatabaseConfig`] and
//! applies the schema migrations shipped in the migration crate.

use lighter_sanctum_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open the connection pool described by `config`
#[::tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());

    if config.is_memory() {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }

    options
        .connect_timeout(config.connect_timeout())
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    ::tracing::info!("Database connected");

    Ok(db)
}

/// A fresh, empty in-memory sqlite database
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    })
    .await
}

/// Apply every pending migration
#[::tracing::instrument(skip(db))]
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;

    ::tracing::info!("Migrations applied");

    Ok(())
}
