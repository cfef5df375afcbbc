use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use crate::config::AppConfig;
use crate::{database, router};

/// Connect, migrate when configured, and serve until shutdown
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.migrate {
        database::migrate(&db)
            .await
            .context("Failed to run migrations")?;
    }

    let db = Data::new(db);
    let auth = Data::new(config.auth.clone());
    let swagger = config.api.swagger_enabled;

    let mut server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .app_data(db.clone())
            .app_data(auth.clone())
            .configure(router::route);

        if swagger {
            app.configure(router::docs)
        } else {
            app
        }
    })
    .shutdown_timeout(config.app.shutdown_timeout);

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    ::tracing::info!(
        name = %config.app.name,
        environment = %config.app.environment,
        host = %config.server.host,
        port = config.server.port,
        "Starting server"
    );

    server
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?
        .run()
        .await?;

    Ok(())
}
