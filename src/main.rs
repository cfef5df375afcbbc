use clap::Parser;
use lighter_sanctum::cli::Cli;
use lighter_sanctum::{config, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load()?;

    telemetry::init(&config.observability)?;

    cli.run(config).await
}
