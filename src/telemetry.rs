use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `observability.level`. Records emitted through the
/// `log` facade (actix's request logger) are forwarded as well. Output
/// goes to stderr so CLI commands keep stdout for their result.
pub fn init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Pretty => builder.finish().try_init()?,
        LogFormat::Json => builder.json().finish().try_init()?,
    }

    Ok(())
}
