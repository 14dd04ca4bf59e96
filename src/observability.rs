use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing and logging
///
/// Structured JSON output in production (`ENVIRONMENT=production`),
/// pretty console output otherwise. Log level comes from `RUST_LOG`
/// when set, the configured level otherwise.
pub fn init_observability(service_name: &str, service_version: &str, log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}
