use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` takes precedence over the configured level so stdout stays
/// reserved for the calculator display.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(&config.log_level)?,
    };

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    tracing::debug!(level = %config.log_level, json = config.json_logs, "Telemetry initialized");
    Ok(())
}

/// Generate an id tying together the log lines of one calculator session
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span carrying the session id
pub fn create_session_span(session_id: &str) -> tracing::Span {
    tracing::info_span!(
        "calculator_session",
        session.id = session_id,
        otel.kind = "internal"
    )
}
