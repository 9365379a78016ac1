use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

use crate::errors::Result;

/// Initialize tracing subscriber.
///
/// Behavior:
/// - Log level is read from `SALARYTAP_LOG_LEVEL` if set, otherwise falls back to `RUST_LOG`
///   (via try_from_default_env), then to `info`.
/// - Output format can be set via `SALARYTAP_LOG_FORMAT=json` to enable JSON output. Any other
///   value uses the default human-readable formatter.
/// - Everything goes to stderr; stdout is reserved for the report tables.
pub fn init_tracing() -> Result<()> {
    // Allow explicit SALARYTAP_LOG_LEVEL override, else fall back to RUST_LOG / default
    let filter = match std::env::var("SALARYTAP_LOG_LEVEL") {
        Ok(lvl) => EnvFilter::new(lvl),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // JSON output opt-in (SALARYTAP_LOG_FORMAT=json)
    let use_json = std::env::var("SALARYTAP_LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let fmt_layer = if use_json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
