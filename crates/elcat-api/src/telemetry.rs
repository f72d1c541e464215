//! # Tracing Subscriber Setup
//!
//! Structured logs through `tracing-subscriber`. The filter comes from
//! `RUST_LOG`, falling back to the caller's default directive. JSON output
//! is selected with `LOG_FORMAT=json` or by the caller. Logs go to stderr.

use tracing_subscriber::EnvFilter;

/// Whether `LOG_FORMAT` asks for JSON lines.
pub fn json_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(
    json: bool,
    default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
