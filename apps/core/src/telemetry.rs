//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events; embedding applications
//! call `init_tracing` once at startup. Filtering follows `RUST_LOG` and
//! defaults to `info`.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::EngineError;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_tracing(format: LogFormat) -> Result<(), EngineError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()).with_target(true);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| EngineError::Telemetry(e.to_string()))
}
