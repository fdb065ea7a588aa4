use std::io;
use thiserror::Error;

/// Errors raised at the edges of the engine: configuration, reference data
/// loading and logging setup. Scoring and recognition never return one.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Represents standard input/output errors (e.g., a missing brands file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed JSON reference data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents data validation errors (e.g., a brand entry without a category).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparseable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a failure to install the tracing subscriber.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl Clone for EngineError {
    fn clone(&self) -> Self {
        match self {
            EngineError::Io(e) => EngineError::Io(io::Error::new(e.kind(), e.to_string())),
            EngineError::Json(e) => EngineError::Validation(format!("JSON error: {}", e)),
            EngineError::Validation(s) => EngineError::Validation(s.clone()),
            EngineError::Config(s) => EngineError::Config(s.clone()),
            EngineError::Telemetry(s) => EngineError::Telemetry(s.clone()),
        }
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(err: validator::ValidationErrors) -> Self {
        EngineError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<std::num::ParseFloatError> for EngineError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EngineError::Config(format!("Number parse error: {}", err))
    }
}
