//! Engine configuration.
//!
//! Read from the environment (optionally seeded by a `.env` file):
//! - `DEMAND_ENGINE_MIN_CONFIDENCE`: confidence floor for competitor names (0.0 - 1.0)
//! - `DEMAND_ENGINE_BRANDS_FILE`: JSON file replacing the built-in brand table
//! - `DEMAND_ENGINE_LOG_FORMAT`: `text` or `json`

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;
use validator::Validate;

use crate::entities::{BrandTable, DEFAULT_MIN_COMPETITOR_CONFIDENCE};
use crate::error::EngineError;

pub const ENV_MIN_CONFIDENCE: &str = "DEMAND_ENGINE_MIN_CONFIDENCE";
pub const ENV_BRANDS_FILE: &str = "DEMAND_ENGINE_BRANDS_FILE";
pub const ENV_LOG_FORMAT: &str = "DEMAND_ENGINE_LOG_FORMAT";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(EngineError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Runtime settings for the engine's outer edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EngineConfig {
    /// Minimum confidence for a name to be reported as a competitor.
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_competitor_confidence: f32,
    /// Brand table to load instead of the built-in one.
    #[serde(default)]
    pub brands_file: Option<PathBuf>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_competitor_confidence: DEFAULT_MIN_COMPETITOR_CONFIDENCE,
            brands_file: None,
            log_format: LogFormat::Text,
        }
    }
}

impl EngineConfig {
    /// Load from the process environment, after applying any `.env` file.
    pub fn from_env() -> Result<Self, EngineError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(ENV_MIN_CONFIDENCE, lookup(ENV_MIN_CONFIDENCE)) {
            let value = raw.trim().parse::<f64>()?;
            if !value.is_finite() {
                return Err(EngineError::Config(format!("{} must be a finite number", ENV_MIN_CONFIDENCE)));
            }
            config.min_competitor_confidence = value as f32;
        }
        if let Some(raw) = non_empty(ENV_BRANDS_FILE, lookup(ENV_BRANDS_FILE)) {
            config.brands_file = Some(PathBuf::from(raw.trim()));
        }
        if let Some(raw) = non_empty(ENV_LOG_FORMAT, lookup(ENV_LOG_FORMAT)) {
            config.log_format = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// The configured brand table, or the shared built-in one.
    pub fn load_brand_table(&self) -> Result<Cow<'static, BrandTable>, EngineError> {
        match &self.brands_file {
            Some(path) => Ok(Cow::Owned(BrandTable::from_json_file(path)?)),
            None => Ok(Cow::Borrowed(BrandTable::builtin())),
        }
    }
}

fn non_empty(key: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            warn!("{} is set but empty, using the default", key);
            None
        }
        other => other,
    }
}
