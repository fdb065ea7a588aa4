//! # Demand Engine Core
//!
//! Deterministic scoring of market-demand signals for business niches.
//!
//! ## Modules
//! - `signals`: per-signal normalizers onto a common 0-100 scale, and the
//!   commercial-intent classifier
//! - `scoring`: fixed-weight unified demand score with a per-signal breakdown
//! - `entities`: rule-based competitor recognition and known-brand linking
//! - `analyzer`: niche scorecards, niche ranking and competitor analysis
//! - `config` / `telemetry` / `error`: environment configuration, tracing
//!   setup and the crate error type
//!
//! Scoring and recognition are pure functions; only loading configuration or
//! reference data and installing the subscriber can fail.

pub mod analyzer;
pub mod config;
pub mod entities;
pub mod error;
pub mod scoring;
pub mod signals;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use analyzer::{NicheScorecard, NicheSignals, OpportunityAnalyzer};
pub use config::{EngineConfig, LogFormat};
pub use entities::{
    extract_entities, link_to_known_brands, recognize_competitors, BrandTable, Entity, EntityType,
    KnownBrandEntry, MatchSource,
};
pub use error::EngineError;
pub use scoring::{calculate_unified_demand_score, OpportunityTier, SignalScore, SignalValues, UnifiedDemandResult};
pub use signals::{
    calculate_commercial_intent, calculate_search_score, normalize_growth, normalize_volume,
    SearchMeasurement, SignalKind, SignalNormalizer,
};
pub use telemetry::init_tracing;
