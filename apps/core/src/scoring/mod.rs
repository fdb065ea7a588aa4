//! # Scoring Module
//!
//! Fixed-weight aggregation of the five normalized signals into one
//! comparable opportunity score per niche.
//!
//! ## Components
//! - `weights`: per-signal weights (pain 25%, spend 25%, search 20%, content 15%, app 15%)
//! - `unified`: the aggregator, its breakdown and the opportunity tiers

pub mod unified;
pub mod weights;

pub use unified::{
    calculate_unified_demand_score, OpportunityTier, SignalScore, SignalValues, UnifiedDemandResult,
};
