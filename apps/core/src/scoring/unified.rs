//! Unified demand score: fixed-weight linear aggregation of the five
//! normalized signals.
//!
//! A missing signal is passed as `0` and still carries its weight, so partial
//! evidence lowers the composite instead of rescaling the remaining weights.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::signals::scale::{clamp_score, round_score};
use crate::signals::SignalKind;

/// Normalized input scores, one per signal kind. `Default` is "no data".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalValues {
    #[serde(default, alias = "pain_score")]
    pub pain: f64,
    #[serde(default, alias = "spend_score")]
    pub spend: f64,
    #[serde(default, alias = "search_score")]
    pub search: f64,
    #[serde(default, alias = "content_score")]
    pub content: f64,
    #[serde(default, alias = "app_score")]
    pub app: f64,
}

impl SignalValues {
    pub fn new(pain: f64, spend: f64, search: f64, content: f64, app: f64) -> Self {
        Self {
            pain,
            spend,
            search,
            content,
            app,
        }
    }

    pub fn get(&self, kind: SignalKind) -> f64 {
        match kind {
            SignalKind::Pain => self.pain,
            SignalKind::Spend => self.spend,
            SignalKind::Search => self.search,
            SignalKind::Content => self.content,
            SignalKind::App => self.app,
        }
    }

    pub fn set(&mut self, kind: SignalKind, value: f64) {
        match kind {
            SignalKind::Pain => self.pain = value,
            SignalKind::Spend => self.spend = value,
            SignalKind::Search => self.search = value,
            SignalKind::Content => self.content = value,
            SignalKind::App => self.app = value,
        }
    }

    /// Builder-style `set`
    pub fn with(mut self, kind: SignalKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }
}

/// One signal's share of the composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalScore {
    /// Input value after clamping to `[0, 100]`
    pub value: f64,
    /// Fixed weight of the signal kind
    pub weight: f64,
    /// `value * weight`, unrounded
    pub contribution: f64,
}

/// Coarse reading of a unified score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityTier {
    Weak,
    Emerging,
    Promising,
    Strong,
}

impl OpportunityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => OpportunityTier::Strong,
            50..=74 => OpportunityTier::Promising,
            25..=49 => OpportunityTier::Emerging,
            _ => OpportunityTier::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityTier::Weak => "weak",
            OpportunityTier::Emerging => "emerging",
            OpportunityTier::Promising => "promising",
            OpportunityTier::Strong => "strong",
        }
    }
}

impl fmt::Display for OpportunityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Composite score plus the per-signal audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedDemandResult {
    /// Rounded composite in `0..=100`
    pub unified_score: u8,
    /// Exact per-signal values, weights and contributions
    pub breakdown: BTreeMap<SignalKind, SignalScore>,
}

impl UnifiedDemandResult {
    pub fn tier(&self) -> OpportunityTier {
        OpportunityTier::from_score(self.unified_score)
    }

    /// Contribution of one signal, `0.0` if absent from the breakdown
    pub fn contribution(&self, kind: SignalKind) -> f64 {
        self.breakdown
            .get(&kind)
            .map(|s| s.contribution)
            .unwrap_or(0.0)
    }

    /// Signal contributing the most points; ties go to the one listed first
    pub fn dominant_signal(&self) -> Option<SignalKind> {
        SignalKind::ALL
            .iter()
            .copied()
            .filter(|k| self.contribution(*k) > 0.0)
            .fold(None, |best: Option<SignalKind>, kind| match best {
                Some(b) if self.contribution(b) >= self.contribution(kind) => Some(b),
                _ => Some(kind),
            })
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .breakdown
            .iter()
            .map(|(kind, s)| format!("{} {:.0}x{:.2}={:.2}", kind, s.value, s.weight, s.contribution))
            .collect();
        format!(
            "Unified: {} ({}), {}",
            self.unified_score,
            self.tier(),
            parts.join(", ")
        )
    }
}

/// Combine five normalized signal scores into the unified demand score.
///
/// Out-of-range inputs are clamped to `[0, 100]` (NaN counts as `0`); only
/// the final composite is rounded.
pub fn calculate_unified_demand_score(scores: &SignalValues) -> UnifiedDemandResult {
    let mut breakdown = BTreeMap::new();
    let mut total = 0.0;

    for kind in SignalKind::ALL {
        let value = clamp_score(scores.get(kind));
        let weight = kind.weight();
        let contribution = value * weight;
        total += contribution;

        breakdown.insert(
            kind,
            SignalScore {
                value,
                weight,
                contribution,
            },
        );
    }

    let result = UnifiedDemandResult {
        unified_score: round_score(total),
        breakdown,
    };

    debug!(unified_score = result.unified_score, raw_total = total, "unified demand score computed");

    result
}
