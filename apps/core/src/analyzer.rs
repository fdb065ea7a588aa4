//! Opportunity Analyzer - orchestrates the engine for whole niches.
//!
//! Normalizes whatever raw measurements a niche has, aggregates them into the
//! unified score, and wraps the result in a timestamped scorecard. Also runs
//! competitor extraction plus brand linking for free-text queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::entities::{BrandLinker, BrandTable, Entity, EntityRecognizer};
use crate::scoring::{calculate_unified_demand_score, OpportunityTier, SignalValues, UnifiedDemandResult};
use crate::signals::{
    AppMeasurement, ContentMeasurement, PainMeasurement, SearchMeasurement, SignalNormalizer,
    SpendMeasurement,
};

/// Raw measurements collected for one niche. Absent ones score `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheSignals {
    pub niche: String,
    #[serde(default)]
    pub pain: Option<PainMeasurement>,
    #[serde(default)]
    pub spend: Option<SpendMeasurement>,
    #[serde(default)]
    pub search: Option<SearchMeasurement>,
    #[serde(default)]
    pub content: Option<ContentMeasurement>,
    #[serde(default)]
    pub app: Option<AppMeasurement>,
}

impl NicheSignals {
    pub fn new(niche: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            ..Default::default()
        }
    }

    pub fn with_pain(mut self, measurement: PainMeasurement) -> Self {
        self.pain = Some(measurement);
        self
    }

    pub fn with_spend(mut self, measurement: SpendMeasurement) -> Self {
        self.spend = Some(measurement);
        self
    }

    pub fn with_search(mut self, measurement: SearchMeasurement) -> Self {
        self.search = Some(measurement);
        self
    }

    pub fn with_content(mut self, measurement: ContentMeasurement) -> Self {
        self.content = Some(measurement);
        self
    }

    pub fn with_app(mut self, measurement: AppMeasurement) -> Self {
        self.app = Some(measurement);
        self
    }

    /// Normalized score of every signal
    pub fn signal_values(&self) -> SignalValues {
        SignalValues::new(
            normalized(&self.pain),
            normalized(&self.spend),
            normalized(&self.search),
            normalized(&self.content),
            normalized(&self.app),
        )
    }

    /// Number of signals with a measurement attached
    pub fn coverage(&self) -> usize {
        [
            self.pain.is_some(),
            self.spend.is_some(),
            self.search.is_some(),
            self.content.is_some(),
            self.app.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

fn normalized<M: SignalNormalizer>(measurement: &Option<M>) -> f64 {
    measurement
        .as_ref()
        .map(|m| f64::from(m.normalize()))
        .unwrap_or(0.0)
}

/// Scored niche, ready to be stored or compared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheScorecard {
    pub id: Uuid,
    pub niche: String,
    /// Normalized inputs to the aggregator
    pub signals: SignalValues,
    pub result: UnifiedDemandResult,
    pub tier: OpportunityTier,
    pub scored_at: DateTime<Utc>,
    pub processing_time_us: u64,
}

impl NicheScorecard {
    pub fn unified_score(&self) -> u8 {
        self.result.unified_score
    }
}

/// Main analyzer tying the signal, scoring and entity modules together
pub struct OpportunityAnalyzer<'a> {
    recognizer: EntityRecognizer<'a>,
    linker: BrandLinker<'a>,
}

impl Default for OpportunityAnalyzer<'static> {
    fn default() -> Self {
        Self::new(BrandTable::builtin())
    }
}

impl<'a> OpportunityAnalyzer<'a> {
    /// Analyzer over `table` with the default competitor threshold
    pub fn new(table: &'a BrandTable) -> Self {
        Self {
            recognizer: EntityRecognizer::new(table),
            linker: BrandLinker::new(table),
        }
    }

    /// Analyzer over `table` with the threshold from `config`
    pub fn from_config(config: &EngineConfig, table: &'a BrandTable) -> Self {
        Self {
            recognizer: EntityRecognizer::new(table).with_min_confidence(config.min_competitor_confidence),
            linker: BrandLinker::new(table),
        }
    }

    /// Score a single niche
    pub fn score_niche(&self, signals: &NicheSignals) -> NicheScorecard {
        let start = Instant::now();

        let values = signals.signal_values();
        let result = calculate_unified_demand_score(&values);
        let tier = result.tier();

        debug!(
            niche = %signals.niche,
            coverage = signals.coverage(),
            "{}",
            result.summary()
        );

        NicheScorecard {
            id: Uuid::new_v4(),
            niche: signals.niche.clone(),
            signals: values,
            result,
            tier,
            scored_at: Utc::now(),
            processing_time_us: start.elapsed().as_micros() as u64,
        }
    }

    /// Score every niche, best first; equal scores are ordered by niche name.
    pub fn rank_niches(&self, niches: &[NicheSignals]) -> Vec<NicheScorecard> {
        let mut cards: Vec<NicheScorecard> = niches.iter().map(|n| self.score_niche(n)).collect();

        cards.sort_by(|a, b| {
            b.unified_score()
                .cmp(&a.unified_score())
                .then_with(|| a.niche.cmp(&b.niche))
        });

        if let Some(top) = cards.first() {
            info!(
                "Ranked {} niches, top: {} ({}, {})",
                cards.len(),
                top.niche,
                top.unified_score(),
                top.tier
            );
        }

        cards
    }

    /// Entities mentioned in `query`, enriched with brand metadata
    pub fn analyze_competitors(&self, query: &str) -> Vec<Entity> {
        let entities = self.recognizer.extract(query);
        self.linker.link(&entities)
    }

    /// Competitor names in `query` above the configured threshold
    pub fn competitor_names(&self, query: &str) -> Vec<String> {
        self.recognizer.recognize_competitors(query)
    }
}
