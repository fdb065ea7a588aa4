//! Rule-based entity recognizer.
//!
//! Runs the matchers in priority order (known brands, comparison cues, bare
//! capitalization, lone sentence-initial capitals). Tokens claimed by an earlier matcher are off-limits to
//! later ones, and repeated names keep their most confident sighting.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::brands::BrandTable;
use super::entity::{Entity, EntityType};
use super::matchers::{
    CapitalizationMatcher, ComparisonMatcher, EntityMatcher, KnownBrandMatcher, SentenceStartMatcher,
};
use super::tokens::tokenize;

/// Default floor for `recognize_competitors`
pub const DEFAULT_MIN_COMPETITOR_CONFIDENCE: f32 = 0.5;

static DEFAULT_RECOGNIZER: LazyLock<EntityRecognizer<'static>> =
    LazyLock::new(|| EntityRecognizer::new(BrandTable::builtin()));

/// Entity recognizer over an ordered list of matchers
pub struct EntityRecognizer<'a> {
    matchers: Vec<Box<dyn EntityMatcher + 'a>>,
    min_competitor_confidence: f32,
}

impl<'a> EntityRecognizer<'a> {
    /// Recognizer with the standard matchers backed by `table`
    pub fn new(table: &'a BrandTable) -> Self {
        let matchers: Vec<Box<dyn EntityMatcher + 'a>> = vec![
            Box::new(KnownBrandMatcher::new(table)),
            Box::new(ComparisonMatcher),
            Box::new(CapitalizationMatcher),
            Box::new(SentenceStartMatcher),
        ];

        Self {
            matchers,
            min_competitor_confidence: DEFAULT_MIN_COMPETITOR_CONFIDENCE,
        }
    }

    /// Set the confidence floor used by `recognize_competitors`
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_competitor_confidence = min_confidence.clamp(0.0, 1.0);
        self
    }

    /// Append a matcher at the lowest priority
    pub fn with_matcher(mut self, matcher: Box<dyn EntityMatcher + 'a>) -> Self {
        self.matchers.push(matcher);
        self
    }

    pub fn min_competitor_confidence(&self) -> f32 {
        self.min_competitor_confidence
    }

    /// Extract candidate entities, ordered by first appearance.
    pub fn extract(&self, query: &str) -> Vec<Entity> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return vec![];
        }

        let mut claimed = vec![false; tokens.len()];
        // lower-cased name -> (first position, entity)
        let mut found: HashMap<String, (usize, Entity)> = HashMap::new();

        for matcher in &self.matchers {
            let source = matcher.source();

            for candidate in matcher.find(&tokens) {
                if candidate.start >= candidate.end || candidate.end > tokens.len() {
                    continue;
                }
                let span = candidate.start..candidate.end;
                if claimed[span.clone()].iter().any(|&c| c) {
                    continue;
                }
                claimed[span].iter_mut().for_each(|c| *c = true);

                let key = candidate.name.to_lowercase();
                let entity = Entity::competitor(candidate.name, source);
                match found.get_mut(&key) {
                    Some((position, existing)) => {
                        *position = (*position).min(candidate.start);
                        if entity.confidence > existing.confidence {
                            *existing = entity;
                        }
                    }
                    None => {
                        found.insert(key, (candidate.start, entity));
                    }
                }
            }
        }

        let mut ordered: Vec<(usize, Entity)> = found.into_values().collect();
        ordered.sort_by_key(|(position, _)| *position);
        let entities: Vec<Entity> = ordered.into_iter().map(|(_, e)| e).collect();

        debug!(tokens = tokens.len(), entities = entities.len(), "entities extracted");

        entities
    }

    /// Names of competitor entities at or above the confidence floor
    pub fn recognize_competitors(&self, query: &str) -> Vec<String> {
        self.extract(query)
            .into_iter()
            .filter(|e| {
                e.entity_type == EntityType::Competitor
                    && e.confidence >= self.min_competitor_confidence
            })
            .map(|e| e.name)
            .collect()
    }
}

impl EntityRecognizer<'static> {
    /// Shared recognizer over the built-in brand table
    pub fn shared() -> &'static EntityRecognizer<'static> {
        &DEFAULT_RECOGNIZER
    }
}

/// Extract entities from `query` with the built-in brand table.
pub fn extract_entities(query: &str) -> Vec<Entity> {
    EntityRecognizer::shared().extract(query)
}

/// Competitor names in `query` with the default confidence floor.
pub fn recognize_competitors(query: &str) -> Vec<String> {
    EntityRecognizer::shared().recognize_competitors(query)
}
