//! Search-demand normalization.
//!
//! Volume is scaled logarithmically (raw counts span many orders of
//! magnitude), growth piecewise-linearly with a knee at 100% growth, and the
//! two are blended with the commercial intent of related queries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::calculate_commercial_intent;
use super::scale::{clamp_score, round_score, LogScale, MAX_SCORE};
use super::traits::{SignalKind, SignalNormalizer};

/// Volume 100 scores 20, each further decade adds 20 points.
const VOLUME_SCALE: LogScale = LogScale::new(2.0, 4.0, 20.0);

/// Score reached at exactly 100% growth
const GROWTH_KNEE_SCORE: f64 = 80.0;
/// Points per unit of growth beyond the knee
const GROWTH_TAIL_SLOPE: f64 = 20.0;

const VOLUME_WEIGHT: f64 = 0.4;
const GROWTH_WEIGHT: f64 = 0.4;
const INTENT_WEIGHT: f64 = 0.2;

/// Raw search-demand observation for a niche
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeasurement {
    /// Monthly search volume (non-negative count)
    pub search_volume: f64,
    /// Growth ratio; negative means decline
    pub growth_rate: f64,
    /// Related query strings, in provider order
    #[serde(default)]
    pub related_queries: Vec<String>,
}

/// Map a raw search volume onto 0-100; non-positive volume scores `0`.
pub fn normalize_volume(volume: f64) -> u8 {
    if volume.is_nan() || volume <= 0.0 {
        return 0;
    }
    round_score(VOLUME_SCALE.score(volume))
}

/// Map a growth ratio onto 0-100; any decline scores `0`.
pub fn normalize_growth(rate: f64) -> u8 {
    if rate.is_nan() || rate < 0.0 {
        return 0;
    }

    let score = if rate <= 1.0 {
        rate * GROWTH_KNEE_SCORE
    } else {
        (GROWTH_KNEE_SCORE + (rate - 1.0) * GROWTH_TAIL_SLOPE).min(MAX_SCORE)
    };

    round_score(score)
}

/// Blend volume, growth and commercial intent into one search score.
///
/// Returns `0` without looking at the queries when neither volume nor
/// growth registers.
pub fn calculate_search_score(measurement: &SearchMeasurement) -> u8 {
    let volume_score = normalize_volume(measurement.search_volume);
    let growth_score = normalize_growth(measurement.growth_rate);

    if volume_score == 0 && growth_score == 0 {
        return 0;
    }

    let intent_score = calculate_commercial_intent(&measurement.related_queries);

    let blended = f64::from(volume_score) * VOLUME_WEIGHT
        + f64::from(growth_score) * GROWTH_WEIGHT
        + f64::from(intent_score) * INTENT_WEIGHT;
    let score = round_score(clamp_score(blended));

    debug!(
        volume_score,
        growth_score, intent_score, score, "search signal normalized"
    );

    score
}

impl SignalNormalizer for SearchMeasurement {
    fn kind(&self) -> SignalKind {
        SignalKind::Search
    }

    fn normalize(&self) -> u8 {
        calculate_search_score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_non_positive() {
        assert_eq!(normalize_volume(0.0), 0);
        assert_eq!(normalize_volume(-250.0), 0);
        assert_eq!(normalize_volume(f64::NAN), 0);
    }

    #[test]
    fn test_volume_scale() {
        assert_eq!(normalize_volume(100.0), 20);
        assert_eq!(normalize_volume(10_000.0), 60);
        assert_eq!(normalize_volume(100_000.0), 80);
        assert_eq!(normalize_volume(1_000_000.0), 100);
        assert_eq!(normalize_volume(50_000_000.0), 100);
        // Below 10 searches the log curve clamps to zero.
        assert_eq!(normalize_volume(5.0), 0);
    }

    #[test]
    fn test_growth_pieces() {
        assert_eq!(normalize_growth(-0.3), 0);
        assert_eq!(normalize_growth(0.0), 0);
        assert_eq!(normalize_growth(0.5), 40);
        assert_eq!(normalize_growth(1.0), 80);
        assert_eq!(normalize_growth(1.5), 90);
        assert_eq!(normalize_growth(2.0), 100);
        assert_eq!(normalize_growth(9.0), 100);
        assert_eq!(normalize_growth(f64::INFINITY), 100);
    }

    #[test]
    fn test_no_activity_short_circuits() {
        let measurement = SearchMeasurement {
            search_volume: 0.0,
            growth_rate: 0.0,
            related_queries: vec!["buy now".to_string()],
        };
        assert_eq!(calculate_search_score(&measurement), 0);
    }

    #[test]
    fn test_blended_score() {
        // volume 10k -> 60, growth 0.5 -> 40, intent (80 + 55) / 2 -> 68 (67.5 rounded up)
        let measurement = SearchMeasurement {
            search_volume: 10_000.0,
            growth_rate: 0.5,
            related_queries: vec!["notion pricing".to_string(), "notion vs coda".to_string()],
        };
        // 24 + 16 + 13.6 = 53.6
        assert_eq!(calculate_search_score(&measurement), 54);
        assert_eq!(measurement.normalize(), 54);
        assert_eq!(measurement.kind(), SignalKind::Search);
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{"searchVolume": 2500, "growthRate": 0.25}"#;
        let measurement: SearchMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(measurement.search_volume, 2500.0);
        assert!(measurement.related_queries.is_empty());
    }
}
