//! App-store normalization.
//!
//! Review volume shows that people install and care about apps in the
//! niche; a low average rating among incumbents is read as room for a
//! better product.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::{round_score, LogScale, MAX_SCORE};
use super::traits::{SignalKind, SignalNormalizer};

/// 10 reviews score 20, a million saturate.
const REVIEW_SCALE: LogScale = LogScale::new(1.0, 5.0, 20.0);
const APP_SCALE: LogScale = LogScale::new(0.0, 2.0, 20.0);

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

const REVIEW_WEIGHT: f64 = 0.5;
const APP_WEIGHT: f64 = 0.2;
const RATING_GAP_WEIGHT: f64 = 0.3;

/// App-store observation for a niche
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMeasurement {
    /// Apps found for the niche's keywords
    pub app_count: u64,
    /// Reviews summed over those apps
    #[serde(default)]
    pub total_reviews: u64,
    /// Mean star rating; values outside 1..=5 mean "unknown"
    #[serde(default)]
    pub avg_rating: f64,
}

/// Share of the rating range left unclaimed by incumbents, in `[0, 1]`.
fn rating_gap(avg_rating: f64) -> f64 {
    if !(MIN_RATING..=MAX_RATING).contains(&avg_rating) {
        return 0.0;
    }
    (MAX_RATING - avg_rating) / (MAX_RATING - MIN_RATING)
}

/// App score; `0` when no apps exist.
pub fn calculate_app_score(measurement: &AppMeasurement) -> u8 {
    if measurement.app_count == 0 {
        return 0;
    }

    let review_score = REVIEW_SCALE.score(measurement.total_reviews as f64);
    let app_score = APP_SCALE.score(measurement.app_count as f64);
    let gap_score = rating_gap(measurement.avg_rating) * MAX_SCORE;

    let score = round_score(
        review_score * REVIEW_WEIGHT + app_score * APP_WEIGHT + gap_score * RATING_GAP_WEIGHT,
    );

    debug!(review_score, app_score, gap_score, score, "app signal normalized");

    score
}

impl SignalNormalizer for AppMeasurement {
    fn kind(&self) -> SignalKind {
        SignalKind::App
    }

    fn normalize(&self) -> u8 {
        calculate_app_score(self)
    }
}
