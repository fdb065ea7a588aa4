//! Ad-spend normalization.
//!
//! Advertisers keep paying only for ads that convert, so the number of live
//! ads, the number of distinct advertisers and how long ads keep running are
//! all read as evidence that money changes hands in the niche.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scale::{ratio_score, round_score, LogScale};
use super::traits::{SignalKind, SignalNormalizer};

const ADS_SCALE: LogScale = LogScale::new(0.0, 3.0, 20.0);
const ADVERTISER_SCALE: LogScale = LogScale::new(0.0, 2.0, 20.0);
/// Ads running for a full quarter earn full longevity credit.
const FULL_LONGEVITY_DAYS: f64 = 90.0;

const ADS_WEIGHT: f64 = 0.4;
const ADVERTISER_WEIGHT: f64 = 0.35;
const LONGEVITY_WEIGHT: f64 = 0.25;

/// Ad-library observation for a niche's keywords
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendMeasurement {
    /// Currently active ads
    pub active_ads: u64,
    /// Distinct advertisers behind those ads
    #[serde(default)]
    pub advertisers: u64,
    /// Mean number of days the active ads have been running
    #[serde(default)]
    pub avg_days_running: f64,
}

/// Spend score; `0` when no ads are running.
pub fn calculate_spend_score(measurement: &SpendMeasurement) -> u8 {
    if measurement.active_ads == 0 {
        return 0;
    }

    let ads_score = ADS_SCALE.score(measurement.active_ads as f64);
    let advertiser_score = ADVERTISER_SCALE.score(measurement.advertisers as f64);
    let longevity_score = ratio_score(measurement.avg_days_running, FULL_LONGEVITY_DAYS);

    let score = round_score(
        ads_score * ADS_WEIGHT
            + advertiser_score * ADVERTISER_WEIGHT
            + longevity_score * LONGEVITY_WEIGHT,
    );

    debug!(
        ads_score,
        advertiser_score, longevity_score, score, "spend signal normalized"
    );

    score
}

impl SignalNormalizer for SpendMeasurement {
    fn kind(&self) -> SignalKind {
        SignalKind::Spend
    }

    fn normalize(&self) -> u8 {
        calculate_spend_score(self)
    }
}
