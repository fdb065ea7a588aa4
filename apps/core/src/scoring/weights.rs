//! Fixed aggregation weights.
//!
//! Weights are held as whole percentages so their sum can be checked exactly
//! at compile time.

use crate::signals::SignalKind;

pub const PAIN_WEIGHT_PERCENT: u32 = 25;
pub const SPEND_WEIGHT_PERCENT: u32 = 25;
pub const SEARCH_WEIGHT_PERCENT: u32 = 20;
pub const CONTENT_WEIGHT_PERCENT: u32 = 15;
pub const APP_WEIGHT_PERCENT: u32 = 15;

const _: () = assert!(
    PAIN_WEIGHT_PERCENT
        + SPEND_WEIGHT_PERCENT
        + SEARCH_WEIGHT_PERCENT
        + CONTENT_WEIGHT_PERCENT
        + APP_WEIGHT_PERCENT
        == 100
);

impl SignalKind {
    /// Weight as a whole percentage
    pub fn weight_percent(&self) -> u32 {
        match self {
            SignalKind::Pain => PAIN_WEIGHT_PERCENT,
            SignalKind::Spend => SPEND_WEIGHT_PERCENT,
            SignalKind::Search => SEARCH_WEIGHT_PERCENT,
            SignalKind::Content => CONTENT_WEIGHT_PERCENT,
            SignalKind::App => APP_WEIGHT_PERCENT,
        }
    }

    /// Weight as a fraction of the composite score
    pub fn weight(&self) -> f64 {
        f64::from(self.weight_percent()) / 100.0
    }
}
