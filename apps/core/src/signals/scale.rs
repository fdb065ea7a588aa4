//! Shared scaling helpers for the 0-100 signal scale.

/// Upper bound of every normalized score.
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a raw score into `[0, 100]`. NaN is treated as no signal.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_SCORE)
    }
}

/// Clamp and round half-up to an integer score.
pub fn round_score(value: f64) -> u8 {
    (clamp_score(value) + 0.5).floor() as u8
}

/// Logarithmic mapping of a raw count onto the score scale.
///
/// `10^floor_exp` maps to `floor`, and every `decades` orders of magnitude
/// above that climb the remaining `100 - floor` points. Values below the
/// floor fall off linearly in log space until clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    pub floor_exp: f64,
    pub decades: f64,
    pub floor: f64,
}

impl LogScale {
    pub const fn new(floor_exp: f64, decades: f64, floor: f64) -> Self {
        Self {
            floor_exp,
            decades,
            floor,
        }
    }

    /// Unrounded score for `value`; `0` for non-positive or NaN input.
    pub fn score(&self, value: f64) -> f64 {
        if value.is_nan() || value <= 0.0 {
            return 0.0;
        }
        let log_value = value.log10();
        clamp_score(((log_value - self.floor_exp) / self.decades) * (MAX_SCORE - self.floor) + self.floor)
    }
}

/// Linear mapping where `full_at` (and anything above) earns the full 100.
pub fn ratio_score(value: f64, full_at: f64) -> f64 {
    if value.is_nan() || value <= 0.0 || full_at <= 0.0 {
        return 0.0;
    }
    (value / full_at).min(1.0) * MAX_SCORE
}
