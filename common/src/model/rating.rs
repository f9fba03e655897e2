use serde::{Deserialize, Serialize};

/// Count of ratings received at each star level.
///
/// A breakdown is always handled as a complete snapshot: submitting one
/// replaces whatever was stored before, so clients can re-send the same
/// snapshot without inflating the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingBreakdown {
    pub five: u32,
    pub four: u32,
    pub three: u32,
    pub two: u32,
    pub one: u32,
}

impl RatingBreakdown {
    /// Number of ratings across all star levels. Summed as `u64` so no
    /// combination of `u32` counts can overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.five)
            + u64::from(self.four)
            + u64::from(self.three)
            + u64::from(self.two)
            + u64::from(self.one)
    }

    /// Sum of every rating weighted by its star value.
    pub fn weighted_sum(&self) -> u64 {
        5 * u64::from(self.five)
            + 4 * u64::from(self.four)
            + 3 * u64::from(self.three)
            + 2 * u64::from(self.two)
            + u64::from(self.one)
    }

    /// Weighted average rounded to one decimal place, or `0.0` when no
    /// rating has been recorded.
    pub fn average(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let mean = self.weighted_sum() as f64 / total as f64;
        (mean * 10.0).round() / 10.0
    }
}
