//! Classifier: risk-band tallies and score thresholding.
//!
//! Band assignment happens upstream; this module tallies membership over a
//! series whose rows already carry a band, picks the dominant band
//! deterministically, and exposes the raw-score thresholding as a pure
//! function for callers that need to band a score themselves.

use serde::Serialize;

use cashlens_core::num::finite_or_zero;
use cashlens_core::types::{RiskBand, StabilityRow};

/// Membership counts per risk band.
///
/// All three bands are always present, even at count 0: a view iterating
/// the tally never sees a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BandTally {
    /// Number of rows banded low.
    pub low: usize,
    /// Number of rows banded medium.
    pub medium: usize,
    /// Number of rows banded high.
    pub high: usize,
}

impl BandTally {
    /// Count for a single band.
    #[must_use]
    pub fn count(&self, band: RiskBand) -> usize {
        match band {
            RiskBand::Low => self.low,
            RiskBand::Medium => self.medium,
            RiskBand::High => self.high,
        }
    }

    /// Total rows tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// The band with the highest count.
    ///
    /// Ties resolve by the fixed priority High > Medium > Low, so the
    /// result is deterministic; an empty tally (a three-way tie at 0)
    /// therefore reports `High`.
    #[must_use]
    pub fn dominant(&self) -> RiskBand {
        RiskBand::ALL
            .into_iter()
            .max_by_key(|band| (self.count(*band), band.priority()))
            .unwrap_or(RiskBand::High)
    }
}

/// Tallies band membership over a stability series.
///
/// An empty series yields the zero tally with all three keys present.
#[must_use]
pub fn tally_bands(rows: &[StabilityRow]) -> BandTally {
    let mut tally = BandTally::default();
    for row in rows {
        match row.risk_band {
            RiskBand::Low => tally.low += 1,
            RiskBand::Medium => tally.medium += 1,
            RiskBand::High => tally.high += 1,
        }
    }
    tally
}

/// Thresholds for banding a raw stability-adjacent score.
///
/// The intervals are closed-open and cover the whole line with no gaps:
/// `(-inf, medium_floor)` is Low, `[medium_floor, high_floor)` is Medium,
/// `[high_floor, +inf)` is High. A score equal to a floor falls in the
/// upper band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    /// Lowest score banded Medium.
    pub medium_floor: f64,
    /// Lowest score banded High.
    pub high_floor: f64,
}

impl BandThresholds {
    /// Default floor of the Medium band.
    pub const DEFAULT_MEDIUM_FLOOR: f64 = 0.33;
    /// Default floor of the High band.
    pub const DEFAULT_HIGH_FLOOR: f64 = 0.66;
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            medium_floor: Self::DEFAULT_MEDIUM_FLOOR,
            high_floor: Self::DEFAULT_HIGH_FLOOR,
        }
    }
}

/// Bands a raw score against the given thresholds.
///
/// Total over all of `f64`: non-finite scores collapse to 0 first and land
/// in the Low band.
#[must_use]
pub fn score_to_band(score: f64, thresholds: &BandThresholds) -> RiskBand {
    let score = finite_or_zero(score);
    if score < thresholds.medium_floor {
        RiskBand::Low
    } else if score < thresholds.high_floor {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_has_all_keys() {
        let tally = tally_bands(&[]);
        assert_eq!(tally.low, 0);
        assert_eq!(tally.medium, 0);
        assert_eq!(tally.high, 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_tally_and_dominant() {
        let rows = vec![
            StabilityRow::new("w1", 0.8, RiskBand::Low),
            StabilityRow::new("w2", 0.7, RiskBand::Low),
            StabilityRow::new("w3", 0.1, RiskBand::High),
        ];
        let tally = tally_bands(&rows);
        assert_eq!(tally.low, 2);
        assert_eq!(tally.medium, 0);
        assert_eq!(tally.high, 1);
        assert_eq!(tally.dominant(), RiskBand::Low);
    }

    #[test]
    fn test_dominant_tie_prefers_higher_severity() {
        let rows = vec![
            StabilityRow::new("w1", 0.8, RiskBand::Low),
            StabilityRow::new("w2", 0.5, RiskBand::Medium),
        ];
        assert_eq!(tally_bands(&rows).dominant(), RiskBand::Medium);
    }

    #[test]
    fn test_dominant_of_empty_tally() {
        // Three-way tie at zero resolves by priority.
        assert_eq!(tally_bands(&[]).dominant(), RiskBand::High);
    }

    #[test]
    fn test_score_boundaries_fall_upward() {
        let t = BandThresholds::default();
        assert_eq!(score_to_band(0.32, &t), RiskBand::Low);
        assert_eq!(score_to_band(0.33, &t), RiskBand::Medium);
        assert_eq!(score_to_band(0.65, &t), RiskBand::Medium);
        assert_eq!(score_to_band(0.66, &t), RiskBand::High);
    }

    #[test]
    fn test_score_covers_whole_line() {
        let t = BandThresholds::default();
        assert_eq!(score_to_band(-10.0, &t), RiskBand::Low);
        assert_eq!(score_to_band(10.0, &t), RiskBand::High);
    }

    #[test]
    fn test_non_finite_scores_land_low() {
        let t = BandThresholds::default();
        assert_eq!(score_to_band(f64::NAN, &t), RiskBand::Low);
        assert_eq!(score_to_band(f64::NEG_INFINITY, &t), RiskBand::Low);
        // +inf collapses to 0, which is below the medium floor.
        assert_eq!(score_to_band(f64::INFINITY, &t), RiskBand::Low);
    }
}
