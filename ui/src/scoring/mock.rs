use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{RiskScorer, RowPrediction, DEFAULT_RISK_THRESHOLD};
use crate::core::config::{DashboardConfig, PROBABILITY_BOUNDS};
use crate::core::dataset::Row;
use crate::core::profile::PatientProfile;

/// Placeholder scorer: a uniform random probability per row, rounded to two
/// decimals. Row values are ignored and results differ on every run.
#[derive(Debug, Clone)]
pub struct MockScorer<R = StdRng> {
    rng: R,
    min: f64,
    max: f64,
    threshold: f64,
}

impl MockScorer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MockScorer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            min: PROBABILITY_BOUNDS.0,
            max: PROBABILITY_BOUNDS.1,
            threshold: DEFAULT_RISK_THRESHOLD,
        }
    }

    /// Takes range and threshold from `config`. The range is clamped into
    /// [`PROBABILITY_BOUNDS`]; an empty or non-finite range keeps the default.
    pub fn with_config(mut self, config: &DashboardConfig) -> Self {
        let (lo, hi) = PROBABILITY_BOUNDS;
        let min = config.probability_min.clamp(lo, hi);
        let max = config.probability_max.clamp(lo, hi);
        if min < max {
            self.min = min;
            self.max = max;
        }
        self.threshold = config.risk_threshold;
        self
    }

    fn draw(&mut self) -> f64 {
        let raw = self.rng.gen_range(self.min..self.max);
        (raw * 100.0).round() / 100.0
    }
}

impl<R: Rng> RiskScorer for MockScorer<R> {
    fn score_row(&mut self, row: &Row<'_>, profile: &PatientProfile) -> RowPrediction {
        let probability = self.draw();
        RowPrediction::from_probability(row.index, probability, self.threshold, profile)
    }
}
