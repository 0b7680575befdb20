//! Per-row seizure risk scoring.
//!
//! There is no trained model here. [`MockScorer`] draws a uniform random
//! probability for every row; the [`RiskScorer`] trait is the seam a real model
//! would plug into without touching the dashboard.

mod mock;
mod tips;

pub use mock::MockScorer;
pub use tips::{
    prevention_tips, prevention_tips_above, AGE_OVER_60_TIP, AGE_UNDER_20_TIP, FEMALE_TIP,
    HIGH_RISK_TIPS,
};

use std::fmt;

use crate::core::dataset::{Dataset, Row};
use crate::core::profile::PatientProfile;

pub const DEFAULT_RISK_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    SeizureRisk,
    NoRisk,
}

impl RiskLabel {
    /// Strictly above `threshold` is a risk; the boundary itself is not.
    pub fn classify(probability: f64, threshold: f64) -> Self {
        if probability > threshold {
            RiskLabel::SeizureRisk
        } else {
            RiskLabel::NoRisk
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::SeizureRisk => "Seizure Risk",
            RiskLabel::NoRisk => "No Risk",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RiskLabel::SeizureRisk => "🔴",
            RiskLabel::NoRisk => "🟢",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowPrediction {
    pub row: usize,
    /// Percentage, two decimal places.
    pub probability: f64,
    pub label: RiskLabel,
    pub tips: Vec<&'static str>,
}

impl RowPrediction {
    /// Builds the label and tips from a probability and the patient profile.
    pub fn from_probability(
        row: usize,
        probability: f64,
        threshold: f64,
        profile: &PatientProfile,
    ) -> Self {
        Self {
            row,
            probability,
            label: RiskLabel::classify(probability, threshold),
            tips: prevention_tips_above(
                probability,
                threshold,
                profile.age(),
                profile.gender(),
            ),
        }
    }

    /// Tips joined with single spaces; empty when no rule applied.
    pub fn tips_text(&self) -> String {
        self.tips.join(" ")
    }
}

pub trait RiskScorer {
    fn score_row(&mut self, row: &Row<'_>, profile: &PatientProfile) -> RowPrediction;
}

pub fn score_dataset<S: RiskScorer + ?Sized>(
    dataset: &Dataset,
    profile: &PatientProfile,
    scorer: &mut S,
) -> Vec<RowPrediction> {
    dataset
        .rows()
        .map(|row| scorer.score_row(&row, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Gender;

    #[test]
    fn boundary_probability_is_not_a_risk() {
        assert_eq!(RiskLabel::classify(80.0, 80.0), RiskLabel::NoRisk);
        assert_eq!(RiskLabel::classify(80.01, 80.0), RiskLabel::SeizureRisk);
        assert_eq!(RiskLabel::classify(30.0, 80.0), RiskLabel::NoRisk);
    }

    #[test]
    fn prediction_tips_follow_profile() {
        let profile = PatientProfile::new("Lee", 15, Gender::Male).unwrap();
        let prediction = RowPrediction::from_probability(0, 85.0, 80.0, &profile);
        assert_eq!(prediction.label, RiskLabel::SeizureRisk);
        assert_eq!(
            prediction.tips_text(),
            "Avoid bright or flashing lights. Maintain strict sleep schedule. \
             Take prescribed medications regularly. Avoid video games with intense visuals."
        );
    }

    #[test]
    fn no_rules_means_empty_tips() {
        let profile = PatientProfile::new("Sam", 40, Gender::Other).unwrap();
        let prediction = RowPrediction::from_probability(2, 55.5, 80.0, &profile);
        assert_eq!(prediction.label, RiskLabel::NoRisk);
        assert_eq!(prediction.tips_text(), "");
    }
}
