//! Score classification utilities
//!
//! All scores in the IDM live on a canonical 0-100 scale. This module
//! provides the pure classification functions layered on top of that
//! scale: the four-tier score band, the peer comparison band derived
//! from a percentile, the overall health descriptor, and the trajectory
//! classification.

use serde::{Deserialize, Serialize};

/// Performance tier derived purely from a 0-100 score.
///
/// Bands are exhaustive and non-overlapping: Excellence >= 80,
/// Proficiency 60-79, Attention 40-59, Critical < 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Critical,
    Attention,
    Proficiency,
    Excellence,
}

impl ScoreBand {
    /// Classify a 0-100 score into its band
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellence
        } else if score >= 60.0 {
            ScoreBand::Proficiency
        } else if score >= 40.0 {
            ScoreBand::Attention
        } else {
            ScoreBand::Critical
        }
    }
}

/// Peer-relative standing derived purely from a percentile.
///
/// Boundaries are inclusive on the lower edge: < 25 below_average,
/// [25, 50) average, [50, 75) above_average, >= 75 top_quartile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBand {
    BelowAverage,
    Average,
    AboveAverage,
    TopQuartile,
}

impl ComparisonBand {
    /// Classify a percentile into its comparison band
    pub fn for_percentile(percentile: f64) -> Self {
        if percentile >= 75.0 {
            ComparisonBand::TopQuartile
        } else if percentile >= 50.0 {
            ComparisonBand::AboveAverage
        } else if percentile >= 25.0 {
            ComparisonBand::Average
        } else {
            ComparisonBand::BelowAverage
        }
    }

    /// Human-readable label for narratives
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonBand::BelowAverage => "below average",
            ComparisonBand::Average => "average",
            ComparisonBand::AboveAverage => "above average",
            ComparisonBand::TopQuartile => "top quartile",
        }
    }
}

/// Direction of movement between assessment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trajectory {
    Improving,
    Flat,
    Declining,
}

impl Trajectory {
    /// Classify the movement from a previous score to the current one.
    ///
    /// A dead zone of +/-5 points maps to `Flat`; with no previous score
    /// there is nothing to compare against and the result is `Flat`.
    pub fn from_scores(current: f64, previous: Option<f64>) -> Self {
        match previous {
            None => Trajectory::Flat,
            Some(prev) => {
                let delta = current - prev;
                if delta > 5.0 {
                    Trajectory::Improving
                } else if delta < -5.0 {
                    Trajectory::Declining
                } else {
                    Trajectory::Flat
                }
            }
        }
    }
}

/// Overall health descriptor for the scores summary
pub fn health_descriptor(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent Health"
    } else if score >= 75.0 {
        "Good Health"
    } else if score >= 65.0 {
        "Fair Health"
    } else if score >= 50.0 {
        "Needs Improvement"
    } else {
        "Critical Condition"
    }
}

/// Round to one decimal place, half away from zero.
///
/// Every aggregate score in the IDM (sub-indicator, dimension, chapter,
/// overall) is rounded with this rule so identical inputs always
/// serialize to identical output.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
