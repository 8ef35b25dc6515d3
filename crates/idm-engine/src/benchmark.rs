//! Percentile and benchmark engine
//!
//! Converts 0-100 scores into percentile ranks against a peer cohort's
//! stored distribution, given as five anchor points at the
//! 10th/25th/50th/75th/90th percentiles. Interpolation is piecewise
//! linear between the bracketing anchors; outside the anchor range the
//! nearest segment's slope extrapolates, clamped to [1, 99] so a
//! percentile is never reported as exactly 0 or 100.
//!
//! Cohort resolution degrades gracefully: when no cohort matches the
//! company profile the benchmark fields are simply omitted and a
//! warning is logged. Chapter and overall scores always compute.

use crate::error::{EngineError, Result};
use crate::input::CompanyProfile;
use idm_core::score::ComparisonBand;
use idm_core::types::{Benchmark, ConfidenceLevel, OverallBenchmark};
use idm_core::ChapterCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anchor percentiles of every stored distribution
const ANCHOR_PCTS: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

/// Percentiles are reported strictly inside (0, 100)
const PCT_MIN: f64 = 1.0;
const PCT_MAX: f64 = 99.0;

/// A peer score distribution given as five percentile anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Scores at the 10th/25th/50th/75th/90th percentiles
    anchors: [f64; 5],
}

impl Distribution {
    /// Build a distribution from its anchor scores.
    ///
    /// Anchors must be strictly increasing; equal or inverted anchors
    /// would break interpolation monotonicity.
    pub fn new(p10: f64, p25: f64, p50: f64, p75: f64, p90: f64) -> Result<Self> {
        let anchors = [p10, p25, p50, p75, p90];
        for pair in anchors.windows(2) {
            if pair[1] <= pair[0] {
                return Err(EngineError::InvalidDistribution(format!(
                    "anchors must be strictly increasing, got {:?}",
                    anchors
                )));
            }
        }
        Ok(Self { anchors })
    }

    /// Percentile rank of a score against this distribution.
    ///
    /// Monotonic: percentile(a) <= percentile(b) whenever a <= b.
    pub fn percentile(&self, score: f64) -> f64 {
        let s = &self.anchors;
        let p = &ANCHOR_PCTS;

        let raw = if score <= s[0] {
            // Extrapolate below the 10th-percentile anchor on the first segment's slope
            p[0] + (score - s[0]) * (p[1] - p[0]) / (s[1] - s[0])
        } else if score >= s[4] {
            p[4] + (score - s[4]) * (p[4] - p[3]) / (s[4] - s[3])
        } else {
            let mut result = p[4];
            for i in 0..4 {
                if score <= s[i + 1] {
                    result = p[i] + (score - s[i]) * (p[i + 1] - p[i]) / (s[i + 1] - s[i]);
                    break;
                }
            }
            result
        };

        idm_core::round1(raw.clamp(PCT_MIN, PCT_MAX))
    }
}

/// A peer cohort with its score distributions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkCohort {
    /// Normalized industry key; `general` is the default cohort
    pub industry: String,

    /// Eligibility floors; a company qualifies when at or above both
    pub min_employees: u32,
    pub min_revenue: f64,

    /// Number of peer companies behind the distributions
    pub peer_group_size: u32,

    pub overall: Distribution,

    /// Per-chapter distributions; chapters without one fall back to `overall`
    pub chapters: HashMap<ChapterCode, Distribution>,
}

impl BenchmarkCohort {
    fn distribution_for(&self, chapter: ChapterCode) -> &Distribution {
        self.chapters.get(&chapter).unwrap_or(&self.overall)
    }

    /// Benchmark record for a chapter score
    pub fn chapter_benchmark(&self, chapter: ChapterCode, score: f64) -> Benchmark {
        let percentile = self.distribution_for(chapter).percentile(score);
        let band = ComparisonBand::for_percentile(percentile);
        Benchmark {
            peer_percentile: percentile,
            peer_comparison_band: band,
            band_description: format!(
                "{} percentile among industry peers ({})",
                ordinal(percentile),
                band.label()
            ),
        }
    }

    /// Benchmark record for the overall health score, with cohort provenance
    pub fn overall_benchmark(&self, score: f64) -> OverallBenchmark {
        let percentile = self.overall.percentile(score);
        let band = ComparisonBand::for_percentile(percentile);
        OverallBenchmark {
            peer_percentile: percentile,
            peer_comparison_band: band,
            peer_group_size: self.peer_group_size,
            confidence_level: confidence_for_peer_count(self.peer_group_size),
            benchmark_narrative: format!(
                "Overall business health stands at the {} percentile of {} comparable \
                 companies, {} for this peer group.",
                ordinal(percentile),
                self.peer_group_size,
                band.label()
            ),
        }
    }
}

/// Confidence in a benchmark, from the size of the peer group
pub fn confidence_for_peer_count(peer_count: u32) -> ConfidenceLevel {
    if peer_count >= 500 {
        ConfidenceLevel::High
    } else if peer_count >= 50 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// The stored set of peer cohorts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkLibrary {
    cohorts: Vec<BenchmarkCohort>,
}

impl BenchmarkLibrary {
    /// Library with no cohorts; every resolution degrades
    pub fn empty() -> Self {
        Self { cohorts: Vec::new() }
    }

    /// Add a cohort
    pub fn with_cohort(mut self, cohort: BenchmarkCohort) -> Self {
        self.cohorts.push(cohort);
        self
    }

    /// Select the cohort for a company profile.
    ///
    /// Candidates must match the profile's industry (or be the default
    /// `general` cohort) and have eligibility floors at or below the
    /// profile's size and revenue; missing profile fields use
    /// conservative floors, so an unknown company lands in the broadest
    /// cohort. Among candidates the most specific wins: exact industry
    /// first, then the highest floors satisfied.
    pub fn resolve(&self, profile: &CompanyProfile) -> Option<&BenchmarkCohort> {
        let industry = profile.industry_key();
        let employees = profile.employees();
        let revenue = profile.revenue();

        let selected = self
            .cohorts
            .iter()
            .filter(|c| {
                (c.industry == industry || c.industry == crate::input::profile::DEFAULT_INDUSTRY)
                    && employees >= c.min_employees
                    && revenue >= c.min_revenue
            })
            .max_by(|a, b| {
                let key = |c: &BenchmarkCohort| {
                    (u8::from(c.industry == industry), c.min_employees, c.min_revenue)
                };
                key(a)
                    .partial_cmp(&key(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        if selected.is_none() {
            tracing::warn!(
                industry = %industry,
                employees,
                revenue,
                "no benchmark cohort resolved; omitting benchmark fields"
            );
        }
        selected
    }

    /// The built-in cohort set
    pub fn standard() -> Self {
        fn dist(p10: f64, p25: f64, p50: f64, p75: f64, p90: f64) -> Distribution {
            match Distribution::new(p10, p25, p50, p75, p90) {
                Ok(d) => d,
                Err(e) => unreachable!("built-in distribution invalid: {}", e),
            }
        }

        fn chapters(
            ge: Distribution,
            ph: Distribution,
            pl: Distribution,
            rs: Distribution,
        ) -> HashMap<ChapterCode, Distribution> {
            HashMap::from([
                (ChapterCode::GE, ge),
                (ChapterCode::PH, ph),
                (ChapterCode::PL, pl),
                (ChapterCode::RS, rs),
            ])
        }

        Self::empty()
            .with_cohort(BenchmarkCohort {
                industry: "general".to_string(),
                min_employees: 0,
                min_revenue: 0.0,
                peer_group_size: 1240,
                overall: dist(28.0, 38.0, 46.0, 58.0, 71.0),
                chapters: chapters(
                    dist(26.0, 37.0, 47.0, 59.0, 72.0),
                    dist(30.0, 40.0, 49.0, 60.0, 73.0),
                    dist(27.0, 36.0, 45.0, 57.0, 70.0),
                    dist(25.0, 35.0, 44.0, 56.0, 69.0),
                ),
            })
            .with_cohort(BenchmarkCohort {
                industry: "general".to_string(),
                min_employees: 50,
                min_revenue: 5_000_000.0,
                peer_group_size: 420,
                overall: dist(32.0, 42.0, 51.0, 62.0, 74.0),
                chapters: chapters(
                    dist(31.0, 41.0, 50.0, 61.0, 73.0),
                    dist(33.0, 43.0, 52.0, 63.0, 75.0),
                    dist(30.0, 40.0, 49.0, 60.0, 72.0),
                    dist(29.0, 39.0, 48.0, 59.0, 71.0),
                ),
            })
            .with_cohort(BenchmarkCohort {
                industry: "technology".to_string(),
                min_employees: 0,
                min_revenue: 0.0,
                peer_group_size: 310,
                overall: dist(34.0, 44.0, 53.0, 64.0, 76.0),
                chapters: chapters(
                    dist(35.0, 45.0, 54.0, 65.0, 77.0),
                    dist(32.0, 42.0, 51.0, 62.0, 74.0),
                    dist(33.0, 43.0, 52.0, 63.0, 75.0),
                    dist(34.0, 44.0, 53.0, 64.0, 76.0),
                ),
            })
            .with_cohort(BenchmarkCohort {
                industry: "manufacturing".to_string(),
                min_employees: 0,
                min_revenue: 0.0,
                peer_group_size: 275,
                overall: dist(27.0, 37.0, 46.0, 57.0, 70.0),
                chapters: chapters(
                    dist(25.0, 35.0, 44.0, 55.0, 68.0),
                    dist(29.0, 39.0, 48.0, 59.0, 72.0),
                    dist(26.0, 36.0, 45.0, 56.0, 69.0),
                    dist(28.0, 38.0, 47.0, 58.0, 71.0),
                ),
            })
            .with_cohort(BenchmarkCohort {
                industry: "professional_services".to_string(),
                min_employees: 0,
                min_revenue: 0.0,
                peer_group_size: 42,
                overall: dist(30.0, 40.0, 49.0, 61.0, 73.0),
                chapters: chapters(
                    dist(29.0, 39.0, 48.0, 60.0, 72.0),
                    dist(31.0, 41.0, 50.0, 62.0, 74.0),
                    dist(30.0, 40.0, 49.0, 61.0, 73.0),
                    dist(28.0, 38.0, 47.0, 59.0, 71.0),
                ),
            })
    }
}

/// English ordinal for a (rounded) percentile, e.g. 58 -> "58th"
fn ordinal(percentile: f64) -> String {
    let n = percentile.round() as i64;
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Distribution {
        Distribution::new(28.0, 38.0, 46.0, 58.0, 71.0).unwrap()
    }

    #[test]
    fn test_percentile_at_anchors() {
        let d = reference();
        assert_eq!(d.percentile(28.0), 10.0);
        assert_eq!(d.percentile(38.0), 25.0);
        assert_eq!(d.percentile(46.0), 50.0);
        assert_eq!(d.percentile(58.0), 75.0);
        assert_eq!(d.percentile(71.0), 90.0);
    }

    #[test]
    fn test_percentile_interpolates_between_anchors() {
        let d = reference();
        // Midway between 38 and 46 -> midway between 25 and 50
        assert_eq!(d.percentile(42.0), 37.5);
    }

    #[test]
    fn test_percentile_extrapolates_and_clamps() {
        let d = reference();
        // Below p10: slope 15/10 pct per point; 20 -> 10 - 12 -> clamp to 1
        assert_eq!(d.percentile(20.0), 1.0);
        // Above p90: never reaches 100
        assert_eq!(d.percentile(100.0), 99.0);
        assert!(d.percentile(0.0) >= 1.0);
    }

    #[test]
    fn test_percentile_monotonic() {
        let d = reference();
        assert!(d.percentile(20.0) < d.percentile(40.0));
        assert!(d.percentile(40.0) < d.percentile(60.0));

        let mut prev = 0.0;
        for i in 0..=100 {
            let p = d.percentile(i as f64);
            assert!(p >= prev, "percentile dropped at score {}", i);
            prev = p;
        }
    }

    #[test]
    fn test_rejects_non_increasing_anchors() {
        assert!(Distribution::new(28.0, 38.0, 38.0, 58.0, 71.0).is_err());
        assert!(Distribution::new(50.0, 40.0, 60.0, 70.0, 80.0).is_err());
    }

    #[test]
    fn test_confidence_thresholds() {
        assert_eq!(confidence_for_peer_count(1240), ConfidenceLevel::High);
        assert_eq!(confidence_for_peer_count(500), ConfidenceLevel::High);
        assert_eq!(confidence_for_peer_count(499), ConfidenceLevel::Medium);
        assert_eq!(confidence_for_peer_count(50), ConfidenceLevel::Medium);
        assert_eq!(confidence_for_peer_count(49), ConfidenceLevel::Low);
    }

    #[test]
    fn test_resolve_prefers_exact_industry() {
        let library = BenchmarkLibrary::standard();
        let profile = CompanyProfile {
            industry: Some("Technology".to_string()),
            employee_count: Some(120),
            annual_revenue: Some(20_000_000.0),
            ..Default::default()
        };
        let cohort = library.resolve(&profile).unwrap();
        assert_eq!(cohort.industry, "technology");
    }

    #[test]
    fn test_resolve_falls_back_to_default_cohort() {
        let library = BenchmarkLibrary::standard();
        let profile = CompanyProfile {
            industry: Some("underwater basket weaving".to_string()),
            ..Default::default()
        };
        let cohort = library.resolve(&profile).unwrap();
        assert_eq!(cohort.industry, "general");
        // Conservative floors put the unknown company in the broadest cohort
        assert_eq!(cohort.min_employees, 0);
    }

    #[test]
    fn test_resolve_picks_most_specific_size_cohort() {
        let library = BenchmarkLibrary::standard();
        let profile = CompanyProfile {
            employee_count: Some(200),
            annual_revenue: Some(30_000_000.0),
            ..Default::default()
        };
        let cohort = library.resolve(&profile).unwrap();
        assert_eq!(cohort.min_employees, 50);
    }

    #[test]
    fn test_resolve_empty_library_degrades() {
        let library = BenchmarkLibrary::empty();
        assert!(library.resolve(&CompanyProfile::default()).is_none());
    }

    #[test]
    fn test_overall_benchmark_narrative_mentions_percentile() {
        let library = BenchmarkLibrary::standard();
        let cohort = library.resolve(&CompanyProfile::default()).unwrap();
        let benchmark = cohort.overall_benchmark(46.0);
        assert_eq!(benchmark.peer_percentile, 50.0);
        assert_eq!(benchmark.peer_comparison_band, ComparisonBand::AboveAverage);
        assert_eq!(benchmark.confidence_level, ConfidenceLevel::High);
        assert!(benchmark.benchmark_narrative.contains("50th percentile"));
        assert!(benchmark.benchmark_narrative.contains("1240"));
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(1.0), "1st");
        assert_eq!(ordinal(2.0), "2nd");
        assert_eq!(ordinal(3.0), "3rd");
        assert_eq!(ordinal(11.0), "11th");
        assert_eq!(ordinal(12.0), "12th");
        assert_eq!(ordinal(13.0), "13th");
        assert_eq!(ordinal(21.0), "21st");
        assert_eq!(ordinal(58.0), "58th");
    }
}
