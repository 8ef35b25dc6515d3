//! Recommendation generation and quick-win selection
//!
//! Recommendations are generated from underperforming dimensions sorted
//! ascending by score (stable, so equal scores keep catalog order).
//! Excellence-tier dimensions are skipped, as are dimensions with no
//! linked gap or risk finding. Ranks are dense and 1-indexed over the
//! emitted set, never sparse.
//!
//! Quick wins are a filtered view over the recommendations: high
//! impact, low effort, 90-day horizon; when that yields fewer than 3,
//! the list is backfilled by impact/effort ratio up to 5.

use idm_core::types::{Dimension, Finding, FindingType, Horizon, QuickWin, Recommendation};

const EXCELLENCE_CUTOFF: f64 = 80.0;

/// Coarse two-level effort heuristic
const EFFORT_HIGH: f64 = 70.0;
const EFFORT_MODERATE: f64 = 50.0;

const QUICK_WIN_MAX: usize = 5;
const QUICK_WIN_MIN: usize = 3;

/// Generate prioritized recommendations for underperforming dimensions
pub fn generate_recommendations(
    dimensions: &[Dimension],
    findings: &[Finding],
) -> Vec<Recommendation> {
    let mut sorted: Vec<&Dimension> = dimensions.iter().collect();
    sorted.sort_by(|a, b| a.score_overall.total_cmp(&b.score_overall));

    let mut recommendations = Vec::new();
    let mut rank = 1u32;

    for dim in sorted {
        if dim.score_overall >= EXCELLENCE_CUTOFF {
            continue;
        }

        let linked: Vec<String> = findings
            .iter()
            .filter(|f| {
                f.dimension_code == dim.dimension_code
                    && matches!(f.finding_type, FindingType::Gap | FindingType::Risk)
            })
            .map(|f| f.id.clone())
            .collect();
        if linked.is_empty() {
            continue;
        }

        let horizon = if dim.score_overall < 40.0 {
            Horizon::NinetyDays
        } else if dim.score_overall < 60.0 {
            Horizon::TwelveMonths
        } else {
            Horizon::TwentyFourMonthsPlus
        };

        let impact_score = 100.0 - dim.score_overall;
        let effort_score = if dim.score_overall < 40.0 {
            EFFORT_HIGH
        } else {
            EFFORT_MODERATE
        };

        recommendations.push(Recommendation {
            id: format!("rec-{}-{}", dim.dimension_code.as_str(), rank),
            dimension_code: dim.dimension_code,
            linked_finding_ids: linked,
            theme: format!("{} Improvement Initiative", dim.name),
            priority_rank: rank,
            impact_score,
            effort_score,
            horizon,
            required_capabilities: vec![dim.name.clone(), "Change Management".to_string()],
            action_steps: vec![
                format!("Conduct detailed {} assessment", dim.name.to_lowercase()),
                "Develop improvement plan with measurable KPIs".to_string(),
                "Implement quick wins within first 30 days".to_string(),
                "Monitor progress and adjust approach".to_string(),
                "Document and share best practices".to_string(),
            ],
            expected_outcomes: format!(
                "Improve {} score from {} to {} within the target horizon.",
                dim.name,
                dim.score_overall,
                (dim.score_overall + 20.0).min(100.0)
            ),
        });
        rank += 1;
    }

    tracing::debug!(count = recommendations.len(), "generated recommendations");
    recommendations
}

/// Select up to 5 quick wins from the recommendation list.
///
/// Primary criteria: impact >= 60, effort < 50, 90-day horizon. When
/// fewer than 3 qualify, the remainder of the list is ranked by
/// impact/effort ratio and backfilled up to 5. Empty only when there
/// are no recommendations at all.
pub fn select_quick_wins(recommendations: &[Recommendation]) -> Vec<QuickWin> {
    let mut quick_wins: Vec<QuickWin> = recommendations
        .iter()
        .filter(|r| {
            r.impact_score >= 60.0 && r.effort_score < 50.0 && r.horizon == Horizon::NinetyDays
        })
        .take(QUICK_WIN_MAX)
        .map(|r| QuickWin {
            recommendation_id: r.id.clone(),
        })
        .collect();

    if quick_wins.len() < QUICK_WIN_MIN {
        let mut by_ratio: Vec<&Recommendation> = recommendations.iter().collect();
        by_ratio.sort_by(|a, b| {
            let ratio = |r: &Recommendation| r.impact_score / r.effort_score.max(1.0);
            ratio(b).total_cmp(&ratio(a))
        });
        for rec in by_ratio {
            if quick_wins.len() >= QUICK_WIN_MAX {
                break;
            }
            if quick_wins.iter().any(|qw| qw.recommendation_id == rec.id) {
                continue;
            }
            quick_wins.push(QuickWin {
                recommendation_id: rec.id.clone(),
            });
        }
    }

    quick_wins
}

#[cfg(test)]
mod tests {
    use super::*;
    use idm_core::score::ScoreBand;
    use idm_core::{ChapterCode, DimensionCode};

    fn dimension(code: DimensionCode, score: f64) -> Dimension {
        Dimension {
            dimension_code: code,
            chapter_code: ChapterCode::GE,
            name: format!("{} Dimension", code.as_str()),
            description: String::new(),
            score_overall: score,
            score_band: ScoreBand::for_score(score),
            sub_indicators: vec![],
            benchmark: None,
        }
    }

    fn gap_finding(code: DimensionCode) -> Finding {
        use idm_core::types::{ConfidenceLevel, Severity};
        Finding {
            id: format!("finding-gap-{}", code.as_str()),
            dimension_code: code,
            sub_indicator_id: None,
            finding_type: FindingType::Gap,
            severity: Severity::Medium,
            confidence_level: ConfidenceLevel::High,
            short_label: String::new(),
            narrative: String::new(),
            evidence_refs: None,
        }
    }

    #[test]
    fn test_ranks_dense_ascending_by_score() {
        let dims = vec![
            dimension(DimensionCode::STR, 55.0),
            dimension(DimensionCode::SAL, 85.0),
            dimension(DimensionCode::MKT, 30.0),
        ];
        let findings = vec![
            gap_finding(DimensionCode::STR),
            gap_finding(DimensionCode::MKT),
        ];
        let recs = generate_recommendations(&dims, &findings);
        // Excellence tier skipped, lowest score ranks first
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, "rec-MKT-1");
        assert_eq!(recs[0].priority_rank, 1);
        assert_eq!(recs[1].id, "rec-STR-2");
        assert_eq!(recs[1].priority_rank, 2);
    }

    #[test]
    fn test_dimensions_without_findings_skipped_and_ranks_stay_dense() {
        let dims = vec![
            dimension(DimensionCode::STR, 30.0),
            dimension(DimensionCode::SAL, 45.0),
            dimension(DimensionCode::MKT, 55.0),
        ];
        // SAL has no linked finding
        let findings = vec![
            gap_finding(DimensionCode::STR),
            gap_finding(DimensionCode::MKT),
        ];
        let recs = generate_recommendations(&dims, &findings);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].priority_rank, 2);
    }

    #[test]
    fn test_horizon_impact_effort_heuristics() {
        let dims = vec![
            dimension(DimensionCode::STR, 30.0),
            dimension(DimensionCode::SAL, 50.0),
            dimension(DimensionCode::MKT, 70.0),
        ];
        let findings = vec![
            gap_finding(DimensionCode::STR),
            gap_finding(DimensionCode::SAL),
            gap_finding(DimensionCode::MKT),
        ];
        let recs = generate_recommendations(&dims, &findings);

        assert_eq!(recs[0].horizon, Horizon::NinetyDays);
        assert_eq!(recs[0].impact_score, 70.0);
        assert_eq!(recs[0].effort_score, 70.0);

        assert_eq!(recs[1].horizon, Horizon::TwelveMonths);
        assert_eq!(recs[1].effort_score, 50.0);

        assert_eq!(recs[2].horizon, Horizon::TwentyFourMonthsPlus);
        assert_eq!(recs[2].impact_score, 30.0);
    }

    #[test]
    fn test_expected_outcomes_caps_at_100() {
        let dims = vec![dimension(DimensionCode::STR, 75.0)];
        let findings = vec![gap_finding(DimensionCode::STR)];
        let recs = generate_recommendations(&dims, &findings);
        assert!(recs[0].expected_outcomes.contains("from 75 to 95"));

        let dims = vec![dimension(DimensionCode::SAL, 79.0)];
        let findings = vec![gap_finding(DimensionCode::SAL)];
        let recs = generate_recommendations(&dims, &findings);
        assert!(recs[0].expected_outcomes.contains("to 99"));
    }

    #[test]
    fn test_quick_wins_primary_criteria() {
        let dims = vec![
            dimension(DimensionCode::STR, 30.0),
            dimension(DimensionCode::SAL, 35.0),
        ];
        let findings = vec![
            gap_finding(DimensionCode::STR),
            gap_finding(DimensionCode::SAL),
        ];
        let recs = generate_recommendations(&dims, &findings);
        // Both have effort 70, failing the primary filter; backfill kicks in
        let wins = select_quick_wins(&recs);
        assert_eq!(wins.len(), 2);
    }

    #[test]
    fn test_quick_wins_never_exceed_five() {
        let codes = [
            DimensionCode::STR,
            DimensionCode::SAL,
            DimensionCode::MKT,
            DimensionCode::CXP,
            DimensionCode::OPS,
            DimensionCode::FIN,
            DimensionCode::HRS,
        ];
        let dims: Vec<Dimension> = codes.iter().map(|&c| dimension(c, 45.0)).collect();
        let findings: Vec<Finding> = codes.iter().map(|&c| gap_finding(c)).collect();
        let recs = generate_recommendations(&dims, &findings);
        assert_eq!(recs.len(), 7);
        let wins = select_quick_wins(&recs);
        assert_eq!(wins.len(), 5);
    }

    #[test]
    fn test_quick_wins_empty_only_without_recommendations() {
        assert!(select_quick_wins(&[]).is_empty());
    }

    #[test]
    fn test_quick_wins_are_subset_of_recommendations() {
        let dims = vec![
            dimension(DimensionCode::STR, 30.0),
            dimension(DimensionCode::SAL, 55.0),
        ];
        let findings = vec![
            gap_finding(DimensionCode::STR),
            gap_finding(DimensionCode::SAL),
        ];
        let recs = generate_recommendations(&dims, &findings);
        let wins = select_quick_wins(&recs);
        for win in &wins {
            assert!(recs.iter().any(|r| r.id == win.recommendation_id));
        }
    }
}
