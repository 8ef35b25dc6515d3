//! Structural validation of an assembled model
//!
//! Validation reports violations, it never throws them: the best-effort
//! model is always handed back, either as `Valid` or as `Invalid` with
//! a list of human-readable `path: message` strings. The checks cover
//! the structural contract only; they do not re-derive scores.

use idm_core::score::ScoreBand;
use idm_core::types::Idm;
use std::collections::HashSet;

const EXPECTED_CHAPTERS: usize = 4;
const EXPECTED_DIMENSIONS: usize = 12;
const QUICK_WIN_MAX: usize = 5;

/// Result of validating an assembled model
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(Idm),
    Invalid { idm: Idm, violations: Vec<String> },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// The model regardless of outcome
    pub fn into_model(self) -> (Idm, Vec<String>) {
        match self {
            ValidationOutcome::Valid(idm) => (idm, Vec::new()),
            ValidationOutcome::Invalid { idm, violations } => (idm, violations),
        }
    }
}

/// Validate the structural contract of an assembled model
pub fn validate(idm: Idm) -> ValidationOutcome {
    let mut violations = Vec::new();

    check_cardinality(&idm, &mut violations);
    check_scores_and_bands(&idm, &mut violations);
    check_unique_ids(&idm, &mut violations);
    check_references(&idm, &mut violations);
    check_quick_wins(&idm, &mut violations);
    check_benchmarks(&idm, &mut violations);
    check_ranks(&idm, &mut violations);

    if violations.is_empty() {
        ValidationOutcome::Valid(idm)
    } else {
        tracing::warn!(count = violations.len(), "model failed structural validation");
        ValidationOutcome::Invalid { idm, violations }
    }
}

fn check_cardinality(idm: &Idm, violations: &mut Vec<String>) {
    if idm.chapters.len() != EXPECTED_CHAPTERS {
        violations.push(format!(
            "chapters: expected {}, found {}",
            EXPECTED_CHAPTERS,
            idm.chapters.len()
        ));
    }
    if idm.dimensions.len() != EXPECTED_DIMENSIONS {
        violations.push(format!(
            "dimensions: expected {}, found {}",
            EXPECTED_DIMENSIONS,
            idm.dimensions.len()
        ));
    }
}

fn check_scores_and_bands(idm: &Idm, violations: &mut Vec<String>) {
    let mut check = |path: String, score: f64, band: ScoreBand| {
        if !(0.0..=100.0).contains(&score) {
            violations.push(format!("{}: score {} outside [0, 100]", path, score));
        } else if ScoreBand::for_score(score) != band {
            violations.push(format!(
                "{}: band {:?} inconsistent with score {}",
                path, band, score
            ));
        }
    };

    for chapter in &idm.chapters {
        check(
            format!("chapters.{}", chapter.chapter_code),
            chapter.score_overall,
            chapter.score_band,
        );
    }
    for dim in &idm.dimensions {
        check(
            format!("dimensions.{}", dim.dimension_code),
            dim.score_overall,
            dim.score_band,
        );
        for sub in &dim.sub_indicators {
            check(
                format!("dimensions.{}.sub_indicators.{}", dim.dimension_code, sub.id),
                sub.score,
                sub.score_band,
            );
        }
    }
}

fn check_unique_ids(idm: &Idm, violations: &mut Vec<String>) {
    let mut check = |path: &str, ids: Vec<&String>| {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                violations.push(format!("{}: duplicate id {}", path, id));
            }
        }
    };

    check("findings", idm.findings.iter().map(|f| &f.id).collect());
    check(
        "recommendations",
        idm.recommendations.iter().map(|r| &r.id).collect(),
    );
    check("risks", idm.risks.iter().map(|r| &r.id).collect());
}

fn check_references(idm: &Idm, violations: &mut Vec<String>) {
    let finding_ids: HashSet<&str> = idm.findings.iter().map(|f| f.id.as_str()).collect();
    let rec_ids: HashSet<&str> = idm.recommendations.iter().map(|r| r.id.as_str()).collect();

    for rec in &idm.recommendations {
        for fid in &rec.linked_finding_ids {
            if !finding_ids.contains(fid.as_str()) {
                violations.push(format!(
                    "recommendations.{}: unresolved finding id {}",
                    rec.id, fid
                ));
            }
        }
    }
    for risk in &idm.risks {
        for rid in &risk.linked_recommendation_ids {
            if !rec_ids.contains(rid.as_str()) {
                violations.push(format!(
                    "risks.{}: unresolved recommendation id {}",
                    risk.id, rid
                ));
            }
        }
    }
    for phase in &idm.roadmap.phases {
        for rid in &phase.linked_recommendation_ids {
            if !rec_ids.contains(rid.as_str()) {
                violations.push(format!(
                    "roadmap.{}: unresolved recommendation id {}",
                    phase.id, rid
                ));
            }
        }
    }
}

fn check_quick_wins(idm: &Idm, violations: &mut Vec<String>) {
    if idm.quick_wins.len() > QUICK_WIN_MAX {
        violations.push(format!(
            "quick_wins: {} entries exceed the maximum of {}",
            idm.quick_wins.len(),
            QUICK_WIN_MAX
        ));
    }
    let rec_ids: HashSet<&str> = idm.recommendations.iter().map(|r| r.id.as_str()).collect();
    for qw in &idm.quick_wins {
        if !rec_ids.contains(qw.recommendation_id.as_str()) {
            violations.push(format!(
                "quick_wins: {} is not a recommendation id",
                qw.recommendation_id
            ));
        }
    }
}

fn check_benchmarks(idm: &Idm, violations: &mut Vec<String>) {
    let mut check = |path: String, percentile: f64| {
        if !(1.0..=99.0).contains(&percentile) {
            violations.push(format!(
                "{}: peer_percentile {} outside [1, 99]",
                path, percentile
            ));
        }
    };

    for chapter in &idm.chapters {
        if let Some(b) = &chapter.benchmark {
            check(
                format!("chapters.{}.benchmark", chapter.chapter_code),
                b.peer_percentile,
            );
        }
    }
    for dim in &idm.dimensions {
        if let Some(b) = &dim.benchmark {
            check(
                format!("dimensions.{}.benchmark", dim.dimension_code),
                b.peer_percentile,
            );
        }
    }
    if let Some(b) = &idm.scores_summary.overall_benchmark {
        check("scores_summary.overall_benchmark".to_string(), b.peer_percentile);
    }
}

fn check_ranks(idm: &Idm, violations: &mut Vec<String>) {
    for rec in &idm.recommendations {
        if rec.priority_rank == 0 {
            violations.push(format!("recommendations.{}: priority_rank must be positive", rec.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::Assembler;
    use crate::benchmark::BenchmarkLibrary;
    use crate::input::{AnalysisPhases, AssessmentInput, CompanyProfile, ResponseDocument};
    use idm_core::types::QuickWin;
    use idm_core::Taxonomy;
    use serde_json::json;

    fn assembled() -> Idm {
        let taxonomy = Taxonomy::standard();
        let benchmarks = BenchmarkLibrary::standard();
        let input = AssessmentInput::new(
            CompanyProfile::default(),
            ResponseDocument::from_value(&json!({
                "strategy": {"strategy_q1": 4, "strategy_q2": 3},
                "sales": {"sales_q1": 2}
            }))
            .unwrap(),
            AnalysisPhases::default(),
        );
        Assembler::new(&taxonomy, &benchmarks).assemble(&input)
    }

    #[test]
    fn test_assembled_model_passes() {
        let outcome = validate(assembled());
        assert!(outcome.is_valid(), "{:?}", outcome.into_model().1);
    }

    #[test]
    fn test_inconsistent_band_reported() {
        let mut idm = assembled();
        idm.chapters[0].score_band = ScoreBand::Excellence;
        idm.chapters[0].score_overall = 10.0;
        let (_, violations) = validate(idm).into_model();
        assert!(violations.iter().any(|v| v.contains("inconsistent")));
    }

    #[test]
    fn test_out_of_range_score_reported() {
        let mut idm = assembled();
        idm.dimensions[0].score_overall = 120.0;
        let (_, violations) = validate(idm).into_model();
        assert!(violations.iter().any(|v| v.contains("outside [0, 100]")));
    }

    #[test]
    fn test_missing_dimension_reported() {
        let mut idm = assembled();
        idm.dimensions.pop();
        let (_, violations) = validate(idm).into_model();
        assert!(violations.iter().any(|v| v.starts_with("dimensions:")));
    }

    #[test]
    fn test_dangling_quick_win_reported() {
        let mut idm = assembled();
        idm.quick_wins = vec![QuickWin {
            recommendation_id: "rec-NOPE-99".to_string(),
        }];
        let (_, violations) = validate(idm).into_model();
        assert!(violations
            .iter()
            .any(|v| v.contains("rec-NOPE-99")));
    }

    #[test]
    fn test_duplicate_finding_id_reported() {
        let mut idm = assembled();
        let dup = idm.findings[0].clone();
        idm.findings.push(dup);
        let (_, violations) = validate(idm).into_model();
        assert!(violations.iter().any(|v| v.contains("duplicate id")));
    }

    #[test]
    fn test_unresolved_roadmap_reference_reported() {
        let mut idm = assembled();
        idm.roadmap.phases[0]
            .linked_recommendation_ids
            .push("rec-GHOST-1".to_string());
        let (_, violations) = validate(idm).into_model();
        assert!(violations.iter().any(|v| v.contains("rec-GHOST-1")));
    }

    #[test]
    fn test_invalid_still_returns_model() {
        let mut idm = assembled();
        idm.chapters.pop();
        let (returned, violations) = validate(idm).into_model();
        assert!(!violations.is_empty());
        assert_eq!(returned.dimensions.len(), 12);
    }
}
