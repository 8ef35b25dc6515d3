//! Scores summary rollup
//!
//! The overall health score is the unweighted mean of the four chapter
//! scores, rounded to 1 decimal. Key imperatives call out the three
//! lowest-scoring dimensions. Trajectory compares against an optional
//! previous overall score; a single run with no history is Flat.

use idm_core::score::{health_descriptor, round1, Trajectory};
use idm_core::types::{Chapter, Dimension, OverallBenchmark, ScoresSummary};

const IMPERATIVE_COUNT: usize = 3;

/// Build the scores summary from the rolled-up model pieces
pub fn build_scores_summary(
    chapters: &[Chapter],
    dimensions: &[Dimension],
    previous_overall: Option<f64>,
    overall_benchmark: Option<OverallBenchmark>,
) -> ScoresSummary {
    let overall = if chapters.is_empty() {
        0.0
    } else {
        round1(chapters.iter().map(|c| c.score_overall).sum::<f64>() / chapters.len() as f64)
    };

    let mut sorted: Vec<&Dimension> = dimensions.iter().collect();
    sorted.sort_by(|a, b| a.score_overall.total_cmp(&b.score_overall));

    let key_imperatives = sorted
        .iter()
        .take(IMPERATIVE_COUNT)
        .map(|d| format!("Improve {} (currently {}/100)", d.name, d.score_overall))
        .collect();

    ScoresSummary {
        overall_health_score: overall,
        descriptor: health_descriptor(overall).to_string(),
        trajectory: Trajectory::from_scores(overall, previous_overall),
        key_imperatives,
        overall_benchmark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idm_core::score::ScoreBand;
    use idm_core::{ChapterCode, DimensionCode};

    fn chapter(code: ChapterCode, score: f64) -> Chapter {
        Chapter {
            chapter_code: code,
            name: code.name().to_string(),
            score_overall: score,
            score_band: ScoreBand::for_score(score),
            benchmark: None,
        }
    }

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

    #[test]
    fn test_overall_is_chapter_mean() {
        let chapters = vec![
            chapter(ChapterCode::GE, 50.0),
            chapter(ChapterCode::PH, 60.0),
            chapter(ChapterCode::PL, 70.0),
            chapter(ChapterCode::RS, 55.0),
        ];
        let summary = build_scores_summary(&chapters, &[], None, None);
        assert_eq!(summary.overall_health_score, 58.8);
        assert_eq!(summary.descriptor, "Needs Improvement");
        assert_eq!(summary.trajectory, Trajectory::Flat);
    }

    #[test]
    fn test_descriptor_thresholds() {
        let cases = [
            (90.0, "Excellent Health"),
            (85.0, "Excellent Health"),
            (75.0, "Good Health"),
            (65.0, "Fair Health"),
            (50.0, "Needs Improvement"),
            (49.9, "Critical Condition"),
        ];
        for (score, expected) in cases {
            let chapters = vec![
                chapter(ChapterCode::GE, score),
                chapter(ChapterCode::PH, score),
                chapter(ChapterCode::PL, score),
                chapter(ChapterCode::RS, score),
            ];
            let summary = build_scores_summary(&chapters, &[], None, None);
            assert_eq!(summary.descriptor, expected, "score {}", score);
        }
    }

    #[test]
    fn test_key_imperatives_are_three_lowest_dimensions() {
        let dims = vec![
            dimension(DimensionCode::STR, 80.0),
            dimension(DimensionCode::SAL, 30.0),
            dimension(DimensionCode::MKT, 55.0),
            dimension(DimensionCode::CXP, 45.0),
        ];
        let summary = build_scores_summary(&[], &dims, None, None);
        assert_eq!(summary.key_imperatives.len(), 3);
        assert!(summary.key_imperatives[0].contains("SAL Dimension"));
        assert!(summary.key_imperatives[1].contains("CXP Dimension"));
        assert!(summary.key_imperatives[2].contains("MKT Dimension"));
    }

    #[test]
    fn test_trajectory_against_previous_score() {
        let chapters = vec![
            chapter(ChapterCode::GE, 60.0),
            chapter(ChapterCode::PH, 60.0),
            chapter(ChapterCode::PL, 60.0),
            chapter(ChapterCode::RS, 60.0),
        ];
        let improving = build_scores_summary(&chapters, &[], Some(50.0), None);
        assert_eq!(improving.trajectory, Trajectory::Improving);

        // Within the dead zone
        let flat = build_scores_summary(&chapters, &[], Some(57.0), None);
        assert_eq!(flat.trajectory, Trajectory::Flat);

        let declining = build_scores_summary(&chapters, &[], Some(70.0), None);
        assert_eq!(declining.trajectory, Trajectory::Declining);
    }
}
