//! Score aggregation
//!
//! Bottom-up aggregation through the fixed hierarchy: weighted means at
//! the sub-indicator level, then unweighted arithmetic means upward.
//! The unweighted dimension/chapter means are a deliberate policy, not
//! an oversight: they keep the rollup simple and auditable at the cost
//! of not reflecting differing sub-indicator importance at the upper
//! levels. Downstream consumers depend on this exact behavior.

use idm_core::score::{round1, ScoreBand};
use idm_core::types::{Chapter, Dimension, Question, SubIndicator};
use idm_core::{ChapterCode, Taxonomy};

/// Score all 12 dimensions from the canonical question list.
///
/// Every taxonomy dimension is emitted even when no question answers
/// into it; unanswered units score 0.
pub fn score_dimensions(questions: &[Question], taxonomy: &Taxonomy) -> Vec<Dimension> {
    taxonomy
        .dimensions()
        .iter()
        .map(|meta| {
            let sub_indicators: Vec<SubIndicator> = taxonomy
                .sub_indicators_for(meta.code)
                .iter()
                .map(|def| score_sub_indicator(&def.id, &def.name, meta.code, questions, taxonomy))
                .collect();

            let score = round1(unweighted_mean(
                sub_indicators.iter().map(|s| s.score),
            ));

            Dimension {
                dimension_code: meta.code,
                chapter_code: meta.chapter,
                name: meta.name.clone(),
                description: meta.description.clone(),
                score_overall: score,
                score_band: ScoreBand::for_score(score),
                sub_indicators,
                benchmark: None,
            }
        })
        .collect()
}

/// Roll dimension scores up into the 4 chapters
pub fn score_chapters(dimensions: &[Dimension]) -> Vec<Chapter> {
    ChapterCode::ALL
        .iter()
        .map(|&chapter| {
            let score = round1(unweighted_mean(
                dimensions
                    .iter()
                    .filter(|d| d.chapter_code == chapter)
                    .map(|d| d.score_overall),
            ));
            Chapter {
                chapter_code: chapter,
                name: chapter.name().to_string(),
                score_overall: score,
                score_band: ScoreBand::for_score(score),
                benchmark: None,
            }
        })
        .collect()
}

fn score_sub_indicator(
    sub_id: &str,
    name: &str,
    dimension: idm_core::DimensionCode,
    questions: &[Question],
    taxonomy: &Taxonomy,
) -> SubIndicator {
    let contributing: Vec<&Question> = questions
        .iter()
        .filter(|q| q.sub_indicator_id == sub_id)
        .collect();

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for q in &contributing {
        if let Some(score) = q.normalized_score {
            let weight = taxonomy.weight(&q.question_id);
            weighted_sum += score * weight;
            weight_total += weight;
        }
    }

    let score = if weight_total > 0.0 {
        round1(weighted_sum / weight_total)
    } else {
        0.0
    };

    SubIndicator {
        id: sub_id.to_string(),
        dimension_code: dimension,
        name: name.to_string(),
        score,
        score_band: ScoreBand::for_score(score),
        contributing_question_ids: contributing
            .iter()
            .map(|q| q.question_id.clone())
            .collect(),
    }
}

fn unweighted_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idm_core::DimensionCode;
    use serde_json::json;

    fn question(id: &str, dim: DimensionCode, sub: &str, score: Option<f64>) -> Question {
        Question {
            question_id: id.to_string(),
            dimension_code: dim,
            sub_indicator_id: sub.to_string(),
            raw_response: json!(null),
            normalized_score: score,
        }
    }

    #[test]
    fn test_all_dimensions_present_without_input() {
        let taxonomy = Taxonomy::standard();
        let dimensions = score_dimensions(&[], &taxonomy);
        assert_eq!(dimensions.len(), 12);
        for dim in &dimensions {
            assert_eq!(dim.score_overall, 0.0);
            assert_eq!(dim.score_band, ScoreBand::Critical);
            assert!(!dim.sub_indicators.is_empty());
        }

        let chapters = score_chapters(&dimensions);
        assert_eq!(chapters.len(), 4);
        assert!(chapters.iter().all(|c| c.score_overall == 0.0));
    }

    #[test]
    fn test_weighted_sub_indicator_mean() {
        let taxonomy = Taxonomy::standard();
        // sales_q1 carries weight 0.5, sales_q2 weight 1.0, both in SAL_001
        let questions = vec![
            question("sales_q1", DimensionCode::SAL, "SAL_001", Some(100.0)),
            question("sales_q2", DimensionCode::SAL, "SAL_001", Some(40.0)),
        ];
        let dimensions = score_dimensions(&questions, &taxonomy);
        let sal = dimensions
            .iter()
            .find(|d| d.dimension_code == DimensionCode::SAL)
            .unwrap();
        let sub = sal.sub_indicators.iter().find(|s| s.id == "SAL_001").unwrap();
        // (100*0.5 + 40*1.0) / 1.5 = 60
        assert_eq!(sub.score, 60.0);
        assert_eq!(sub.contributing_question_ids.len(), 2);
    }

    #[test]
    fn test_unscored_questions_counted_as_contributing_but_not_scored() {
        let taxonomy = Taxonomy::standard();
        let questions = vec![
            question("strategy_q1", DimensionCode::STR, "STR_001", Some(80.0)),
            question("strategy_q2", DimensionCode::STR, "STR_002", None),
        ];
        let dimensions = score_dimensions(&questions, &taxonomy);
        let str_dim = dimensions
            .iter()
            .find(|d| d.dimension_code == DimensionCode::STR)
            .unwrap();

        let sub1 = str_dim.sub_indicators.iter().find(|s| s.id == "STR_001").unwrap();
        assert_eq!(sub1.score, 80.0);

        let sub2 = str_dim.sub_indicators.iter().find(|s| s.id == "STR_002").unwrap();
        assert_eq!(sub2.score, 0.0);
        assert_eq!(sub2.contributing_question_ids, vec!["strategy_q2".to_string()]);
    }

    #[test]
    fn test_dimension_is_unweighted_mean_of_sub_indicators() {
        // Reduced taxonomy: one dimension, two sub-indicators at 80 and 40
        use idm_core::taxonomy::{DimensionMeta, QuestionMapping, SubIndicatorDef};
        let taxonomy = Taxonomy::new(
            vec![DimensionMeta {
                code: DimensionCode::STR,
                chapter: ChapterCode::GE,
                name: "Strategy".to_string(),
                description: "".to_string(),
            }],
            vec![
                SubIndicatorDef {
                    id: "STR_001".to_string(),
                    dimension: DimensionCode::STR,
                    name: "A".to_string(),
                },
                SubIndicatorDef {
                    id: "STR_002".to_string(),
                    dimension: DimensionCode::STR,
                    name: "B".to_string(),
                },
            ],
            vec![
                QuestionMapping {
                    question_id: "q1".to_string(),
                    dimension: DimensionCode::STR,
                    sub_indicator_id: "STR_001".to_string(),
                    weight: 1.0,
                },
                QuestionMapping {
                    question_id: "q2".to_string(),
                    dimension: DimensionCode::STR,
                    sub_indicator_id: "STR_002".to_string(),
                    weight: 1.0,
                },
            ],
        )
        .unwrap();

        let questions = vec![
            question("q1", DimensionCode::STR, "STR_001", Some(80.0)),
            question("q2", DimensionCode::STR, "STR_002", Some(40.0)),
        ];
        let dimensions = score_dimensions(&questions, &taxonomy);
        assert_eq!(dimensions.len(), 1);
        assert_eq!(dimensions[0].score_overall, 60.0);
        assert_eq!(dimensions[0].score_band, ScoreBand::Proficiency);
    }

    #[test]
    fn test_chapter_mean_rounding() {
        let taxonomy = Taxonomy::standard();
        let mut dimensions = score_dimensions(&[], &taxonomy);
        // GE owns STR, SAL, MKT, CXP; set three of them
        for dim in dimensions.iter_mut() {
            dim.score_overall = match dim.dimension_code {
                DimensionCode::STR => 70.0,
                DimensionCode::SAL => 80.0,
                DimensionCode::MKT => 75.0,
                DimensionCode::CXP => 71.0,
                _ => dim.score_overall,
            };
        }
        let chapters = score_chapters(&dimensions);
        let ge = chapters.iter().find(|c| c.chapter_code == ChapterCode::GE).unwrap();
        assert_eq!(ge.score_overall, 74.0);
        assert_eq!(ge.score_band, ScoreBand::Proficiency);
    }
}
