//! Model assembly
//!
//! Drives the whole pipeline over one input bundle and composes the
//! immutable `Idm`: canonicalize responses, aggregate scores, attach
//! benchmarks, derive findings/recommendations/quick wins/risks, build
//! the roadmap and summary, then stamp run metadata. Phase bundles are
//! read only for their aggregate structure; analysis text is never
//! parsed here.

use crate::aggregate::{score_chapters, score_dimensions};
use crate::benchmark::BenchmarkLibrary;
use crate::findings::extract_findings;
use crate::input::AssessmentInput;
use crate::recommend::{generate_recommendations, select_quick_wins};
use crate::risks::compile_risks;
use crate::roadmap::build_roadmap;
use crate::summary::build_scores_summary;
use chrono::Utc;
use idm_core::types::{ChapterBar, Idm, ImpactEffortPoint, Meta, RadarPoint, Visualizations};
use idm_core::Taxonomy;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const METHODOLOGY_VERSION: &str = "2.0.0";
pub const SCORING_VERSION: &str = "1.1.0";
pub const IDM_SCHEMA_VERSION: &str = "1.0.0";

/// Per-run knobs that do not belong in the engine configuration
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Overall health score from a previous run, for trajectory
    pub previous_overall_score: Option<f64>,
}

/// Composes a complete `Idm` from one assessment input bundle
pub struct Assembler<'a> {
    taxonomy: &'a Taxonomy,
    benchmarks: &'a BenchmarkLibrary,
    options: AssembleOptions,
}

impl<'a> Assembler<'a> {
    pub fn new(taxonomy: &'a Taxonomy, benchmarks: &'a BenchmarkLibrary) -> Self {
        Self {
            taxonomy,
            benchmarks,
            options: AssembleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the pipeline end to end
    pub fn assemble(&self, input: &AssessmentInput) -> Idm {
        let questions = input.responses.canonicalize(self.taxonomy);
        tracing::debug!(count = questions.len(), "canonicalized questions");

        let dimensions = score_dimensions(&questions, self.taxonomy);
        let mut chapters = score_chapters(&dimensions);

        let cohort = self.benchmarks.resolve(&input.profile);
        if let Some(cohort) = cohort {
            for chapter in chapters.iter_mut() {
                chapter.benchmark =
                    Some(cohort.chapter_benchmark(chapter.chapter_code, chapter.score_overall));
            }
        }

        let findings = extract_findings(&dimensions);
        let recommendations = generate_recommendations(&dimensions, &findings);
        let quick_wins = select_quick_wins(&recommendations);
        let risks = compile_risks(&dimensions, &findings, &recommendations, self.taxonomy);
        let roadmap = build_roadmap(&recommendations);

        let overall = if chapters.is_empty() {
            0.0
        } else {
            chapters.iter().map(|c| c.score_overall).sum::<f64>() / chapters.len() as f64
        };
        let overall_benchmark = cohort.map(|c| c.overall_benchmark(idm_core::round1(overall)));

        let scores_summary = build_scores_summary(
            &chapters,
            &dimensions,
            self.options.previous_overall_score,
            overall_benchmark,
        );

        let visualizations = Visualizations {
            dimension_radar: dimensions
                .iter()
                .map(|d| RadarPoint {
                    dimension_code: d.dimension_code,
                    name: d.name.clone(),
                    score: d.score_overall,
                })
                .collect(),
            chapter_bars: chapters
                .iter()
                .map(|c| ChapterBar {
                    chapter_code: c.chapter_code,
                    name: c.name.clone(),
                    score: c.score_overall,
                })
                .collect(),
            impact_effort_matrix: recommendations
                .iter()
                .map(|r| ImpactEffortPoint {
                    recommendation_id: r.id.clone(),
                    impact_score: r.impact_score,
                    effort_score: r.effort_score,
                    quick_win: quick_wins.iter().any(|qw| qw.recommendation_id == r.id),
                })
                .collect(),
        };

        let meta = Meta {
            assessment_run_id: generate_run_id(),
            company_profile_id: input
                .profile
                .company_profile_id
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            created_at: Utc::now().to_rfc3339(),
            methodology_version: METHODOLOGY_VERSION.to_string(),
            scoring_version: SCORING_VERSION.to_string(),
            idm_schema_version: IDM_SCHEMA_VERSION.to_string(),
            phase_coverage: input.phases.coverage(),
        };

        tracing::info!(
            run_id = %meta.assessment_run_id,
            overall = scores_summary.overall_health_score,
            "assembled insights data model"
        );

        Idm {
            meta,
            chapters,
            dimensions,
            questions,
            findings,
            recommendations,
            quick_wins,
            risks,
            roadmap,
            scores_summary,
            visualizations,
        }
    }
}

/// Generate a unique run identifier.
///
/// Format: run_YYYYMMDDHHmmss_xxxxxx
/// Example: run_20260115143052_a3f2e1
fn generate_run_id() -> String {
    let now = Utc::now();
    let datetime_str = now.format("%Y%m%d%H%M%S");
    let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);
    format!("run_{}_{:06x}", datetime_str, random)
}

/// Compact per-run record-count digest for orchestrator logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub assessment_run_id: String,
    pub overall_health_score: f64,
    pub question_count: usize,
    pub finding_count: usize,
    pub recommendation_count: usize,
    pub quick_win_count: usize,
    pub risk_count: usize,
    pub roadmap_phase_count: usize,
}

impl RunSummary {
    pub fn for_model(idm: &Idm) -> Self {
        Self {
            assessment_run_id: idm.meta.assessment_run_id.clone(),
            overall_health_score: idm.scores_summary.overall_health_score,
            question_count: idm.questions.len(),
            finding_count: idm.findings.len(),
            recommendation_count: idm.recommendations.len(),
            quick_win_count: idm.quick_wins.len(),
            risk_count: idm.risks.len(),
            roadmap_phase_count: idm.roadmap.phases.len(),
        }
    }
}
