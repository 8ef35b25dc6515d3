//! Record types composing the Insights Data Model (IDM)
//!
//! The IDM is assembled once per assessment run and is immutable
//! afterwards; a new run produces a new model with a fresh
//! `meta.assessment_run_id`. Serialization matches the published IDM
//! schema (v1), so field names and enum spellings here are wire format,
//! not just internal naming.

use crate::score::{ComparisonBand, ScoreBand, Trajectory};
use crate::types::codes::{ChapterCode, DimensionCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Finding classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingType {
    Strength,
    Gap,
    Risk,
    Opportunity,
}

/// Time horizon for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "90_days")]
    NinetyDays,
    #[serde(rename = "12_months")]
    TwelveMonths,
    #[serde(rename = "24_months_plus")]
    TwentyFourMonthsPlus,
}

/// Severity scale shared by findings and risks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Confidence in a derived record or benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Likelihood scale for risks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

/// Run metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Unique identifier for this assessment run
    pub assessment_run_id: String,

    /// Identifier of the assessed company profile
    pub company_profile_id: String,

    /// RFC 3339 UTC timestamp of model assembly
    pub created_at: String,

    pub methodology_version: String,
    pub scoring_version: String,
    pub idm_schema_version: String,

    /// Aggregate structure of the upstream analysis phases that fed
    /// this run (counts only; the analysis text itself is opaque here)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase_coverage: Vec<PhaseCoverage>,
}

/// Per-phase analysis coverage recorded in `Meta`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCoverage {
    pub phase: String,
    pub total_analyses: u32,
    pub completed_analyses: u32,
}

/// Peer benchmark attached to a chapter or dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Percentile rank within the peer cohort, always within [1, 99]
    pub peer_percentile: f64,

    pub peer_comparison_band: ComparisonBand,

    /// Short human-readable description of the standing
    pub band_description: String,
}

/// Benchmark for the overall health score, with cohort provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallBenchmark {
    pub peer_percentile: f64,
    pub peer_comparison_band: ComparisonBand,

    /// Number of peer companies behind the distribution
    pub peer_group_size: u32,

    /// Derived from peer group size: >= 500 high, >= 50 medium, else low
    pub confidence_level: ConfidenceLevel,

    pub benchmark_narrative: String,
}

/// Top-level assessment chapter (exactly 4 per model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_code: ChapterCode,
    pub name: String,
    pub score_overall: f64,
    pub score_band: ScoreBand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Benchmark>,
}

/// Lowest-level scored unit, fed by one or more questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubIndicator {
    pub id: String,
    pub dimension_code: DimensionCode,
    pub name: String,
    pub score: f64,
    pub score_band: ScoreBand,
    pub contributing_question_ids: Vec<String>,
}

/// Mid-level scored category (exactly 12 per model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub dimension_code: DimensionCode,
    pub chapter_code: ChapterCode,
    pub name: String,
    pub description: String,
    pub score_overall: f64,
    pub score_band: ScoreBand,
    pub sub_indicators: Vec<SubIndicator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Benchmark>,
}

/// A single ingested questionnaire response in canonical form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub dimension_code: DimensionCode,
    pub sub_indicator_id: String,

    /// The response exactly as received, kept for auditability
    pub raw_response: Value,

    /// 0-100 score, absent when the response could not be normalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_score: Option<f64>,
}

/// Evidence backing a finding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<String>>,
}

/// Threshold-derived insight scoped to a dimension or sub-indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub dimension_code: DimensionCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_indicator_id: Option<String>,
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    pub severity: Severity,
    pub confidence_level: ConfidenceLevel,
    pub short_label: String,
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_refs: Option<EvidenceRefs>,
}

/// Prioritized, time-horizoned action record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub dimension_code: DimensionCode,
    pub linked_finding_ids: Vec<String>,
    pub theme: String,

    /// Dense 1-indexed rank assigned by ascending dimension score
    pub priority_rank: u32,

    pub impact_score: f64,
    pub effort_score: f64,
    pub horizon: Horizon,
    pub required_capabilities: Vec<String>,
    pub action_steps: Vec<String>,
    pub expected_outcomes: String,
}

/// Pointer into `recommendations`, never a copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickWin {
    pub recommendation_id: String,
}

/// Compiled risk record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub id: String,
    pub dimension_code: DimensionCode,
    pub severity: Severity,
    pub likelihood: Likelihood,
    pub narrative: String,
    pub category: String,
    pub mitigation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_recommendation_ids: Vec<String>,
}

/// Named time-phase of the implementation roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub id: String,
    pub name: String,
    pub time_horizon: String,
    pub linked_recommendation_ids: Vec<String>,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub phases: Vec<RoadmapPhase>,
}

/// Overall scores rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoresSummary {
    pub overall_health_score: f64,
    pub descriptor: String,
    pub trajectory: Trajectory,

    /// Top-3 improvement imperatives from the lowest-scoring dimensions
    pub key_imperatives: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_benchmark: Option<OverallBenchmark>,
}

/// Chart-ready projections of the scored model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visualizations {
    pub dimension_radar: Vec<RadarPoint>,
    pub chapter_bars: Vec<ChapterBar>,
    pub impact_effort_matrix: Vec<ImpactEffortPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub dimension_code: DimensionCode,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterBar {
    pub chapter_code: ChapterCode,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactEffortPoint {
    pub recommendation_id: String,
    pub impact_score: f64,
    pub effort_score: f64,
    pub quick_win: bool,
}

/// The complete Insights Data Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idm {
    pub meta: Meta,
    pub chapters: Vec<Chapter>,
    pub dimensions: Vec<Dimension>,
    pub questions: Vec<Question>,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    pub quick_wins: Vec<QuickWin>,
    pub risks: Vec<Risk>,
    pub roadmap: Roadmap,
    pub scores_summary: ScoresSummary,
    pub visualizations: Visualizations,
}
