//! Type definitions for the Insights Data Model

pub mod codes;
pub mod model;

pub use codes::{ChapterCode, DimensionCode};
pub use model::{
    Benchmark, Chapter, ChapterBar, ConfidenceLevel, Dimension, EvidenceRefs, Finding,
    FindingType, Horizon, Idm, ImpactEffortPoint, Likelihood, Meta, OverallBenchmark,
    PhaseCoverage, Question, QuickWin, RadarPoint, Recommendation, Risk, Roadmap, RoadmapPhase,
    ScoresSummary, Severity, SubIndicator, Visualizations,
};
