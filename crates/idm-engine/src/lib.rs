//! IDM Engine - Insights consolidation and scoring pipeline
//!
//! A pure, synchronous transform from an input bundle (company profile,
//! questionnaire responses, analysis phase bundles) to a complete
//! Insights Data Model plus a structural validation report. The
//! pipeline is a single top-to-bottom pass:
//!
//! taxonomy -> aggregation -> benchmarks -> findings -> recommendations
//! -> quick wins / risks -> roadmap -> assembly -> validation
//!
//! No component in this crate performs I/O; file and network access
//! belong to the surrounding orchestrator.

pub mod aggregate;
pub mod assemble;
pub mod benchmark;
pub mod error;
pub mod findings;
pub mod input;
pub mod recommend;
pub mod risks;
pub mod roadmap;
pub mod summary;
pub mod validate;

pub use assemble::{AssembleOptions, Assembler, RunSummary};
pub use benchmark::{BenchmarkCohort, BenchmarkLibrary, Distribution};
pub use error::{EngineError, Result};
pub use input::{AnalysisPhases, AssessmentInput, CompanyProfile, ResponseDocument};
pub use validate::{validate, ValidationOutcome};
