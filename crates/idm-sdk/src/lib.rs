//! IDM Insights Engine SDK
//!
//! High-level API for compiling business assessments into Insights
//! Data Models.

pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use config::EngineConfig;
pub use engine::{CompiledAssessment, InsightsEngine};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use idm_core::types::Idm;
pub use idm_core::Taxonomy;
pub use idm_engine::assemble::RunSummary;
pub use idm_engine::{AssessmentInput, BenchmarkLibrary};
