//! High-level insights engine
//!
//! `InsightsEngine` wraps the whole pipeline behind one synchronous
//! call. It holds only immutable configuration, so a single instance
//! can be shared freely across threads and compiles are independent.

use crate::config::EngineConfig;
use crate::error::Result;
use idm_core::types::Idm;
use idm_engine::assemble::{AssembleOptions, Assembler, RunSummary};
use idm_engine::validate::validate;
use idm_engine::AssessmentInput;
use serde::{Deserialize, Serialize};

/// The result of compiling one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledAssessment {
    /// The assembled model, best-effort even when validation fails
    pub idm: Idm,

    pub validation_passed: bool,

    /// Structural violations as `path: message` strings; empty when
    /// validation passed or was disabled
    pub validation_errors: Vec<String>,

    /// Compact record-count digest for orchestrator logging
    pub summary: RunSummary,
}

/// Compiles assessment inputs into validated Insights Data Models
pub struct InsightsEngine {
    config: EngineConfig,
}

impl InsightsEngine {
    /// Create an engine from a configuration
    pub fn new(config: EngineConfig) -> Self {
        tracing::debug!(
            questions = config.taxonomy.question_count(),
            validation = config.enable_validation,
            "insights engine initialized"
        );
        Self { config }
    }

    /// Engine with the standard taxonomy and benchmark library
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compile one assessment input bundle into a complete model.
    ///
    /// Pure and synchronous; no I/O. Degraded inputs (unmapped
    /// questions, unresolved benchmark cohorts) reduce the model's
    /// content but never fail the compile.
    pub fn compile(&self, input: &AssessmentInput) -> Result<CompiledAssessment> {
        let assembler = Assembler::new(&self.config.taxonomy, &self.config.benchmarks)
            .with_options(AssembleOptions {
                previous_overall_score: self.config.previous_overall_score,
            });
        let idm = assembler.assemble(input);

        let (idm, validation_errors) = if self.config.enable_validation {
            validate(idm).into_model()
        } else {
            (idm, Vec::new())
        };

        let summary = RunSummary::for_model(&idm);
        tracing::info!(
            run_id = %summary.assessment_run_id,
            overall = summary.overall_health_score,
            valid = validation_errors.is_empty(),
            "assessment compiled"
        );

        Ok(CompiledAssessment {
            validation_passed: validation_errors.is_empty(),
            validation_errors,
            summary,
            idm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idm_engine::input::{AnalysisPhases, CompanyProfile, ResponseDocument};
    use serde_json::json;

    fn sample_input() -> AssessmentInput {
        AssessmentInput::new(
            CompanyProfile {
                company_profile_id: Some("cp-1".to_string()),
                industry: Some("manufacturing".to_string()),
                employee_count: Some(80),
                annual_revenue: Some(12_000_000.0),
            },
            ResponseDocument::from_value(&json!({
                "strategy": {"strategy_q1": 4},
                "operations": {"operations_q1": 3}
            }))
            .unwrap(),
            AnalysisPhases::default(),
        )
    }

    #[test]
    fn test_compile_with_defaults() {
        let engine = InsightsEngine::with_defaults();
        let compiled = engine.compile(&sample_input()).unwrap();
        assert!(compiled.validation_passed, "{:?}", compiled.validation_errors);
        assert_eq!(compiled.idm.chapters.len(), 4);
        assert_eq!(compiled.summary.question_count, 2);
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let engine = InsightsEngine::new(EngineConfig::new().enable_validation(false));
        let compiled = engine.compile(&sample_input()).unwrap();
        assert!(compiled.validation_passed);
        assert!(compiled.validation_errors.is_empty());
    }
}
