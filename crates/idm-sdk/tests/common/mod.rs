//! Common test utilities for SDK integration tests

use idm_sdk::{AssessmentInput, CompiledAssessment, EngineConfig, InsightsEngine, Taxonomy};
use idm_engine::input::{AnalysisPhases, CompanyProfile, ResponseDocument};
use serde_json::{json, Value};

/// A profile that resolves into the broad default cohort
pub fn default_profile() -> CompanyProfile {
    CompanyProfile {
        company_profile_id: Some("cp-test".to_string()),
        industry: Some("general".to_string()),
        employee_count: Some(25),
        annual_revenue: Some(2_000_000.0),
    }
}

/// Flat responses answering every mapped question with the same value
pub fn uniform_responses(value: Value) -> Value {
    let taxonomy = Taxonomy::standard();
    let entries: serde_json::Map<String, Value> = taxonomy
        .question_ids()
        .into_iter()
        .map(|id| (id.to_string(), value.clone()))
        .collect();
    json!({ "assessment": entries })
}

/// Build an input bundle from a responses document
pub fn input_with(profile: CompanyProfile, responses: &Value) -> AssessmentInput {
    AssessmentInput::new(
        profile,
        ResponseDocument::from_value(responses).expect("responses fixture must parse"),
        AnalysisPhases::default(),
    )
}

/// Compile with the default engine configuration
pub fn compile(responses: &Value) -> CompiledAssessment {
    let engine = InsightsEngine::new(EngineConfig::default());
    engine
        .compile(&input_with(default_profile(), responses))
        .expect("compile must succeed")
}
