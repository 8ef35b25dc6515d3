//! Input bundle types
//!
//! Everything the pipeline consumes arrives as already-parsed JSON
//! structures: a company profile, questionnaire responses in one of two
//! shapes, and the three upstream analysis-phase bundles.

pub mod phases;
pub mod profile;
pub mod responses;

pub use phases::{AnalysisEntry, AnalysisPhases, AnalysisStatus, PhaseBundle};
pub use profile::CompanyProfile;
pub use responses::{FlatResponses, NestedResponses, ResponseDocument};

/// The complete input to one assessment run
#[derive(Debug, Clone)]
pub struct AssessmentInput {
    pub profile: CompanyProfile,
    pub responses: ResponseDocument,
    pub phases: AnalysisPhases,
}

impl AssessmentInput {
    pub fn new(
        profile: CompanyProfile,
        responses: ResponseDocument,
        phases: AnalysisPhases,
    ) -> Self {
        Self {
            profile,
            responses,
            phases,
        }
    }

    /// Build an input bundle from already-parsed JSON values
    pub fn from_json(
        profile: &serde_json::Value,
        responses: &serde_json::Value,
        phases: &serde_json::Value,
    ) -> crate::error::Result<Self> {
        let profile: CompanyProfile = serde_json::from_value(profile.clone())
            .map_err(|e| crate::error::EngineError::InvalidInput(format!("profile: {}", e)))?;
        let responses = ResponseDocument::from_value(responses)?;
        let phases: AnalysisPhases = serde_json::from_value(phases.clone())
            .map_err(|e| crate::error::EngineError::InvalidInput(format!("phases: {}", e)))?;
        Ok(Self::new(profile, responses, phases))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_bundle() {
        let input = AssessmentInput::from_json(
            &json!({"company_profile_id": "cp-7", "industry": "technology"}),
            &json!({"strategy": {"strategy_q1": 4}}),
            &json!({"phase1": {"analyses": {"strategy_review": {"status": "complete"}}}}),
        )
        .unwrap();
        assert_eq!(input.profile.company_profile_id.as_deref(), Some("cp-7"));
        assert_eq!(input.phases.coverage().len(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed_responses() {
        let err = AssessmentInput::from_json(&json!({}), &json!("not an object"), &json!({}));
        assert!(err.is_err());
    }
}
