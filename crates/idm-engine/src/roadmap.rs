//! Roadmap assembly
//!
//! Recommendations are grouped by horizon into up to three named
//! phases; phases with no recommendations are omitted rather than
//! emitted empty. When no horizon phase materializes at all, a single
//! fallback phase keeps the roadmap non-empty so downstream renderers
//! always have something to show.

use idm_core::types::{Horizon, Recommendation, Roadmap, RoadmapPhase};

/// Build the implementation roadmap from the recommendation list
pub fn build_roadmap(recommendations: &[Recommendation]) -> Roadmap {
    let mut phases = Vec::new();

    let ids_for = |horizon: Horizon| -> Vec<String> {
        recommendations
            .iter()
            .filter(|r| r.horizon == horizon)
            .map(|r| r.id.clone())
            .collect()
    };

    let ninety = ids_for(Horizon::NinetyDays);
    if !ninety.is_empty() {
        phases.push(RoadmapPhase {
            id: "phase-1".to_string(),
            name: "Foundation & Quick Wins".to_string(),
            time_horizon: "0-90 days".to_string(),
            linked_recommendation_ids: ninety,
            narrative: "Focus on immediate value creation through quick wins and critical \
                        risk mitigation. Build momentum with visible early successes."
                .to_string(),
        });
    }

    let twelve = ids_for(Horizon::TwelveMonths);
    if !twelve.is_empty() {
        phases.push(RoadmapPhase {
            id: "phase-2".to_string(),
            name: "Core Capability Building".to_string(),
            time_horizon: "3-12 months".to_string(),
            linked_recommendation_ids: twelve,
            narrative: "Implement foundational improvements across key dimensions. \
                        Establish new processes and capabilities."
                .to_string(),
        });
    }

    let long_term = ids_for(Horizon::TwentyFourMonthsPlus);
    if !long_term.is_empty() {
        phases.push(RoadmapPhase {
            id: "phase-3".to_string(),
            name: "Strategic Transformation".to_string(),
            time_horizon: "12-24+ months".to_string(),
            linked_recommendation_ids: long_term,
            narrative: "Execute long-term strategic initiatives. Transform organizational \
                        capabilities for sustained competitive advantage."
                .to_string(),
        });
    }

    if phases.is_empty() {
        phases.push(RoadmapPhase {
            id: "phase-continuous".to_string(),
            name: "Continuous Improvement".to_string(),
            time_horizon: "Ongoing".to_string(),
            linked_recommendation_ids: recommendations
                .iter()
                .take(3)
                .map(|r| r.id.clone())
                .collect(),
            narrative: "Maintain focus on continuous improvement across all dimensions \
                        to sustain excellence."
                .to_string(),
        });
    }

    Roadmap { phases }
}
