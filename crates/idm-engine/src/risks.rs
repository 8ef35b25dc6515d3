//! Risk compilation
//!
//! Two passes with id-based deduplication. Pass 1 promotes every
//! risk-type or critical-severity finding into a risk record, carrying
//! the finding's narrative and a per-dimension mitigation template.
//! Pass 2 adds a systemic risk for each dimension scoring below 40
//! whose pass-1 coverage does not trace back to that dimension's
//! `finding-risk-*` finding, so a low dimension is never left without a
//! risk but also never gets two for the same condition.

use idm_core::types::{Dimension, Finding, FindingType, Likelihood, Recommendation, Risk, Severity};
use idm_core::Taxonomy;

const SYSTEMIC_CUTOFF: f64 = 40.0;

/// Compile the deduplicated risk list
pub fn compile_risks(
    dimensions: &[Dimension],
    findings: &[Finding],
    recommendations: &[Recommendation],
    taxonomy: &Taxonomy,
) -> Vec<Risk> {
    let mut risks = Vec::new();

    for finding in findings {
        if finding.finding_type != FindingType::Risk && finding.severity != Severity::Critical {
            continue;
        }
        risks.push(Risk {
            id: format!("risk-{}", finding.id),
            dimension_code: finding.dimension_code,
            severity: finding.severity,
            likelihood: Likelihood::High,
            narrative: finding.narrative.clone(),
            category: dimension_name(dimensions, finding),
            mitigation: mitigation_for(taxonomy, finding.dimension_code, finding.severity),
            linked_recommendation_ids: linked_recommendations(recommendations, finding),
        });
    }

    for dim in dimensions {
        if dim.score_overall >= SYSTEMIC_CUTOFF {
            continue;
        }
        let covered_id = format!("risk-finding-risk-{}", dim.dimension_code.as_str());
        if risks.iter().any(|r| r.id == covered_id) {
            continue;
        }
        risks.push(Risk {
            id: format!("risk-systemic-{}", dim.dimension_code.as_str()),
            dimension_code: dim.dimension_code,
            severity: Severity::High,
            likelihood: Likelihood::Medium,
            narrative: format!(
                "Sustained underperformance in {} (score {}/100) exposes the \
                 business to compounding operational and competitive risk.",
                dim.name, dim.score_overall
            ),
            category: dim.name.clone(),
            mitigation: mitigation_for(taxonomy, dim.dimension_code, Severity::High),
            linked_recommendation_ids: recommendations
                .iter()
                .filter(|r| r.dimension_code == dim.dimension_code)
                .map(|r| r.id.clone())
                .collect(),
        });
    }

    tracing::debug!(count = risks.len(), "compiled risks");
    risks
}

fn dimension_name(dimensions: &[Dimension], finding: &Finding) -> String {
    dimensions
        .iter()
        .find(|d| d.dimension_code == finding.dimension_code)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| finding.dimension_code.as_str().to_string())
}

fn mitigation_for(
    taxonomy: &Taxonomy,
    code: idm_core::DimensionCode,
    severity: Severity,
) -> String {
    match taxonomy.mitigation(code) {
        Some(template) => {
            if severity == Severity::Critical {
                template.critical.clone()
            } else {
                template.standard.clone()
            }
        }
        None => "Establish a structured remediation plan with clear ownership.".to_string(),
    }
}

fn linked_recommendations(recommendations: &[Recommendation], finding: &Finding) -> Vec<String> {
    recommendations
        .iter()
        .filter(|r| r.dimension_code == finding.dimension_code)
        .map(|r| r.id.clone())
        .collect()
}
