//! Threshold-driven finding extraction
//!
//! A pure function of already-scored dimensions. Dimension-level
//! thresholds: >= 80 emits a strength, [40, 60) a gap, < 40 a risk;
//! scores in [60, 80) are the healthy no-news zone and emit nothing.
//! Sub-indicators are scanned independently: >= 80 strength, < 40 gap,
//! scoped under the parent dimension.
//!
//! Ids are pure functions of type and source (`finding-gap-MKT`,
//! `finding-strength-STR_001`), so identical scores always reproduce
//! identical findings.

use idm_core::types::{
    ConfidenceLevel, Dimension, EvidenceRefs, Finding, FindingType, Severity, SubIndicator,
};

/// Extract all findings from the scored dimensions
pub fn extract_findings(dimensions: &[Dimension]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for dim in dimensions {
        if let Some(f) = dimension_finding(dim) {
            findings.push(f);
        }
        for sub in &dim.sub_indicators {
            if let Some(f) = sub_indicator_finding(dim, sub) {
                findings.push(f);
            }
        }
    }
    tracing::debug!(count = findings.len(), "extracted findings");
    findings
}

fn dimension_finding(dim: &Dimension) -> Option<Finding> {
    let code = dim.dimension_code.as_str();
    let evidence = EvidenceRefs {
        metrics: Some(vec![format!("{}_score", code)]),
        ..Default::default()
    };

    let finding = if dim.score_overall >= 80.0 {
        Finding {
            id: format!("finding-strength-{}", code),
            dimension_code: dim.dimension_code,
            sub_indicator_id: None,
            finding_type: FindingType::Strength,
            severity: Severity::Low,
            confidence_level: ConfidenceLevel::High,
            short_label: format!("{} Excellence", dim.name),
            narrative: format!(
                "{} demonstrates strong performance at {}/100, placing it in the \
                 Excellence tier. This represents a competitive advantage.",
                dim.name, dim.score_overall
            ),
            evidence_refs: Some(evidence),
        }
    } else if dim.score_overall >= 40.0 && dim.score_overall < 60.0 {
        Finding {
            id: format!("finding-gap-{}", code),
            dimension_code: dim.dimension_code,
            sub_indicator_id: None,
            finding_type: FindingType::Gap,
            severity: Severity::Medium,
            confidence_level: ConfidenceLevel::High,
            short_label: format!("{} Performance Gap", dim.name),
            narrative: format!(
                "{} shows moderate performance at {}/100. This gap presents \
                 improvement opportunities that should be addressed within 6-12 months.",
                dim.name, dim.score_overall
            ),
            evidence_refs: Some(evidence),
        }
    } else if dim.score_overall < 40.0 {
        Finding {
            id: format!("finding-risk-{}", code),
            dimension_code: dim.dimension_code,
            sub_indicator_id: None,
            finding_type: FindingType::Risk,
            severity: Severity::Critical,
            confidence_level: ConfidenceLevel::High,
            short_label: format!("{} Critical Underperformance", dim.name),
            narrative: format!(
                "{} is at critical levels with a score of {}/100. Immediate \
                 intervention is required to mitigate business risk.",
                dim.name, dim.score_overall
            ),
            evidence_refs: Some(evidence),
        }
    } else {
        return None;
    };

    Some(finding)
}

fn sub_indicator_finding(dim: &Dimension, sub: &SubIndicator) -> Option<Finding> {
    let evidence = EvidenceRefs {
        metrics: Some(vec![format!("{}_score", sub.id)]),
        question_ids: if sub.contributing_question_ids.is_empty() {
            None
        } else {
            Some(sub.contributing_question_ids.clone())
        },
        ..Default::default()
    };

    let finding = if sub.score >= 80.0 {
        Finding {
            id: format!("finding-strength-{}", sub.id),
            dimension_code: dim.dimension_code,
            sub_indicator_id: Some(sub.id.clone()),
            finding_type: FindingType::Strength,
            severity: Severity::Low,
            confidence_level: ConfidenceLevel::High,
            short_label: format!("{} Strength", sub.name),
            narrative: format!(
                "{} scores {}/100 within {}, a standout capability worth protecting.",
                sub.name, sub.score, dim.name
            ),
            evidence_refs: Some(evidence),
        }
    } else if sub.score < 40.0 {
        Finding {
            id: format!("finding-gap-{}", sub.id),
            dimension_code: dim.dimension_code,
            sub_indicator_id: Some(sub.id.clone()),
            finding_type: FindingType::Gap,
            severity: Severity::Medium,
            confidence_level: ConfidenceLevel::High,
            short_label: format!("{} Gap", sub.name),
            narrative: format!(
                "{} scores {}/100 within {}, dragging the dimension down and \
                 warranting focused remediation.",
                sub.name, sub.score, dim.name
            ),
            evidence_refs: Some(evidence),
        }
    } else {
        return None;
    };

    Some(finding)
}
