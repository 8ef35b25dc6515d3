//! The fixed assessment taxonomy
//!
//! Pure lookup data consumed by the scoring engine: dimension metadata,
//! sub-indicator catalogs, question-to-sub-indicator weight mappings,
//! legacy dimension code aliases, and per-dimension risk mitigation
//! phrasing. The taxonomy is built once and injected into the engine
//! (never a global), so tests can substitute reduced or alternate
//! catalogs.

use crate::error::{CoreError, Result};
use crate::types::codes::{ChapterCode, DimensionCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Metadata for one of the 12 dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMeta {
    pub code: DimensionCode,
    pub chapter: ChapterCode,
    pub name: String,
    pub description: String,
}

/// Catalog entry for a sub-indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubIndicatorDef {
    pub id: String,
    pub dimension: DimensionCode,
    pub name: String,
}

/// Maps a question id to the sub-indicator it feeds, with the weight
/// used inside that sub-indicator's aggregation only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionMapping {
    pub question_id: String,
    pub dimension: DimensionCode,
    pub sub_indicator_id: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Mitigation phrasing used by the risk compiler, one entry per dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationTemplate {
    /// Phrasing for critical-severity risks
    pub critical: String,
    /// Phrasing for everything else
    pub standard: String,
}

/// The complete taxonomy: chapters, dimensions, sub-indicators and
/// question mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    dimensions: Vec<DimensionMeta>,
    sub_indicators: HashMap<DimensionCode, Vec<SubIndicatorDef>>,
    mappings: HashMap<String, QuestionMapping>,
    /// Legacy dimension code aliases accepted in nested response input
    code_aliases: HashMap<String, DimensionCode>,
    mitigations: HashMap<DimensionCode, MitigationTemplate>,
}

impl Taxonomy {
    /// Build a taxonomy from its parts, verifying internal consistency
    pub fn new(
        dimensions: Vec<DimensionMeta>,
        sub_indicators: Vec<SubIndicatorDef>,
        mappings: Vec<QuestionMapping>,
    ) -> Result<Self> {
        let mut by_dimension: HashMap<DimensionCode, Vec<SubIndicatorDef>> = HashMap::new();
        for def in sub_indicators {
            by_dimension.entry(def.dimension).or_default().push(def);
        }

        let mut mapping_index = HashMap::new();
        for mapping in mappings {
            if mapping.weight <= 0.0 {
                return Err(CoreError::InvalidTaxonomy(format!(
                    "question {} has non-positive weight {}",
                    mapping.question_id, mapping.weight
                )));
            }
            let known = by_dimension
                .get(&mapping.dimension)
                .map(|defs| defs.iter().any(|d| d.id == mapping.sub_indicator_id))
                .unwrap_or(false);
            if !known {
                return Err(CoreError::InvalidTaxonomy(format!(
                    "question {} maps to unknown sub-indicator {}",
                    mapping.question_id, mapping.sub_indicator_id
                )));
            }
            mapping_index.insert(mapping.question_id.clone(), mapping);
        }

        let mitigations = dimensions
            .iter()
            .map(|d| (d.code, MitigationTemplate::for_dimension(&d.name)))
            .collect();

        Ok(Self {
            dimensions,
            sub_indicators: by_dimension,
            mappings: mapping_index,
            code_aliases: standard_code_aliases(),
            mitigations,
        })
    }

    /// The standard 4-chapter / 12-dimension / 87-question taxonomy
    pub fn standard() -> Self {
        // The standard catalog is internally consistent by construction
        match Self::new(
            standard_dimensions(),
            standard_sub_indicators(),
            standard_mappings(),
        ) {
            Ok(taxonomy) => taxonomy,
            Err(e) => unreachable!("standard taxonomy is invalid: {}", e),
        }
    }

    /// All dimensions in canonical order
    pub fn dimensions(&self) -> &[DimensionMeta] {
        &self.dimensions
    }

    /// Metadata for a single dimension
    pub fn dimension(&self, code: DimensionCode) -> Option<&DimensionMeta> {
        self.dimensions.iter().find(|d| d.code == code)
    }

    /// Dimensions belonging to a chapter, in canonical order
    pub fn dimensions_for_chapter(&self, chapter: ChapterCode) -> Vec<&DimensionMeta> {
        self.dimensions.iter().filter(|d| d.chapter == chapter).collect()
    }

    /// Sub-indicator catalog for a dimension (empty when unknown)
    pub fn sub_indicators_for(&self, code: DimensionCode) -> &[SubIndicatorDef] {
        self.sub_indicators.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up the mapping for a question id
    pub fn mapping(&self, question_id: &str) -> Option<&QuestionMapping> {
        self.mappings.get(question_id)
    }

    /// Weight for a question, defaulting to 1.0 when unmapped
    pub fn weight(&self, question_id: &str) -> f64 {
        self.mappings.get(question_id).map(|m| m.weight).unwrap_or(1.0)
    }

    /// Resolve a dimension code string from input, accepting legacy
    /// aliases (e.g. `ITD` -> `IDS`)
    pub fn resolve_dimension_code(&self, raw: &str) -> Option<DimensionCode> {
        if let Some(code) = self.code_aliases.get(raw) {
            log::debug!("remapped legacy dimension code {} -> {}", raw, code);
            return Some(*code);
        }
        DimensionCode::from_str(raw).ok()
    }

    /// Mitigation phrasing for a dimension
    pub fn mitigation(&self, code: DimensionCode) -> Option<&MitigationTemplate> {
        self.mitigations.get(&code)
    }

    /// Total number of question mappings
    pub fn question_count(&self) -> usize {
        self.mappings.len()
    }

    /// All mapped question ids, sorted for deterministic iteration
    pub fn question_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.mappings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl MitigationTemplate {
    fn for_dimension(name: &str) -> Self {
        Self {
            critical: format!(
                "Launch an immediate {} remediation program with executive sponsorship, \
                 a dedicated owner, and weekly progress reviews until the score clears \
                 the critical threshold.",
                name
            ),
            standard: format!(
                "Strengthen {} practices through a structured improvement plan with \
                 clear ownership and quarterly checkpoints.",
                name
            ),
        }
    }
}

fn standard_code_aliases() -> HashMap<String, DimensionCode> {
    // Legacy codes still emitted by older questionnaire exports
    let mut aliases = HashMap::new();
    aliases.insert("ITD".to_string(), DimensionCode::IDS);
    aliases
}

fn standard_dimensions() -> Vec<DimensionMeta> {
    use ChapterCode::*;
    use DimensionCode::*;

    let dim = |code, chapter, name: &str, description: &str| DimensionMeta {
        code,
        chapter,
        name: name.to_string(),
        description: description.to_string(),
    };

    vec![
        dim(STR, GE, "Strategy", "Strategic planning, market positioning, and growth strategy"),
        dim(SAL, GE, "Sales", "Sales effectiveness, pipeline management, and revenue generation"),
        dim(MKT, GE, "Marketing", "Brand awareness, customer acquisition, and marketing ROI"),
        dim(CXP, GE, "Customer Experience", "Customer satisfaction, retention, and experience quality"),
        dim(OPS, PH, "Operations", "Operational efficiency, process optimization, and workflow management"),
        dim(FIN, PH, "Financials", "Financial health, profitability, and fiscal management"),
        dim(HRS, PL, "Human Resources", "Talent management, culture, and employee engagement"),
        dim(LDG, PL, "Leadership & Governance", "Leadership effectiveness, decision-making, and organizational governance"),
        dim(TIN, RS, "Technology & Innovation", "Technology adoption, innovation culture, and digital transformation"),
        dim(IDS, RS, "IT, Data & Systems", "IT infrastructure, data management, and cybersecurity"),
        dim(RMS, RS, "Risk Management & Sustainability", "Risk identification, mitigation, and business continuity"),
        dim(CMP, RS, "Compliance", "Regulatory compliance, policy adherence, and legal requirements"),
    ]
}

fn standard_sub_indicators() -> Vec<SubIndicatorDef> {
    use DimensionCode::*;

    let sub = |dimension, id: &str, name: &str| SubIndicatorDef {
        id: id.to_string(),
        dimension,
        name: name.to_string(),
    };

    vec![
        sub(STR, "STR_001", "Competitive Differentiation"),
        sub(STR, "STR_002", "Market Position"),
        sub(STR, "STR_003", "Growth Planning"),
        sub(STR, "STR_004", "Strategic Review Process"),
        sub(STR, "STR_005", "Exit/Growth Strategy"),
        sub(SAL, "SAL_001", "Sales Target Alignment"),
        sub(SAL, "SAL_002", "Pipeline Management"),
        sub(SAL, "SAL_003", "Sales Cycle Efficiency"),
        sub(SAL, "SAL_004", "Customer Retention"),
        sub(SAL, "SAL_005", "Upselling Effectiveness"),
        sub(MKT, "MKT_001", "Brand Awareness"),
        sub(MKT, "MKT_002", "Customer Targeting"),
        sub(MKT, "MKT_003", "Marketing Economics (CAC/LTV)"),
        sub(MKT, "MKT_004", "Marketing ROI"),
        sub(MKT, "MKT_005", "Channel Strategy"),
        sub(CXP, "CXP_001", "Customer Feedback Systems"),
        sub(CXP, "CXP_002", "Customer Satisfaction"),
        sub(CXP, "CXP_003", "Net Promoter Score"),
        sub(CXP, "CXP_004", "Issue Resolution"),
        sub(CXP, "CXP_005", "Response Time"),
        sub(OPS, "OPS_001", "Operational Efficiency"),
        sub(OPS, "OPS_002", "Process Documentation"),
        sub(OPS, "OPS_003", "Operational Reliability"),
        sub(OPS, "OPS_004", "Lean Practices"),
        sub(OPS, "OPS_005", "Resource Utilization"),
        sub(FIN, "FIN_001", "Financial Controls"),
        sub(FIN, "FIN_002", "Cash Management"),
        sub(FIN, "FIN_003", "Profitability"),
        sub(FIN, "FIN_004", "Financial Planning"),
        sub(FIN, "FIN_005", "Growth Readiness"),
        sub(HRS, "HRS_001", "HR Infrastructure"),
        sub(HRS, "HRS_002", "Company Culture"),
        sub(HRS, "HRS_003", "Talent Acquisition"),
        sub(HRS, "HRS_004", "Employee Development"),
        sub(HRS, "HRS_005", "Performance Management"),
        sub(LDG, "LDG_001", "Leadership Effectiveness"),
        sub(LDG, "LDG_002", "Decision-Making Structure"),
        sub(LDG, "LDG_003", "Board Oversight"),
        sub(LDG, "LDG_004", "Leadership Culture"),
        sub(LDG, "LDG_005", "Development & Mentorship"),
        sub(TIN, "TIN_001", "Technology Investment"),
        sub(TIN, "TIN_002", "Innovation Culture"),
        sub(TIN, "TIN_003", "Technology Adoption"),
        sub(TIN, "TIN_004", "Automation Utilization"),
        sub(TIN, "TIN_005", "Innovation Impact"),
        sub(IDS, "IDS_001", "IT Infrastructure"),
        sub(IDS, "IDS_002", "Network Effectiveness"),
        sub(IDS, "IDS_003", "Cybersecurity"),
        sub(IDS, "IDS_004", "Data Management"),
        sub(IDS, "IDS_005", "IT Scalability"),
        sub(RMS, "RMS_001", "Risk Outlook"),
        sub(RMS, "RMS_002", "Risk Identification"),
        sub(RMS, "RMS_003", "Risk Mitigation"),
        sub(RMS, "RMS_004", "Business Continuity"),
        sub(RMS, "RMS_005", "Strategic Adaptability"),
        sub(CMP, "CMP_001", "Compliance Awareness"),
        sub(CMP, "CMP_002", "Policy Adherence"),
        sub(CMP, "CMP_003", "Compliance Monitoring"),
        sub(CMP, "CMP_004", "Documentation"),
        sub(CMP, "CMP_005", "Incident Reporting"),
    ]
}

fn standard_mappings() -> Vec<QuestionMapping> {
    use DimensionCode::*;

    let map = |question_id: &str, dimension, sub_indicator_id: &str, weight| QuestionMapping {
        question_id: question_id.to_string(),
        dimension,
        sub_indicator_id: sub_indicator_id.to_string(),
        weight,
    };

    vec![
        // Strategy - 7 questions
        map("strategy_q1", STR, "STR_001", 1.0),
        map("strategy_q2", STR, "STR_002", 1.0),
        map("strategy_q3", STR, "STR_003", 1.0),
        map("strategy_q4", STR, "STR_003", 1.0),
        map("strategy_q5", STR, "STR_003", 1.5),
        map("strategy_q6", STR, "STR_004", 1.0),
        map("strategy_q7", STR, "STR_005", 1.5),
        // Sales - 8 questions
        map("sales_q1", SAL, "SAL_001", 0.5),
        map("sales_q2", SAL, "SAL_001", 1.0),
        map("sales_q3", SAL, "SAL_002", 1.5),
        map("sales_q4", SAL, "SAL_003", 1.0),
        map("sales_q5", SAL, "SAL_003", 1.0),
        map("sales_q6", SAL, "SAL_003", 1.0),
        map("sales_q7", SAL, "SAL_004", 1.0),
        map("sales_q8", SAL, "SAL_005", 1.0),
        // Marketing - 9 questions
        map("marketing_q1", MKT, "MKT_001", 1.0),
        map("marketing_q2", MKT, "MKT_005", 0.5),
        map("marketing_q3", MKT, "MKT_005", 0.5),
        map("marketing_q4", MKT, "MKT_005", 0.5),
        map("marketing_q5", MKT, "MKT_002", 1.5),
        map("marketing_q6", MKT, "MKT_003", 1.0),
        map("marketing_q7", MKT, "MKT_003", 1.0),
        map("marketing_q8", MKT, "MKT_003", 1.0),
        map("marketing_q9", MKT, "MKT_004", 1.0),
        // Customer Experience - 7 questions
        map("customer_experience_q1", CXP, "CXP_001", 1.0),
        map("customer_experience_q2", CXP, "CXP_002", 1.5),
        map("customer_experience_q3", CXP, "CXP_003", 1.5),
        map("customer_experience_q4", CXP, "CXP_002", 1.0),
        map("customer_experience_q5", CXP, "CXP_002", 1.0),
        map("customer_experience_q6", CXP, "CXP_004", 1.0),
        map("customer_experience_q7", CXP, "CXP_005", 1.0),
        // Operations - 6 questions
        map("operations_q1", OPS, "OPS_001", 1.5),
        map("operations_q2", OPS, "OPS_002", 1.0),
        map("operations_q3", OPS, "OPS_005", 1.0),
        map("operations_q4", OPS, "OPS_003", 1.5),
        map("operations_q5", OPS, "OPS_004", 1.0),
        map("operations_q6", OPS, "OPS_005", 1.0),
        // Financials - 12 questions
        map("financials_q1", FIN, "FIN_001", 1.0),
        map("financials_q2", FIN, "FIN_002", 1.0),
        map("financials_q3", FIN, "FIN_001", 1.0),
        map("financials_q4", FIN, "FIN_002", 1.0),
        map("financials_q5", FIN, "FIN_002", 1.0),
        map("financials_q6", FIN, "FIN_002", 1.5),
        map("financials_q7", FIN, "FIN_003", 1.5),
        map("financials_q8", FIN, "FIN_003", 1.0),
        map("financials_q9", FIN, "FIN_002", 1.0),
        map("financials_q10", FIN, "FIN_004", 1.0),
        map("financials_q11", FIN, "FIN_004", 1.0),
        map("financials_q12", FIN, "FIN_005", 1.5),
        // Human Resources - 7 questions
        map("human_resources_q1", HRS, "HRS_001", 1.5),
        map("human_resources_q2", HRS, "HRS_002", 1.5),
        map("human_resources_q3", HRS, "HRS_003", 1.0),
        map("human_resources_q4", HRS, "HRS_004", 1.0),
        map("human_resources_q5", HRS, "HRS_002", 1.5),
        map("human_resources_q6", HRS, "HRS_002", 1.5),
        map("human_resources_q7", HRS, "HRS_005", 1.0),
        // Leadership & Governance - 7 questions
        map("leadership_q1", LDG, "LDG_001", 1.5),
        map("leadership_q2", LDG, "LDG_002", 1.0),
        map("leadership_q3", LDG, "LDG_003", 1.0),
        map("leadership_q4", LDG, "LDG_003", 0.5),
        map("leadership_q5", LDG, "LDG_002", 1.5),
        map("leadership_q6", LDG, "LDG_004", 1.0),
        map("leadership_q7", LDG, "LDG_005", 1.0),
        // Technology & Innovation - 7 questions
        map("technology_q1", TIN, "TIN_001", 1.0),
        map("technology_q2", TIN, "TIN_005", 1.0),
        map("technology_q3", TIN, "TIN_002", 1.0),
        map("technology_q4", TIN, "TIN_003", 1.0),
        map("technology_q5", TIN, "TIN_003", 1.0),
        map("technology_q6", TIN, "TIN_004", 1.5),
        map("technology_q7", TIN, "TIN_005", 1.0),
        // IT, Data & Systems - 7 questions
        map("it_infrastructure_q1", IDS, "IDS_001", 1.5),
        map("it_infrastructure_q2", IDS, "IDS_002", 1.0),
        map("it_infrastructure_q3", IDS, "IDS_003", 2.0),
        map("it_infrastructure_q4", IDS, "IDS_004", 1.5),
        map("it_infrastructure_q5", IDS, "IDS_004", 1.0),
        map("it_infrastructure_q6", IDS, "IDS_005", 1.5),
        map("it_infrastructure_q7", IDS, "IDS_001", 1.0),
        // Risk Management & Sustainability - 8 questions
        map("risk_management_q1", RMS, "RMS_001", 1.5),
        map("risk_management_q2", RMS, "RMS_002", 1.0),
        map("risk_management_q3", RMS, "RMS_003", 1.5),
        map("risk_management_q4", RMS, "RMS_004", 1.5),
        map("risk_management_q5", RMS, "RMS_003", 1.5),
        map("risk_management_q6", RMS, "RMS_004", 1.5),
        map("risk_management_q7", RMS, "RMS_004", 1.0),
        map("risk_management_q8", RMS, "RMS_005", 1.0),
        // Compliance - 8 questions
        map("compliance_q1", CMP, "CMP_001", 1.5),
        map("compliance_q2", CMP, "CMP_002", 1.5),
        map("compliance_q3", CMP, "CMP_001", 1.0),
        map("compliance_q4", CMP, "CMP_003", 1.5),
        map("compliance_q5", CMP, "CMP_003", 1.0),
        map("compliance_q6", CMP, "CMP_004", 1.0),
        map("compliance_q7", CMP, "CMP_005", 1.0),
        map("compliance_q8", CMP, "CMP_001", 0.5),
    ]
}
