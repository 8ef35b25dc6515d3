//! Analysis-phase bundles
//!
//! The upstream analyzers produce three rounds of named free-text
//! analyses. The engine never parses the text itself; it reads only the
//! aggregate structure (which analyses exist, and whether they
//! completed) to record coverage in the model's metadata.

use idm_core::types::PhaseCoverage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status of a single named analysis within a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Complete,
    Failed,
    Skipped,
    #[serde(other)]
    Unknown,
}

/// One named analysis: status, opaque content, usage metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEntry {
    pub status: AnalysisStatus,

    /// Collaborator-provided narrative text; opaque to this engine
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub tokens_used: Option<u64>,
}

/// A single phase's bundle of named analyses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseBundle {
    #[serde(default)]
    pub analyses: BTreeMap<String, AnalysisEntry>,
}

impl PhaseBundle {
    fn completed_count(&self) -> u32 {
        self.analyses
            .values()
            .filter(|a| a.status == AnalysisStatus::Complete)
            .count() as u32
    }
}

/// The three analysis-phase bundles feeding one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisPhases {
    #[serde(default)]
    pub phase1: Option<PhaseBundle>,
    #[serde(default)]
    pub phase2: Option<PhaseBundle>,
    #[serde(default)]
    pub phase3: Option<PhaseBundle>,
}

impl AnalysisPhases {
    /// Aggregate per-phase coverage for `meta.phase_coverage`
    pub fn coverage(&self) -> Vec<PhaseCoverage> {
        let named = [
            ("phase1", &self.phase1),
            ("phase2", &self.phase2),
            ("phase3", &self.phase3),
        ];
        named
            .into_iter()
            .filter_map(|(name, bundle)| {
                bundle.as_ref().map(|b| PhaseCoverage {
                    phase: name.to_string(),
                    total_analyses: b.analyses.len() as u32,
                    completed_analyses: b.completed_count(),
                })
            })
            .collect()
    }
}
