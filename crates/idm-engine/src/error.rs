//! Engine error types
//!
//! Per the pipeline's failure policy, nothing here aborts a run once it
//! has started: data-shape mismatches are skipped and logged, benchmark
//! resolution failures degrade to omitted fields, and structural
//! violations are reported alongside the best-effort model. Errors are
//! reserved for construction-time misconfiguration.

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core type error
    #[error("Core error: {0}")]
    Core(#[from] idm_core::CoreError),

    /// Benchmark distribution that cannot interpolate monotonically
    #[error("Invalid benchmark distribution: {0}")]
    InvalidDistribution(String),

    /// Input document that does not match either questionnaire shape
    #[error("Invalid input document: {0}")]
    InvalidInput(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
