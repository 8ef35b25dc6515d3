//! Configuration types for InsightsEngine

use idm_core::Taxonomy;
use idm_engine::BenchmarkLibrary;

/// Main engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Taxonomy driving aggregation; defaults to the standard catalog
    pub taxonomy: Taxonomy,

    /// Peer cohorts for percentile benchmarks
    pub benchmarks: BenchmarkLibrary,

    /// Run structural validation after assembly
    pub enable_validation: bool,

    /// Overall health score from a previous run, for trajectory
    pub previous_overall_score: Option<f64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            taxonomy: Taxonomy::standard(),
            benchmarks: BenchmarkLibrary::standard(),
            enable_validation: true,
            previous_overall_score: None,
        }
    }

    /// Replace the taxonomy
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Replace the benchmark library
    pub fn with_benchmarks(mut self, benchmarks: BenchmarkLibrary) -> Self {
        self.benchmarks = benchmarks;
        self
    }

    /// Enable or disable post-assembly validation
    pub fn enable_validation(mut self, enable: bool) -> Self {
        self.enable_validation = enable;
        self
    }

    /// Provide a previous overall score for trajectory computation
    pub fn with_previous_overall_score(mut self, score: f64) -> Self {
        self.previous_overall_score = Some(score);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = EngineConfig::new();
        assert!(config.enable_validation);
        assert!(config.previous_overall_score.is_none());
        assert_eq!(config.taxonomy.question_count(), 87);
    }

    #[test]
    fn test_builder_chaining() {
        let config = EngineConfig::new()
            .with_benchmarks(BenchmarkLibrary::empty())
            .enable_validation(false)
            .with_previous_overall_score(61.5);
        assert!(!config.enable_validation);
        assert_eq!(config.previous_overall_score, Some(61.5));
    }
}
