//! Company profile input
//!
//! The profile is used only to select a benchmark cohort; every field
//! is optional and conservative defaults apply when data is missing.

use serde::{Deserialize, Serialize};

/// Default industry key used when the profile does not state one
pub const DEFAULT_INDUSTRY: &str = "general";

/// Conservative floors applied when size/revenue are missing: an
/// unknown company is compared against the smallest peer cohort.
pub const EMPLOYEE_FLOOR: u32 = 1;
pub const REVENUE_FLOOR: f64 = 0.0;

/// Company profile attributes relevant to cohort selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub company_profile_id: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub employee_count: Option<u32>,

    #[serde(default)]
    pub annual_revenue: Option<f64>,
}

impl CompanyProfile {
    /// Normalized industry key for cohort lookup
    pub fn industry_key(&self) -> String {
        self.industry
            .as_deref()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_INDUSTRY.to_string())
    }

    /// Employee count with the conservative floor applied
    pub fn employees(&self) -> u32 {
        self.employee_count.unwrap_or(EMPLOYEE_FLOOR)
    }

    /// Annual revenue with the conservative floor applied
    pub fn revenue(&self) -> f64 {
        self.annual_revenue.unwrap_or(REVENUE_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let profile = CompanyProfile::default();
        assert_eq!(profile.industry_key(), "general");
        assert_eq!(profile.employees(), 1);
        assert_eq!(profile.revenue(), 0.0);
    }

    #[test]
    fn test_industry_normalization() {
        let profile = CompanyProfile {
            industry: Some("  Manufacturing ".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.industry_key(), "manufacturing");

        let blank = CompanyProfile {
            industry: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.industry_key(), "general");
    }

    #[test]
    fn test_deserialize_partial_profile() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"industry": "technology"}"#).unwrap();
        assert_eq!(profile.industry_key(), "technology");
        assert!(profile.employee_count.is_none());
    }
}
