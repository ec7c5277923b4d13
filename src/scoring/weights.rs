use serde::{Deserialize, Serialize};
use crate::errors::EsgriskError;
use super::taxonomy::RiskCategory;

/// User-supplied percentage weighting per risk category. The three
/// percentages must total exactly 100; scoring is blocked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub labor: u32,
    pub environment: u32,
    pub governance: u32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self { labor: 40, environment: 30, governance: 30 }
    }
}

impl WeightConfig {
    pub fn new(labor: u32, environment: u32, governance: u32) -> Self {
        Self { labor, environment, governance }
    }

    pub fn validate(&self) -> Result<(), EsgriskError> {
        let total = self.labor + self.environment + self.governance;
        if total != 100 {
            return Err(EsgriskError::Config(format!(
                "Risk weightings must total 100%, got {}% (labor {}, environment {}, governance {})",
                total, self.labor, self.environment, self.governance
            )));
        }
        Ok(())
    }

    pub fn percent(&self, category: RiskCategory) -> u32 {
        match category {
            RiskCategory::Labor => self.labor,
            RiskCategory::Environment => self.environment,
            RiskCategory::Governance => self.governance,
        }
    }
}

impl std::fmt::Display for WeightConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "labor {}% / environment {}% / governance {}%",
            self.labor, self.environment, self.governance
        )
    }
}
