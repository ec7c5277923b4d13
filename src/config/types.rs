use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::scoring::{RiskCategory, WeightConfig};

/// Optional per-category keyword tables overriding the built-in taxonomy.
pub type KeywordOverrides = BTreeMap<RiskCategory, BTreeMap<String, u32>>;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct EsgriskConfig {
    pub search: Option<SearchConfig>,
    pub extraction: Option<ExtractionConfig>,
    pub weights: Option<WeightConfig>,
    pub keywords: Option<KeywordOverrides>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub provider: Option<String>,
    /// API key; a leading '$' resolves from the environment.
    pub api_key: Option<String>,
    /// Google Programmable Search engine id.
    pub cse_id: Option<String>,
    pub max_results: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: Some("google".to_string()),
            api_key: None,
            cse_id: None,
            max_results: Some(10),
            timeout_secs: Some(10),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub provider: Option<String>,
    /// API token; a leading '$' resolves from the environment.
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            provider: Some("diffbot".to_string()),
            token: None,
            timeout_secs: Some(10),
        }
    }
}
