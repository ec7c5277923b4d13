use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::scoring::WeightConfig;

/// Identifying header for one assessment run.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub query: String,
    pub weights: WeightConfig,
}

impl RunMetadata {
    pub fn new(query: &str, weights: WeightConfig) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            query: query.to_string(),
            weights,
        }
    }

    pub fn header_markdown(&self) -> String {
        let version = match option_env!("GIT_HASH") {
            Some(hash) => format!("{} ({})", env!("CARGO_PKG_VERSION"), hash),
            None => env!("CARGO_PKG_VERSION").to_string(),
        };
        format!(
            "- Run ID: {}\n- Assessment Date: {}\n- Query: {}\n- Weightings: {}\n- Tool Version: {}\n",
            self.run_id,
            self.started_at.to_rfc3339(),
            self.query,
            self.weights,
            version,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ids_are_unique() {
        let a = RunMetadata::new("q", WeightConfig::default());
        let b = RunMetadata::new("q", WeightConfig::default());
        assert_ne!(a.run_id, b.run_id);
    }

    #[test]
    fn test_header_contains_query_and_weights() {
        let meta = RunMetadata::new("cobalt ESG", WeightConfig::default());
        let header = meta.header_markdown();
        assert!(header.contains("cobalt ESG"));
        assert!(header.contains("labor 40%"));
        assert!(header.contains("Assessment Date:"));
    }
}
