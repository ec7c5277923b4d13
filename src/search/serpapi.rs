use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::errors::EsgriskError;
use super::provider::SearchProvider;
use super::types::SearchHit;

/// SerpAPI backend (Google engine, organic results).
pub struct SerpApiProvider {
    client: Client,
    api_key: String,
    max_results: u32,
    timeout: Duration,
}

impl SerpApiProvider {
    pub fn new(api_key: &str, max_results: u32, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            max_results: max_results.max(1),
            timeout,
        }
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EsgriskError> {
        let num = self.max_results.to_string();
        let resp = self
            .client
            .get("https://serpapi.com/search")
            .query(&[
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("engine", "google"),
                ("num", num.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| EsgriskError::Network(format!("SerpAPI request failed: {}", e)))?;

        let status = resp.status();
        if status == 429 {
            return Err(EsgriskError::RateLimit("SerpAPI rate limit exceeded".into()));
        }
        if status == 401 {
            return Err(EsgriskError::Authentication("Invalid SerpAPI key".into()));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| EsgriskError::SearchApi(format!("Failed to parse SerpAPI response: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(EsgriskError::SearchApi(
                error.as_str().unwrap_or("Unknown error").to_string(),
            ));
        }

        let hits = parse_organic_results(&data, self.max_results as usize);
        debug!(query = %query, hits = hits.len(), "SerpAPI search completed");
        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "serpapi"
    }
}

fn parse_organic_results(data: &Value, limit: usize) -> Vec<SearchHit> {
    data["organic_results"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .take(limit)
                .map(|item| SearchHit {
                    title: item["title"].as_str().unwrap_or_default().to_string(),
                    link: item["link"].as_str().unwrap_or_default().to_string(),
                    snippet: item["snippet"].as_str().unwrap_or_default().to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_organic_results() {
        let data = json!({
            "organic_results": [
                {"title": "A", "link": "https://a", "snippet": "sa"},
                {"title": "B", "link": "https://b", "snippet": "sb"},
                {"title": "C", "link": "https://c", "snippet": "sc"}
            ]
        });
        let hits = parse_organic_results(&data, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].link, "https://b");
    }

    #[test]
    fn test_parse_empty_response() {
        assert!(parse_organic_results(&json!({}), 10).is_empty());
    }
}
