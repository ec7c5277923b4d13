use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::errors::EsgriskError;
use super::provider::SearchProvider;
use super::types::SearchHit;

/// Google Programmable Search (Custom Search JSON API) backend.
pub struct GoogleSearchProvider {
    client: Client,
    api_key: String,
    cse_id: String,
    max_results: u32,
    timeout: Duration,
}

impl GoogleSearchProvider {
    pub fn new(api_key: &str, cse_id: &str, max_results: u32, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            cse_id: cse_id.to_string(),
            // The API caps num at 10 per request
            max_results: max_results.clamp(1, 10),
            timeout,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EsgriskError> {
        let num = self.max_results.to_string();
        let resp = self
            .client
            .get("https://www.googleapis.com/customsearch/v1")
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cse_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| EsgriskError::Network(format!("Google search request failed: {}", e)))?;

        let status = resp.status();
        if status == 429 {
            return Err(EsgriskError::RateLimit("Google search quota exceeded".into()));
        }
        if status == 401 || status == 403 {
            return Err(EsgriskError::Authentication("Google API key rejected".into()));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| EsgriskError::SearchApi(format!("Failed to parse Google response: {}", e)))?;

        if let Some(error) = data.get("error") {
            let msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(EsgriskError::SearchApi(msg.to_string()));
        }

        let hits = parse_items(&data);
        debug!(query = %query, hits = hits.len(), "Google search completed");
        Ok(hits)
    }

    fn provider_name(&self) -> &str {
        "google"
    }
}

fn parse_items(data: &Value) -> Vec<SearchHit> {
    data["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
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
    fn test_parse_items_maps_fields() {
        let data = json!({
            "items": [
                {"title": "T1", "link": "https://a", "snippet": "S1"},
                {"title": "T2", "link": "https://b"}
            ]
        });
        let hits = parse_items(&data);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "T1");
        assert_eq!(hits[1].snippet, "");
    }

    #[test]
    fn test_parse_items_tolerates_missing_items() {
        let hits = parse_items(&json!({"searchInformation": {"totalResults": "0"}}));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_max_results_clamped_to_api_limit() {
        let provider = GoogleSearchProvider::new("k", "cx", 50, Duration::from_secs(10));
        assert_eq!(provider.max_results, 10);
        let provider = GoogleSearchProvider::new("k", "cx", 0, Duration::from_secs(10));
        assert_eq!(provider.max_results, 1);
    }
}
