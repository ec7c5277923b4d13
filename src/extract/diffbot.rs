use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::errors::EsgriskError;
use super::extractor::TextExtractor;

/// Diffbot Article API backend.
pub struct DiffbotExtractor {
    client: Client,
    token: String,
    timeout: Duration,
}

impl DiffbotExtractor {
    pub fn new(token: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            token: token.to_string(),
            timeout,
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, EsgriskError> {
        let resp = self
            .client
            .get("https://api.diffbot.com/v3/article")
            .query(&[("token", self.token.as_str()), ("url", url)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| EsgriskError::Network(format!("Diffbot request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EsgriskError::Extraction(format!(
                "Diffbot returned HTTP {}",
                status
            )));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| EsgriskError::Extraction(format!("Failed to parse Diffbot response: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(EsgriskError::Extraction(
                error.as_str().unwrap_or("Unknown error").to_string(),
            ));
        }

        Ok(article_text(&data))
    }
}

#[async_trait]
impl TextExtractor for DiffbotExtractor {
    async fn extract(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                debug!(url = %url, error = %e, "Article extraction failed, continuing without full text");
                String::new()
            }
        }
    }

    fn extractor_name(&self) -> &str {
        "diffbot"
    }
}

fn article_text(data: &Value) -> String {
    data["objects"][0]["text"].as_str().unwrap_or_default().to_string()
}
