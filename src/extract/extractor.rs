use async_trait::async_trait;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Plain-text article body for a URL. Failures never cross this
    /// boundary: transport errors, timeouts, and malformed responses all
    /// degrade to an empty string so the batch keeps going.
    async fn extract(&self, url: &str) -> String;

    /// Backend name for logging
    fn extractor_name(&self) -> &str;
}

/// No-op extractor for snippet-only assessment.
pub struct NullExtractor;

#[async_trait]
impl TextExtractor for NullExtractor {
    async fn extract(&self, _url: &str) -> String {
        String::new()
    }

    fn extractor_name(&self) -> &str {
        "none"
    }
}
