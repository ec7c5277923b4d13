use async_trait::async_trait;
use crate::errors::EsgriskError;
use super::types::SearchHit;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a free-text query and return a bounded list of hits. An empty
    /// result set is a normal outcome, not an error.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EsgriskError>;

    /// Backend name for logging
    fn provider_name(&self) -> &str;
}
