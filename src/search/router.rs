use std::time::Duration;
use crate::errors::EsgriskError;
use super::google::GoogleSearchProvider;
use super::provider::SearchProvider;
use super::serpapi::SerpApiProvider;

pub fn create_search_provider(
    provider_name: &str,
    api_key: &str,
    cse_id: Option<&str>,
    max_results: u32,
    timeout: Duration,
) -> Result<Box<dyn SearchProvider>, EsgriskError> {
    if api_key.is_empty() {
        return Err(EsgriskError::Config(format!(
            "No API key configured for search provider '{}'",
            provider_name
        )));
    }

    match provider_name {
        "google" => {
            let cse_id = cse_id.filter(|id| !id.is_empty()).ok_or_else(|| {
                EsgriskError::Config(
                    "Google search requires a Programmable Search engine id (cse_id)".into(),
                )
            })?;
            Ok(Box::new(GoogleSearchProvider::new(api_key, cse_id, max_results, timeout)))
        }
        "serpapi" => Ok(Box::new(SerpApiProvider::new(api_key, max_results, timeout))),
        _ => Err(EsgriskError::Config(format!(
            "Unknown search provider: {}",
            provider_name
        ))),
    }
}
