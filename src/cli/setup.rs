use std::path::Path;
use std::time::Duration;
use crate::config::{self, resolve_credential, EsgriskConfig};
use crate::errors::EsgriskError;
use crate::extract::{create_extractor, TextExtractor};
use crate::scoring::{Taxonomy, WeightConfig};
use crate::search::{create_search_provider, SearchProvider};
use super::commands::{BackendArgs, WeightArgs};

pub async fn load_file_config(args: &BackendArgs) -> Result<EsgriskConfig, EsgriskError> {
    match &args.config {
        Some(path) => config::parse_config(Path::new(path)).await,
        None => Ok(EsgriskConfig::default()),
    }
}

/// CLI flags override the config file; the file falls back to the 40/30/30
/// defaults. The combined result must still total 100.
pub fn resolve_weights(
    args: &WeightArgs,
    file: &EsgriskConfig,
) -> Result<WeightConfig, EsgriskError> {
    let base = file.weights.unwrap_or_default();
    let weights = WeightConfig::new(
        args.labor.unwrap_or(base.labor),
        args.environment.unwrap_or(base.environment),
        args.governance.unwrap_or(base.governance),
    );
    weights.validate()?;
    Ok(weights)
}

pub fn build_taxonomy(file: &EsgriskConfig) -> Result<Taxonomy, EsgriskError> {
    match &file.keywords {
        Some(overrides) => Taxonomy::with_overrides(overrides),
        None => Ok(Taxonomy::default()),
    }
}

/// Credential precedence: explicit flag, then config file ('$VAR' values
/// resolve from the environment), then the provider's conventional env var.
pub fn build_search_provider(
    args: &BackendArgs,
    file: &EsgriskConfig,
) -> Result<Box<dyn SearchProvider>, EsgriskError> {
    let file_search = file.search.clone().unwrap_or_default();
    let provider = args
        .search_provider
        .clone()
        .or(file_search.provider)
        .unwrap_or_else(|| "google".to_string());
    let api_key = args
        .api_key
        .clone()
        .or_else(|| file_search.api_key.as_deref().map(resolve_credential))
        .or_else(|| search_key_from_env(&provider))
        .unwrap_or_default();
    let cse_id = args
        .cse_id
        .clone()
        .or_else(|| file_search.cse_id.as_deref().map(resolve_credential))
        .or_else(|| std::env::var("GOOGLE_CSE_ID").ok());
    let max_results = args.max_results.or(file_search.max_results).unwrap_or(10);
    let timeout = Duration::from_secs(file_search.timeout_secs.unwrap_or(10));

    create_search_provider(&provider, &api_key, cse_id.as_deref(), max_results, timeout)
}

fn search_key_from_env(provider: &str) -> Option<String> {
    let var_name = match provider {
        "google" => "GOOGLE_API_KEY",
        "serpapi" => "SERPAPI_API_KEY",
        _ => return None,
    };
    std::env::var(var_name).ok()
}

pub fn build_extractor(
    args: &BackendArgs,
    file: &EsgriskConfig,
) -> Result<Box<dyn TextExtractor>, EsgriskError> {
    let file_extraction = file.extraction.clone().unwrap_or_default();
    let provider = args
        .extractor
        .clone()
        .or(file_extraction.provider)
        .unwrap_or_else(|| "diffbot".to_string());
    let token = args
        .diffbot_token
        .clone()
        .or_else(|| file_extraction.token.as_deref().map(resolve_credential))
        .or_else(|| std::env::var("DIFFBOT_TOKEN").ok());
    let timeout = Duration::from_secs(file_extraction.timeout_secs.unwrap_or(10));

    create_extractor(&provider, token.as_deref(), timeout)
}
