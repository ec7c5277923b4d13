use std::path::Path;
use crate::errors::EsgriskError;
use super::types::EsgriskConfig;

pub async fn parse_config(path: &Path) -> Result<EsgriskConfig, EsgriskError> {
    if !path.exists() {
        return Err(EsgriskError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(EsgriskError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: EsgriskConfig = serde_yaml::from_str(&content)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Semantic checks beyond structural parsing: weights must total 100,
/// keyword overrides must hold lower-case phrases with severity >= 1.
fn validate_semantics(config: &EsgriskConfig) -> Result<(), EsgriskError> {
    if let Some(weights) = &config.weights {
        weights.validate()?;
    }

    if let Some(keywords) = &config.keywords {
        for (category, terms) in keywords {
            for (phrase, severity) in terms {
                if phrase.trim().is_empty() {
                    return Err(EsgriskError::Config(format!(
                        "Empty keyword phrase in category '{}'",
                        category
                    )));
                }
                if *phrase != phrase.to_lowercase() {
                    return Err(EsgriskError::Config(format!(
                        "Keyword phrases must be lower-case: '{}'",
                        phrase
                    )));
                }
                if *severity == 0 {
                    return Err(EsgriskError::Config(format!(
                        "Keyword '{}' has severity 0; severities start at 1",
                        phrase
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_parse_valid_config() {
        let file = write_config(
            "search:\n  provider: google\n  api_key: $GOOGLE_API_KEY\nweights:\n  labor: 40\n  environment: 30\n  governance: 30\n",
        );
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.search.unwrap().provider.as_deref(), Some("google"));
        assert!(config.weights.unwrap().validate().is_ok());
    }

    #[tokio::test]
    async fn test_parse_missing_file() {
        let err = parse_config(Path::new("/nonexistent/esgrisk.yaml")).await;
        assert!(matches!(err, Err(EsgriskError::Config(_))));
    }

    #[tokio::test]
    async fn test_parse_rejects_bad_weights() {
        let file = write_config("weights:\n  labor: 50\n  environment: 30\n  governance: 30\n");
        assert!(parse_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_parse_rejects_zero_severity_keyword() {
        let file = write_config("keywords:\n  labor:\n    \"forced labor\": 0\n");
        assert!(parse_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_parse_rejects_uppercase_keyword() {
        let file = write_config("keywords:\n  labor:\n    \"Forced Labor\": 3\n");
        assert!(parse_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_parse_rejects_malformed_yaml() {
        let file = write_config("weights: [not, a, map\n");
        assert!(parse_config(file.path()).await.is_err());
    }
}
