use std::time::Duration;
use crate::errors::EsgriskError;
use super::diffbot::DiffbotExtractor;
use super::extractor::{NullExtractor, TextExtractor};

pub fn create_extractor(
    extractor_name: &str,
    token: Option<&str>,
    timeout: Duration,
) -> Result<Box<dyn TextExtractor>, EsgriskError> {
    match extractor_name {
        "diffbot" => {
            let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
                EsgriskError::Config("Diffbot extraction requires an API token".into())
            })?;
            Ok(Box::new(DiffbotExtractor::new(token, timeout)))
        }
        "none" => Ok(Box::new(NullExtractor)),
        _ => Err(EsgriskError::Config(format!(
            "Unknown text extractor: {}",
            extractor_name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_diffbot_extractor() {
        let extractor = create_extractor("diffbot", Some("tok"), Duration::from_secs(10)).unwrap();
        assert_eq!(extractor.extractor_name(), "diffbot");
    }

    #[test]
    fn test_diffbot_requires_token() {
        assert!(create_extractor("diffbot", None, Duration::from_secs(10)).is_err());
        assert!(create_extractor("diffbot", Some(""), Duration::from_secs(10)).is_err());
    }

    #[tokio::test]
    async fn test_null_extractor_returns_empty() {
        let extractor = create_extractor("none", None, Duration::from_secs(10)).unwrap();
        assert_eq!(extractor.extract("https://example.com").await, "");
    }

    #[test]
    fn test_unknown_extractor_rejected() {
        assert!(create_extractor("readability", None, Duration::from_secs(10)).is_err());
    }
}
