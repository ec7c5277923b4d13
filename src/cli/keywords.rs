use std::path::Path;
use console::style;
use crate::config;
use crate::errors::EsgriskError;
use crate::scoring::RiskCategory;
use super::commands::KeywordsArgs;
use super::setup;

pub async fn handle_keywords(args: KeywordsArgs) -> Result<(), EsgriskError> {
    let file_config = match &args.config {
        Some(path) => config::parse_config(Path::new(path)).await?,
        None => Default::default(),
    };
    let taxonomy = setup::build_taxonomy(&file_config)?;

    let categories: Vec<RiskCategory> = match &args.category {
        Some(name) => vec![parse_category(name)?],
        None => RiskCategory::ALL.to_vec(),
    };

    for category in categories {
        println!(
            "{} ({} keywords)",
            style(category.display_name()).bold(),
            taxonomy.category_len(category)
        );
        for (phrase, severity) in taxonomy.keywords(category) {
            println!("  {}  {}", severity, phrase);
        }
        println!();
    }

    Ok(())
}

fn parse_category(name: &str) -> Result<RiskCategory, EsgriskError> {
    match name.to_lowercase().as_str() {
        "labor" => Ok(RiskCategory::Labor),
        "environment" => Ok(RiskCategory::Environment),
        "governance" => Ok(RiskCategory::Governance),
        other => Err(EsgriskError::InvalidInput(format!(
            "Unknown category '{}'; expected labor, environment, or governance",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("labor").unwrap(), RiskCategory::Labor);
        assert_eq!(parse_category("Environment").unwrap(), RiskCategory::Environment);
        assert!(parse_category("social").is_err());
    }
}
