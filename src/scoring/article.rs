use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use super::taxonomy::{RiskCategory, Taxonomy};
use super::weights::WeightConfig;

/// One search hit plus whatever full text the extractor recovered.
/// Consumed once by the scorer; an empty `full_text` is not an error —
/// scoring simply falls back to title and snippet.
#[derive(Debug, Clone)]
pub struct ArticleInput {
    pub title: String,
    pub snippet: String,
    pub url: String,
    pub full_text: String,
}

impl ArticleInput {
    /// Lower-cased matching surface: title, snippet, and full text joined
    /// by single spaces.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.snippet, self.full_text).to_lowercase()
    }
}

/// Immutable per-article scoring result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleScore {
    pub title: String,
    pub url: String,
    pub category_scores: BTreeMap<RiskCategory, u32>,
    /// Polarity in [-1, 1]; display-only, carries no risk semantics.
    pub sentiment: f64,
    pub weighted_score: f64,
}

impl ArticleScore {
    pub fn category_score(&self, category: RiskCategory) -> u32 {
        self.category_scores.get(&category).copied().unwrap_or(0)
    }
}

/// Score one article against the taxonomy. A keyword contributes its
/// severity exactly once per article when it appears anywhere as a
/// substring, regardless of repetition. The composite divides by the
/// percentage scale (100), not by any per-category maximum, so it is
/// unbounded above even though reports render it against "/ 10".
pub fn score(
    article: &ArticleInput,
    taxonomy: &Taxonomy,
    weights: &WeightConfig,
    sentiment: f64,
) -> ArticleScore {
    let text = article.combined_text();

    let mut category_scores = BTreeMap::new();
    for category in RiskCategory::ALL {
        let total: u32 = taxonomy
            .keywords(category)
            .filter(|(phrase, _)| text.contains(phrase))
            .map(|(_, severity)| severity)
            .sum();
        category_scores.insert(category, total);
    }

    let weighted: f64 = RiskCategory::ALL
        .iter()
        .map(|&c| {
            let count = category_scores.get(&c).copied().unwrap_or(0);
            count as f64 * weights.percent(c) as f64
        })
        .sum::<f64>()
        / 100.0;

    ArticleScore {
        title: article.title.clone(),
        url: article.url.clone(),
        category_scores,
        sentiment,
        weighted_score: round2(weighted),
    }
}

/// Round to two decimal places, the precision everything downstream
/// (aggregation, ranking, reports) works at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, snippet: &str, full_text: &str) -> ArticleInput {
        ArticleInput {
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: "https://example.com/a".to_string(),
            full_text: full_text.to_string(),
        }
    }

    fn labor_only_taxonomy() -> Taxonomy {
        let mut taxonomy = Taxonomy::empty();
        taxonomy.insert(RiskCategory::Labor, "forced labor", 3).unwrap();
        taxonomy
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let taxonomy = labor_only_taxonomy();
        let weights = WeightConfig::new(100, 0, 0);
        let scored = score(&article("Forced Labor is rampant", "", ""), &taxonomy, &weights, 0.0);
        assert_eq!(scored.category_score(RiskCategory::Labor), 3);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let taxonomy = labor_only_taxonomy();
        let weights = WeightConfig::new(100, 0, 0);
        let scored = score(
            &article("Forced labor report", "forced labor again", "more forced labor"),
            &taxonomy,
            &weights,
            0.0,
        );
        assert_eq!(scored.category_score(RiskCategory::Labor), 3);
        assert_eq!(scored.weighted_score, 3.0);
    }

    #[test]
    fn test_substring_matching_ignores_word_boundaries() {
        let mut taxonomy = Taxonomy::empty();
        taxonomy.insert(RiskCategory::Governance, "fines", 1).unwrap();
        let weights = WeightConfig::new(0, 0, 100);
        // "refines" contains "fines"; substring policy matches it.
        let scored = score(&article("Company refines process", "", ""), &taxonomy, &weights, 0.0);
        assert_eq!(scored.category_score(RiskCategory::Governance), 1);
    }

    #[test]
    fn test_weighted_formula_exact() {
        let mut taxonomy = Taxonomy::empty();
        taxonomy.insert(RiskCategory::Labor, "wage theft", 2).unwrap();
        taxonomy.insert(RiskCategory::Environment, "pollution", 2).unwrap();
        taxonomy.insert(RiskCategory::Governance, "bribery", 3).unwrap();
        let weights = WeightConfig::new(40, 30, 30);
        let scored = score(
            &article("Wage theft and pollution and bribery", "", ""),
            &taxonomy,
            &weights,
            0.0,
        );
        // (2*40 + 2*30 + 3*30) / 100 = 2.3
        assert_eq!(scored.weighted_score, 2.3);
    }

    #[test]
    fn test_composite_can_exceed_ten() {
        let mut taxonomy = Taxonomy::empty();
        for (i, phrase) in ["alpha risk", "beta risk", "gamma risk", "delta risk"]
            .iter()
            .enumerate()
        {
            taxonomy.insert(RiskCategory::Labor, phrase, 3 + i as u32).unwrap();
        }
        let weights = WeightConfig::new(100, 0, 0);
        let scored = score(
            &article("alpha risk beta risk gamma risk delta risk", "", ""),
            &taxonomy,
            &weights,
            0.0,
        );
        assert!(scored.weighted_score > 10.0);
    }

    #[test]
    fn test_empty_full_text_degrades_gracefully() {
        let taxonomy = labor_only_taxonomy();
        let weights = WeightConfig::new(100, 0, 0);
        let scored = score(&article("Quarterly results", "steady output", ""), &taxonomy, &weights, 0.0);
        assert_eq!(scored.category_score(RiskCategory::Labor), 0);
        assert_eq!(scored.weighted_score, 0.0);
    }

    #[test]
    fn test_empty_taxonomy_scores_zero() {
        let taxonomy = Taxonomy::empty();
        let weights = WeightConfig::default();
        let scored = score(&article("Forced labor uncovered", "", ""), &taxonomy, &weights, 0.0);
        assert_eq!(scored.weighted_score, 0.0);
    }

    #[test]
    fn test_combined_text_joined_by_single_spaces() {
        let input = article("Title", "Snippet", "Body");
        assert_eq!(input.combined_text(), "title snippet body");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.2345), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(3.0), 3.0);
    }
}
