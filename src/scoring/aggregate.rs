use std::collections::{BTreeMap, HashMap};
use serde::Serialize;
use super::article::{round2, ArticleScore};
use super::taxonomy::RiskCategory;

/// Per-supplier roll-up of every article scored against it during one run.
/// Derived and immutable; suppliers with zero articles never appear.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierSummary {
    pub supplier: String,
    pub category_averages: BTreeMap<RiskCategory, f64>,
    pub weighted_average: f64,
    pub article_count: usize,
    pub min_weighted: f64,
    pub max_weighted: f64,
}

/// Groups article scores by supplier name. Grouping preserves
/// first-appearance order so downstream ranking has a deterministic
/// tie-break, and each supplier's articles keep their insertion order so
/// the mean is summed in a stable sequence.
#[derive(Debug, Default)]
pub struct SupplierAggregator {
    order: Vec<String>,
    scores: HashMap<String, Vec<ArticleScore>>,
}

impl SupplierAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, supplier: &str, score: ArticleScore) {
        if !self.scores.contains_key(supplier) {
            self.order.push(supplier.to_string());
        }
        self.scores.entry(supplier.to_string()).or_default().push(score);
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn supplier_count(&self) -> usize {
        self.order.len()
    }

    /// One summary per supplier, in first-appearance order.
    pub fn summarize(&self) -> Vec<SupplierSummary> {
        self.order
            .iter()
            .map(|supplier| {
                let articles = &self.scores[supplier];
                summarize_one(supplier, articles)
            })
            .collect()
    }
}

fn summarize_one(supplier: &str, articles: &[ArticleScore]) -> SupplierSummary {
    let count = articles.len();

    let mut category_averages = BTreeMap::new();
    for category in RiskCategory::ALL {
        let total: u32 = articles.iter().map(|a| a.category_score(category)).sum();
        category_averages.insert(category, round2(total as f64 / count as f64));
    }

    let weighted_total: f64 = articles.iter().map(|a| a.weighted_score).sum();
    let min_weighted = articles
        .iter()
        .map(|a| a.weighted_score)
        .fold(f64::INFINITY, f64::min);
    let max_weighted = articles
        .iter()
        .map(|a| a.weighted_score)
        .fold(f64::NEG_INFINITY, f64::max);

    SupplierSummary {
        supplier: supplier.to_string(),
        category_averages,
        weighted_average: round2(weighted_total / count as f64),
        article_count: count,
        min_weighted,
        max_weighted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_with(weighted: f64, labor: u32) -> ArticleScore {
        let mut category_scores = BTreeMap::new();
        category_scores.insert(RiskCategory::Labor, labor);
        category_scores.insert(RiskCategory::Environment, 0);
        category_scores.insert(RiskCategory::Governance, 0);
        ArticleScore {
            title: "t".to_string(),
            url: "u".to_string(),
            category_scores,
            sentiment: 0.0,
            weighted_score: weighted,
        }
    }

    #[test]
    fn test_mean_count_min_max() {
        let mut agg = SupplierAggregator::new();
        for w in [2.0, 4.0, 6.0] {
            agg.record("Glencore", score_with(w, 0));
        }
        let summaries = agg.summarize();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.weighted_average, 4.0);
        assert_eq!(summary.article_count, 3);
        assert_eq!(summary.min_weighted, 2.0);
        assert_eq!(summary.max_weighted, 6.0);
    }

    #[test]
    fn test_category_average_rounded() {
        let mut agg = SupplierAggregator::new();
        agg.record("Acme Mining", score_with(1.0, 2));
        agg.record("Acme Mining", score_with(1.0, 3));
        agg.record("Acme Mining", score_with(1.0, 3));
        let summary = &agg.summarize()[0];
        // (2 + 3 + 3) / 3 = 2.67 at two decimals
        assert_eq!(summary.category_averages[&RiskCategory::Labor], 2.67);
    }

    #[test]
    fn test_first_appearance_order_preserved() {
        let mut agg = SupplierAggregator::new();
        agg.record("Zeta Metals", score_with(1.0, 0));
        agg.record("Alpha Ore", score_with(2.0, 0));
        agg.record("Zeta Metals", score_with(3.0, 0));
        let names: Vec<_> = agg.summarize().iter().map(|s| s.supplier.clone()).collect();
        assert_eq!(names, vec!["Zeta Metals", "Alpha Ore"]);
    }

    #[test]
    fn test_empty_aggregator_produces_no_summaries() {
        let agg = SupplierAggregator::new();
        assert!(agg.is_empty());
        assert!(agg.summarize().is_empty());
    }

    #[test]
    fn test_single_article_supplier() {
        let mut agg = SupplierAggregator::new();
        agg.record("Solo Co", score_with(7.5, 1));
        let summary = &agg.summarize()[0];
        assert_eq!(summary.weighted_average, 7.5);
        assert_eq!(summary.min_weighted, summary.max_weighted);
    }
}
