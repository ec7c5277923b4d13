use std::cmp::Ordering;
use serde::Serialize;
use super::aggregate::SupplierSummary;

/// Qualitative tier for a composite risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Fixed thresholds, closed on the lower side: <= 5.5 is low,
    /// <= 7.0 is medium, above that is high.
    pub fn from_score(score: f64) -> Self {
        if score <= 5.5 {
            Self::Low
        } else if score <= 7.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "✅",
            Self::Medium => "⚠️",
            Self::High => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort summaries ascending by weighted average, lowest risk first.
/// The sort is stable, so equal averages keep their aggregation order.
pub fn rank(mut summaries: Vec<SupplierSummary>) -> Vec<SupplierSummary> {
    summaries.sort_by(|a, b| {
        a.weighted_average
            .partial_cmp(&b.weighted_average)
            .unwrap_or(Ordering::Equal)
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn summary(name: &str, average: f64) -> SupplierSummary {
        SupplierSummary {
            supplier: name.to_string(),
            category_averages: BTreeMap::new(),
            weighted_average: average,
            article_count: 1,
            min_weighted: average,
            max_weighted: average,
        }
    }

    #[test]
    fn test_rank_ascending() {
        let ranked = rank(vec![
            summary("high", 7.2),
            summary("low", 3.1),
            summary("mid", 5.0),
        ]);
        let averages: Vec<_> = ranked.iter().map(|s| s.weighted_average).collect();
        assert_eq!(averages, vec![3.1, 5.0, 7.2]);
    }

    #[test]
    fn test_rank_ties_keep_insertion_order() {
        let ranked = rank(vec![
            summary("first", 4.0),
            summary("second", 4.0),
            summary("cheaper", 1.0),
        ]);
        let names: Vec<_> = ranked.iter().map(|s| s.supplier.as_str()).collect();
        assert_eq!(names, vec!["cheaper", "first", "second"]);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_score(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(5.5), RiskBand::Low);
        assert_eq!(RiskBand::from_score(5.51), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(7.0), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(7.01), RiskBand::High);
        assert_eq!(RiskBand::from_score(42.0), RiskBand::High);
    }

    #[test]
    fn test_band_emoji() {
        assert_eq!(RiskBand::Low.emoji(), "✅");
        assert_eq!(RiskBand::Medium.emoji(), "⚠️");
        assert_eq!(RiskBand::High.emoji(), "❌");
    }
}
