/// Polarity scoring over arbitrary text. Display-only in reports; no risk
/// semantics are derived from the sign.
pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity in [-1.0, 1.0]; +1 very positive, -1 very negative.
    fn polarity(&self, text: &str) -> f64;

    fn analyzer_name(&self) -> &str;
}

/// Word-list analyzer: mean polarity over matched tokens, 0.0 when the
/// text hits neither list.
pub struct LexiconAnalyzer;

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in lowered.split(|c: char| !c.is_alphabetic()).filter(|t| !t.is_empty()) {
            if POSITIVE_WORDS.contains(&token) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&token) {
                negative += 1;
            }
        }
        let matched = positive + negative;
        if matched == 0 {
            return 0.0;
        }
        (positive as f64 - negative as f64) / matched as f64
    }

    fn analyzer_name(&self) -> &str {
        "lexicon"
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "award", "benefit", "best", "clean", "commitment", "ethical", "fair",
    "good", "growth", "improved", "improvement", "innovation", "leading",
    "praised", "progress", "protect", "recovery", "renewable", "responsible",
    "safe", "strong", "success", "successful", "support", "sustainable",
    "transparent", "win",
];

const NEGATIVE_WORDS: &[&str] = &[
    "abuse", "accused", "bad", "banned", "collapse", "contamination",
    "corrupt", "corruption", "criminal", "crisis", "damage", "dangerous",
    "death", "deaths", "decline", "disaster", "exploitation", "failure",
    "fine", "fines", "fraud", "guilty", "harm", "harmful", "illegal",
    "lawsuit", "loss", "pollution", "poor", "protest", "scandal", "slavery",
    "spill", "threat", "toxic", "unsafe", "violation", "violence", "worst",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_text_scores_below_zero() {
        let analyzer = LexiconAnalyzer;
        let polarity = analyzer.polarity("toxic spill caused damage and a lawsuit");
        assert!(polarity < 0.0);
        assert!(polarity >= -1.0);
    }

    #[test]
    fn test_positive_text_scores_above_zero() {
        let analyzer = LexiconAnalyzer;
        let polarity = analyzer.polarity("strong sustainable growth praised by regulators");
        assert!(polarity > 0.0);
        assert!(polarity <= 1.0);
    }

    #[test]
    fn test_unmatched_text_is_neutral() {
        let analyzer = LexiconAnalyzer;
        assert_eq!(analyzer.polarity("quarterly copper production figures"), 0.0);
        assert_eq!(analyzer.polarity(""), 0.0);
    }

    #[test]
    fn test_all_negative_is_minus_one() {
        let analyzer = LexiconAnalyzer;
        assert_eq!(analyzer.polarity("fraud corruption scandal"), -1.0);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_token_based() {
        let analyzer = LexiconAnalyzer;
        assert!(analyzer.polarity("FRAUD uncovered") < 0.0);
        // "finest" must not match the token "fine"
        assert_eq!(analyzer.polarity("the finest copper"), 0.0);
    }
}
