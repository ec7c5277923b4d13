use std::collections::BTreeSet;
use regex::Regex;

/// Organization-name recognition over article text. The set is
/// deduplicated; order carries no meaning.
pub trait EntityExtractor: Send + Sync {
    fn organizations(&self, text: &str) -> BTreeSet<String>;
}

/// Pattern-based organization spotter. Stands in for a full NER model:
/// it takes runs of capitalized words and keeps those that either carry a
/// corporate suffix or look like a multi-word proper name. Single-word
/// names without a suffix are missed.
pub struct HeuristicEntityExtractor {
    candidate: Regex,
}

impl HeuristicEntityExtractor {
    pub fn new() -> Self {
        let candidate = Regex::new(r"[A-Z][A-Za-z&'-]+(?:\s+(?:[A-Z][A-Za-z&'-]+|&))*")
            .expect("static pattern");
        Self { candidate }
    }
}

impl Default for HeuristicEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for HeuristicEntityExtractor {
    fn organizations(&self, text: &str) -> BTreeSet<String> {
        let mut orgs = BTreeSet::new();
        for capture in self.candidate.find_iter(text) {
            let candidate = capture.as_str().trim();
            if candidate.len() > 60 {
                continue;
            }
            let words: Vec<&str> = candidate.split_whitespace().collect();
            let has_suffix = words
                .last()
                .map_or(false, |w| CORPORATE_SUFFIXES.contains(&w.trim_end_matches('.')));
            let first_is_stopword = words
                .first()
                .map_or(true, |w| SENTENCE_STOPWORDS.contains(w));
            if has_suffix && words.len() >= 2 {
                orgs.insert(candidate.to_string());
            } else if words.len() >= 2 && !first_is_stopword {
                orgs.insert(candidate.to_string());
            }
        }
        orgs
    }
}

const CORPORATE_SUFFIXES: &[&str] = &[
    "AG", "Co", "Company", "Corp", "Corporation", "Energy", "Group",
    "Holdings", "Inc", "Industries", "International", "Limited", "Ltd",
    "Materials", "Metals", "Minerals", "Mining", "NV", "PLC", "Plc",
    "Resources", "SA",
];

const SENTENCE_STOPWORDS: &[&str] = &[
    "A", "According", "After", "An", "And", "At", "Before", "But", "By",
    "During", "For", "From", "He", "However", "In", "It", "Meanwhile",
    "On", "Or", "She", "That", "The", "These", "They", "This", "Those",
    "We", "When", "Where", "While", "With", "You",
];
