use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::errors::EsgriskError;

/// ESG risk category a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Labor,
    Environment,
    Governance,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Labor,
        RiskCategory::Environment,
        RiskCategory::Governance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Labor => "labor",
            Self::Environment => "environment",
            Self::Governance => "governance",
        }
    }

    /// Column heading used in tables and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Labor => "Labor Risk",
            Self::Environment => "Environmental Risk",
            Self::Governance => "Governance Risk",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted keyword lists per risk category. Phrases are stored lower-case
/// and matched as case-insensitive substrings; each phrase contributes its
/// severity at most once per article.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: BTreeMap<RiskCategory, BTreeMap<String, u32>>,
}

impl Taxonomy {
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Add a keyword. The phrase is trimmed and lower-cased; rejects empty
    /// phrases, zero severities, and duplicates within a category.
    pub fn insert(
        &mut self,
        category: RiskCategory,
        phrase: &str,
        severity: u32,
    ) -> Result<(), EsgriskError> {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return Err(EsgriskError::Config(format!(
                "Empty keyword phrase in category '{}'",
                category
            )));
        }
        if severity == 0 {
            return Err(EsgriskError::Config(format!(
                "Keyword '{}' has severity 0; severities start at 1",
                phrase
            )));
        }
        let terms = self.entries.entry(category).or_default();
        if terms.contains_key(&phrase) {
            return Err(EsgriskError::Config(format!(
                "Duplicate keyword '{}' in category '{}'",
                phrase, category
            )));
        }
        terms.insert(phrase, severity);
        Ok(())
    }

    /// Keyword -> severity mapping for one category. Empty for categories
    /// with no entries.
    pub fn keywords(&self, category: RiskCategory) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .get(&category)
            .into_iter()
            .flat_map(|terms| terms.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    pub fn category_len(&self, category: RiskCategory) -> usize {
        self.entries.get(&category).map_or(0, |t| t.len())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|t| t.is_empty())
    }

    /// Replace the listed categories with user-supplied keyword tables,
    /// keeping the built-in table for categories not listed.
    pub fn with_overrides(
        overrides: &BTreeMap<RiskCategory, BTreeMap<String, u32>>,
    ) -> Result<Self, EsgriskError> {
        let mut taxonomy = Taxonomy::default();
        for (category, terms) in overrides {
            taxonomy.entries.remove(category);
            for (phrase, severity) in terms {
                taxonomy.insert(*category, phrase, *severity)?;
            }
        }
        Ok(taxonomy)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        for (category, table) in [
            (RiskCategory::Labor, LABOR_KEYWORDS),
            (RiskCategory::Environment, ENVIRONMENT_KEYWORDS),
            (RiskCategory::Governance, GOVERNANCE_KEYWORDS),
        ] {
            let terms: BTreeMap<String, u32> =
                table.iter().map(|(p, s)| (p.to_string(), *s)).collect();
            entries.insert(category, terms);
        }
        Self { entries }
    }
}

const LABOR_KEYWORDS: &[(&str, u32)] = &[
    ("child labor", 3),
    ("forced labor", 3),
    ("bonded labor", 3),
    ("modern slavery", 3),
    ("human trafficking", 3),
    ("unsafe working conditions", 2),
    ("low wages", 1),
    ("wage theft", 2),
    ("long working hours", 1),
    ("long hours", 1),
    ("no union", 1),
    ("union suppression", 2),
    ("anti-union practices", 2),
    ("worker abuse", 2),
    ("discrimination", 1),
    ("gender-based violence", 2),
    ("sexual harassment", 2),
    ("exploitation", 2),
    ("labor violations", 2),
    ("migrant worker abuse", 2),
    ("hazardous working conditions", 2),
    ("worker deaths", 3),
    ("occupational hazard", 2),
    ("factory collapse", 3),
    ("temporary contracts", 1),
    ("unpaid overtime", 2),
    ("lack of health insurance", 1),
    ("retaliation", 2),
];

const ENVIRONMENT_KEYWORDS: &[(&str, u32)] = &[
    ("pollution", 2),
    ("air pollution", 2),
    ("water pollution", 2),
    ("soil contamination", 2),
    ("deforestation", 3),
    ("biodiversity loss", 3),
    ("habitat destruction", 3),
    ("water contamination", 2),
    ("toxic waste", 3),
    ("oil spill", 3),
    ("chemical spill", 2),
    ("emissions violation", 2),
    ("illegal logging", 3),
    ("ecosystem destruction", 3),
    ("environmental damage", 2),
    ("climate impact", 2),
    ("greenhouse gas emissions", 2),
    ("carbon emissions", 2),
    ("methane emissions", 2),
    ("illegal dumping", 2),
    ("waste mismanagement", 1),
    ("overconsumption", 1),
    ("excessive packaging", 1),
    ("resource depletion", 2),
    ("water overuse", 2),
    ("tailings dam", 3),
    ("dam collapse", 3),
    ("brumadinho", 3),
    ("toxic sludge", 3),
    ("mining disaster", 3),
    ("environmental catastrophe", 3),
    ("negative impact", 3),
];

const GOVERNANCE_KEYWORDS: &[(&str, u32)] = &[
    ("sanctions", 2),
    ("fraud", 3),
    ("accounting fraud", 3),
    ("corruption", 3),
    ("bribery", 3),
    ("embezzlement", 3),
    ("money laundering", 3),
    ("regulatory violation", 2),
    ("fines", 1),
    ("illegal practices", 2),
    ("lack of transparency", 2),
    ("governance failure", 2),
    ("whistleblower retaliation", 2),
    ("non-compliance", 2),
    ("anti-competitive behavior", 2),
    ("insider trading", 2),
    ("misleading reporting", 2),
    ("data breach", 2),
    ("privacy violation", 2),
    ("cybersecurity failure", 2),
    ("board conflicts of interest", 2),
    ("lawsuit", 2),
    ("settlement", 2),
    ("criminal charges", 3),
    ("investigation", 2),
    ("stock manipulation", 3),
];
