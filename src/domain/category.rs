//! Indicator classification.
//!
//! Labels are matched by case-sensitive substring against an ordered rule
//! table. The first rule with any matching keyword wins; a label matching
//! nothing is `Unknown`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GdpGrowth,
    Inflation,
    PolicyRate,
    Unemployment,
    Unknown,
}

impl Category {
    /// Name shown next to the indicator's value in reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::GdpGrowth => "Growth (GDP)",
            Category::Inflation => "Inflation",
            Category::PolicyRate => "Policy rate",
            Category::Unemployment => "Unemployment",
            Category::Unknown => "Unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::GdpGrowth => "GDP_GROWTH",
            Category::Inflation => "INFLATION",
            Category::PolicyRate => "POLICY_RATE",
            Category::Unemployment => "UNEMPLOYMENT",
            Category::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

pub struct ClassificationRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    pub fn matches(&self, label: &str) -> bool {
        self.keywords.iter().any(|kw| label.contains(kw))
    }
}

/// Evaluated top-down.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: Category::GdpGrowth,
        keywords: &["PIB"],
    },
    ClassificationRule {
        category: Category::Inflation,
        keywords: &["Inflation"],
    },
    ClassificationRule {
        category: Category::PolicyRate,
        keywords: &["Intérêt", "Directeur"],
    },
    ClassificationRule {
        category: Category::Unemployment,
        keywords: &["Chômage"],
    },
];

pub fn classify(label: &str) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(label))
        .map(|rule| rule.category)
        .unwrap_or(Category::Unknown)
}
