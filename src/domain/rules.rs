//! Per-category threshold rules.
//!
//! | Category     | Condition            | Points | Tag          |
//! |--------------|----------------------|--------|--------------|
//! | GDP growth   | `v >= 3.0`           | +1     | Solid        |
//! |              | otherwise            | -1     | Weak         |
//! | Inflation    | `-1 <= v <= 3`       | +1     | Controlled   |
//! |              | otherwise            | -1     | At risk      |
//! | Policy rate  | `v <= 3.0`           | +1     | Favorable    |
//! |              | otherwise            | 0      | Restrictive  |
//! | Unemployment | `v > 12`             | -1     | High         |
//! |              | otherwise            | 0      | Stable       |
//!
//! Comparisons are exact; no tolerance is applied at the boundaries.

use crate::domain::category::Category;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Solid,
    Weak,
    Controlled,
    AtRisk,
    Favorable,
    Restrictive,
    High,
    Stable,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tag::Solid => "Solid",
            Tag::Weak => "Weak",
            Tag::Controlled => "Controlled",
            Tag::AtRisk => "At risk",
            Tag::Favorable => "Favorable",
            Tag::Restrictive => "Restrictive",
            Tag::High => "High",
            Tag::Stable => "Stable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub category: Category,
    pub value: f64,
    pub points: i32,
    pub tag: Tag,
}

/// Decision thresholds. `Default` holds the reference values.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub gdp_solid_min: f64,
    pub inflation_min: f64,
    pub inflation_max: f64,
    pub policy_rate_max: f64,
    pub unemployment_max: f64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            gdp_solid_min: 3.0,
            inflation_min: -1.0,
            inflation_max: 3.0,
            policy_rate_max: 3.0,
            unemployment_max: 12.0,
        }
    }
}

impl RuleSet {
    /// Returns `None` for `Category::Unknown`.
    pub fn evaluate(&self, category: Category, value: f64) -> Option<Evaluation> {
        let (points, tag) = match category {
            Category::GdpGrowth => self.gdp_growth(value),
            Category::Inflation => self.inflation(value),
            Category::PolicyRate => self.policy_rate(value),
            Category::Unemployment => self.unemployment(value),
            Category::Unknown => return None,
        };
        Some(Evaluation {
            category,
            value,
            points,
            tag,
        })
    }

    pub fn gdp_growth(&self, value: f64) -> (i32, Tag) {
        if value >= self.gdp_solid_min {
            (1, Tag::Solid)
        } else {
            (-1, Tag::Weak)
        }
    }

    pub fn inflation(&self, value: f64) -> (i32, Tag) {
        if value >= self.inflation_min && value <= self.inflation_max {
            (1, Tag::Controlled)
        } else {
            (-1, Tag::AtRisk)
        }
    }

    pub fn policy_rate(&self, value: f64) -> (i32, Tag) {
        if value <= self.policy_rate_max {
            (1, Tag::Favorable)
        } else {
            (0, Tag::Restrictive)
        }
    }

    pub fn unemployment(&self, value: f64) -> (i32, Tag) {
        if value > self.unemployment_max {
            (-1, Tag::High)
        } else {
            (0, Tag::Stable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::default()
    }

    mod gdp_growth {
        use super::*;

        #[test]
        fn at_threshold_is_solid() {
            assert_eq!(rules().gdp_growth(3.0), (1, Tag::Solid));
        }

        #[test]
        fn just_below_threshold_is_weak() {
            assert_eq!(rules().gdp_growth(2.99), (-1, Tag::Weak));
        }

        #[test]
        fn negative_growth_is_weak() {
            assert_eq!(rules().gdp_growth(-0.5), (-1, Tag::Weak));
        }
    }

    mod inflation {
        use super::*;

        #[test]
        fn lower_bound_inclusive() {
            assert_eq!(rules().inflation(-1.0), (1, Tag::Controlled));
        }

        #[test]
        fn upper_bound_inclusive() {
            assert_eq!(rules().inflation(3.0), (1, Tag::Controlled));
        }

        #[test]
        fn above_band_is_at_risk() {
            assert_eq!(rules().inflation(3.01), (-1, Tag::AtRisk));
        }

        #[test]
        fn deflation_below_band_is_at_risk() {
            assert_eq!(rules().inflation(-1.01), (-1, Tag::AtRisk));
        }
    }

    mod policy_rate {
        use super::*;

        #[test]
        fn at_threshold_is_favorable() {
            assert_eq!(rules().policy_rate(3.0), (1, Tag::Favorable));
        }

        #[test]
        fn above_threshold_is_restrictive_and_neutral() {
            assert_eq!(rules().policy_rate(3.01), (0, Tag::Restrictive));
        }
    }

    mod unemployment {
        use super::*;

        #[test]
        fn at_threshold_is_stable() {
            assert_eq!(rules().unemployment(12.0), (0, Tag::Stable));
        }

        #[test]
        fn above_threshold_is_high() {
            assert_eq!(rules().unemployment(12.01), (-1, Tag::High));
        }
    }

    #[test]
    fn evaluate_carries_category_and_value() {
        let eval = rules().evaluate(Category::Inflation, 2.0).unwrap();
        assert_eq!(
            eval,
            Evaluation {
                category: Category::Inflation,
                value: 2.0,
                points: 1,
                tag: Tag::Controlled,
            }
        );
    }

    #[test]
    fn unknown_category_is_not_evaluated() {
        assert!(rules().evaluate(Category::Unknown, 5.0).is_none());
    }

    #[test]
    fn custom_thresholds_move_the_boundary() {
        let custom = RuleSet {
            gdp_solid_min: 2.0,
            ..RuleSet::default()
        };
        assert_eq!(custom.gdp_growth(2.0), (1, Tag::Solid));
        assert_eq!(rules().gdp_growth(2.0), (-1, Tag::Weak));
    }

    #[test]
    fn tag_display_text() {
        assert_eq!(Tag::AtRisk.to_string(), "At risk");
        assert_eq!(Tag::Favorable.to_string(), "Favorable");
    }
}
