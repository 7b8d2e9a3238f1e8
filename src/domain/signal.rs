//! Score aggregation and recommendation tiers.
//!
//! The score is the plain sum of evaluation points. Tiers are asymmetric:
//! BUY needs at least `buy_min_score` (2 by default), SELL is any negative
//! score, and everything in between (0 and 1 by default) is HOLD.

use crate::domain::rules::Evaluation;
use std::fmt;

pub const DEFAULT_BUY_MIN_SCORE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
}

impl Recommendation {
    pub fn headline(self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY (bullish)",
            Recommendation::Hold => "HOLD (neutral)",
            Recommendation::Sell => "SELL (bearish)",
        }
    }

    pub fn rationale(self) -> &'static str {
        match self {
            Recommendation::Buy => "The macroeconomic backdrop is very supportive of equities.",
            Recommendation::Hold => "Uncertain market. Favour stock picking.",
            Recommendation::Sell => "Risks (inflation/unemployment) weigh on profitability.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Sell => "SELL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalPolicy {
    pub buy_min_score: i32,
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            buy_min_score: DEFAULT_BUY_MIN_SCORE,
        }
    }
}

impl SignalPolicy {
    pub fn recommend(&self, score: i32) -> Recommendation {
        if score >= self.buy_min_score {
            Recommendation::Buy
        } else if score < 0 {
            Recommendation::Sell
        } else {
            Recommendation::Hold
        }
    }
}

pub fn total_score<'a, I>(evaluations: I) -> i32
where
    I: IntoIterator<Item = &'a Evaluation>,
{
    evaluations.into_iter().fold(0, |acc, e| acc + e.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::rules::Tag;

    fn eval(points: i32) -> Evaluation {
        Evaluation {
            category: Category::GdpGrowth,
            value: 0.0,
            points,
            tag: Tag::Solid,
        }
    }

    #[test]
    fn total_score_sums_points() {
        let evals = vec![eval(1), eval(1), eval(1), eval(-1)];
        assert_eq!(total_score(&evals), 2);
    }

    #[test]
    fn total_score_of_nothing_is_zero() {
        assert_eq!(total_score(&Vec::<Evaluation>::new()), 0);
    }

    #[test]
    fn total_score_is_not_capped_by_category_count() {
        let evals = vec![eval(1); 7];
        assert_eq!(total_score(&evals), 7);
    }

    #[test]
    fn recommendation_tiers() {
        let policy = SignalPolicy::default();
        assert_eq!(policy.recommend(4), Recommendation::Buy);
        assert_eq!(policy.recommend(2), Recommendation::Buy);
        assert_eq!(policy.recommend(1), Recommendation::Hold);
        assert_eq!(policy.recommend(0), Recommendation::Hold);
        assert_eq!(policy.recommend(-1), Recommendation::Sell);
        assert_eq!(policy.recommend(-4), Recommendation::Sell);
    }

    #[test]
    fn raised_buy_threshold_keeps_sell_at_negative() {
        let policy = SignalPolicy { buy_min_score: 3 };
        assert_eq!(policy.recommend(2), Recommendation::Hold);
        assert_eq!(policy.recommend(3), Recommendation::Buy);
        assert_eq!(policy.recommend(-1), Recommendation::Sell);
    }

    #[test]
    fn display_and_headline() {
        assert_eq!(Recommendation::Buy.to_string(), "BUY");
        assert_eq!(Recommendation::Sell.headline(), "SELL (bearish)");
    }
}
