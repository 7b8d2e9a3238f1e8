//! End-to-end scoring pipeline.
//!
//! Dataset → indicator rows → normalized rows → (category, evaluation) per
//! row → score → recommendation. An `Engine` holds only thresholds, so one
//! instance can analyze any number of snapshots from any number of threads.

use crate::domain::category::{classify, Category};
use crate::domain::dataset::{ColumnSpec, Dataset, IndicatorRow};
use crate::domain::error::MacroSignalError;
use crate::domain::normalize::{normalize_row, Reading};
use crate::domain::rules::{Evaluation, RuleSet};
use crate::domain::signal::{total_score, Recommendation, SignalPolicy};

/// Why a row did not contribute to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    MissingValue,
    Unclassified,
}

impl Exclusion {
    pub fn describe(self) -> &'static str {
        match self {
            Exclusion::MissingValue => "missing value",
            Exclusion::Unclassified => "unclassified",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowStatus {
    Scored(Evaluation),
    Excluded(Exclusion),
}

/// One input row as it went through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    pub label: String,
    pub raw_value: String,
    pub value: Reading,
    pub category: Category,
    pub status: RowStatus,
}

impl RowOutcome {
    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.status {
            RowStatus::Scored(e) => Some(e),
            RowStatus::Excluded(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The snapshot had no rows at all. Not the same as a zero score.
    NoData,
    Determined {
        score: i32,
        recommendation: Recommendation,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub rows: Vec<RowOutcome>,
    pub outcome: Outcome,
}

impl Analysis {
    pub fn evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.rows.iter().filter_map(RowOutcome::evaluation)
    }

    pub fn scored_count(&self) -> usize {
        self.evaluations().count()
    }

    pub fn score(&self) -> Option<i32> {
        match self.outcome {
            Outcome::Determined { score, .. } => Some(score),
            Outcome::NoData => None,
        }
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        match self.outcome {
            Outcome::Determined { recommendation, .. } => Some(recommendation),
            Outcome::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.outcome == Outcome::NoData
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub rules: RuleSet,
    pub policy: SignalPolicy,
}

impl Engine {
    pub fn new(rules: RuleSet, policy: SignalPolicy) -> Self {
        Self { rules, policy }
    }

    /// Extracts the configured columns and analyzes the rows.
    ///
    /// A dataset with neither header nor records (the source sent nothing)
    /// is `NoData`. Otherwise returns `InvalidInput` when either column is
    /// missing; nothing is scored in that case.
    pub fn analyze(
        &self,
        dataset: &Dataset,
        columns: &ColumnSpec,
    ) -> Result<Analysis, MacroSignalError> {
        if dataset.headers.is_empty() && dataset.is_empty() {
            return Ok(self.analyze_rows(&[]));
        }
        let rows = dataset.indicator_rows(columns)?;
        Ok(self.analyze_rows(&rows))
    }

    pub fn analyze_rows(&self, rows: &[IndicatorRow]) -> Analysis {
        let outcomes: Vec<RowOutcome> = rows.iter().map(|row| self.process_row(row)).collect();

        let outcome = if outcomes.is_empty() {
            Outcome::NoData
        } else {
            let score = total_score(outcomes.iter().filter_map(RowOutcome::evaluation));
            Outcome::Determined {
                score,
                recommendation: self.policy.recommend(score),
            }
        };

        Analysis {
            rows: outcomes,
            outcome,
        }
    }

    fn process_row(&self, row: &IndicatorRow) -> RowOutcome {
        let normalized = normalize_row(row);
        let category = classify(&normalized.label);

        let status = match normalized.value {
            Reading::Missing => {
                log::warn!(
                    "excluding '{}': value {:?} is not a number",
                    normalized.label,
                    row.raw_value
                );
                RowStatus::Excluded(Exclusion::MissingValue)
            }
            Reading::Value(v) => match self.rules.evaluate(category, v) {
                Some(eval) => {
                    log::debug!(
                        "'{}' -> {} {} ({:+})",
                        normalized.label,
                        category,
                        eval.tag,
                        eval.points
                    );
                    RowStatus::Scored(eval)
                }
                None => {
                    log::debug!("'{}' matches no indicator category", normalized.label);
                    RowStatus::Excluded(Exclusion::Unclassified)
                }
            },
        };

        RowOutcome {
            label: normalized.label,
            raw_value: row.raw_value.clone(),
            value: normalized.value,
            category,
            status,
        }
    }
}
