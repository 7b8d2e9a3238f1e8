//! Plain-text report: key indicators, raw breakdown and recommendation.

use crate::domain::engine::{Analysis, Outcome, RowOutcome, RowStatus};
use crate::domain::error::MacroSignalError;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;
use std::fmt::Write;

#[derive(Debug, Clone, Default)]
pub struct TextReport {
    as_of: Option<NaiveDate>,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }
}

/// `3.5` → `"3.5%"`, `2.0` → `"2.0%"`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}%", value)
    } else {
        format!("{}%", value)
    }
}

fn points_cell(row: &RowOutcome) -> String {
    match row.evaluation() {
        Some(e) => format!("{:+}", e.points),
        None => "-".to_string(),
    }
}

fn status_cell(row: &RowOutcome) -> String {
    match &row.status {
        RowStatus::Scored(e) => e.tag.to_string(),
        RowStatus::Excluded(reason) => format!("excluded ({})", reason.describe()),
    }
}

fn width(cells: impl Iterator<Item = usize>, header: &str) -> usize {
    cells.max().unwrap_or(0).max(header.chars().count())
}

impl ReportPort for TextReport {
    fn render(&self, analysis: &Analysis) -> Result<String, MacroSignalError> {
        let mut out = String::new();
        self.write_report(&mut out, analysis)
            .map_err(|_| std::io::Error::other("format error"))?;
        Ok(out)
    }
}

impl TextReport {
    fn write_report(&self, out: &mut String, analysis: &Analysis) -> std::fmt::Result {
        match self.as_of {
            Some(date) => writeln!(out, "=== Macro Signal ({}) ===", date)?,
            None => writeln!(out, "=== Macro Signal ===")?,
        }

        let (score, recommendation) = match analysis.outcome {
            Outcome::NoData => {
                writeln!(out, "\nWaiting for data: the source returned no rows.")?;
                return Ok(());
            }
            Outcome::Determined {
                score,
                recommendation,
            } => (score, recommendation),
        };

        writeln!(out, "\n=== Key Indicators ===")?;
        let scored: Vec<_> = analysis.evaluations().collect();
        if scored.is_empty() {
            writeln!(out, "  (no recognised indicator with a numeric value)")?;
        }
        for eval in &scored {
            writeln!(
                out,
                "  {:<14} {:>8}  {:<11} {:+}",
                eval.category.display_name(),
                format_percent(eval.value),
                eval.tag.to_string(),
                eval.points
            )?;
        }

        writeln!(out, "\n=== Breakdown ===")?;
        let label_w = width(analysis.rows.iter().map(|r| r.label.chars().count()), "Indicator");
        let value_w = width(analysis.rows.iter().map(|r| r.raw_value.chars().count()), "Value");
        let category_w = width(
            analysis.rows.iter().map(|r| r.category.to_string().len()),
            "Category",
        );

        writeln!(
            out,
            "  {:<label_w$}  {:<value_w$}  {:<category_w$}  {:>6}  Status",
            "Indicator", "Value", "Category", "Points",
        )?;
        for row in &analysis.rows {
            writeln!(
                out,
                "  {:<label_w$}  {:<value_w$}  {:<category_w$}  {:>6}  {}",
                row.label,
                row.raw_value,
                row.category.to_string(),
                points_cell(row),
                status_cell(row),
            )?;
        }

        writeln!(out, "\n=== Recommendation ===")?;
        writeln!(out, "{}", recommendation.headline())?;
        writeln!(out, "{}", recommendation.rationale())?;
        writeln!(out, "Score: {} / {}", score, scored.len())?;
        Ok(())
    }
}
