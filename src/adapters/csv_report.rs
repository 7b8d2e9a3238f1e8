//! Machine-readable CSV breakdown, one line per input row.

use crate::domain::engine::{Analysis, RowStatus};
use crate::domain::error::MacroSignalError;
use crate::ports::report_port::ReportPort;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BreakdownRecord<'a> {
    label: &'a str,
    raw_value: &'a str,
    value: Option<f64>,
    category: String,
    points: Option<i32>,
    tag: Option<String>,
    status: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReport;

impl ReportPort for CsvReport {
    fn render(&self, analysis: &Analysis) -> Result<String, MacroSignalError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        for row in &analysis.rows {
            let (points, tag, status) = match &row.status {
                RowStatus::Scored(e) => (Some(e.points), Some(e.tag.to_string()), "scored"),
                RowStatus::Excluded(reason) => (None, None, reason.describe()),
            };
            wtr.serialize(BreakdownRecord {
                label: &row.label,
                raw_value: &row.raw_value,
                value: row.value.value(),
                category: row.category.to_string(),
                points,
                tag,
                status,
            })
            .map_err(std::io::Error::from)?;
        }

        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }
}
