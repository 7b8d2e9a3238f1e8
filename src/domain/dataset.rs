//! Tabular dataset snapshot and indicator row extraction.
//!
//! A `Dataset` is whatever the data source handed over: a header row and
//! zero or more records of text cells. Scoring only needs two columns (the
//! indicator label and its value); any other column is carried along
//! untouched for display.

use crate::domain::error::MacroSignalError;

pub const DEFAULT_LABEL_COLUMN: &str = "Indicateur";
pub const DEFAULT_VALUE_COLUMN: &str = "Valeur";

/// One observation as supplied by the source.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub label: String,
    pub raw_value: String,
}

impl IndicatorRow {
    pub fn new(label: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Names of the two columns the engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: String,
    pub value: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL_COLUMN.to_string(),
            value: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Dataset {
    /// Builds a dataset, trimming surrounding whitespace from every header.
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h == name)
    }

    /// Projects the label and value columns into indicator rows, in record order.
    ///
    /// Fails fast when either column is absent from the header. A record too
    /// short to reach a column reads that cell as empty text.
    pub fn indicator_rows(
        &self,
        columns: &ColumnSpec,
    ) -> Result<Vec<IndicatorRow>, MacroSignalError> {
        let label_idx = self.require_column(&columns.label)?;
        let value_idx = self.require_column(&columns.value)?;

        Ok(self
            .records
            .iter()
            .map(|record| {
                let cell = |i: usize| record.get(i).cloned().unwrap_or_default();
                IndicatorRow {
                    label: cell(label_idx),
                    raw_value: cell(value_idx),
                }
            })
            .collect())
    }

    fn require_column(&self, name: &str) -> Result<usize, MacroSignalError> {
        self.column_index(name).ok_or_else(|| {
            MacroSignalError::invalid_input(format!(
                "missing column '{}' (available: {})",
                name.trim(),
                self.headers.join(", ")
            ))
        })
    }
}
