//! Value normalization.
//!
//! Raw cells use a comma as decimal separator ("3,5"). Every comma becomes
//! a period before parsing; anything that still is not a number is recorded
//! as `Reading::Missing`. Normalization never fails.

use crate::domain::dataset::IndicatorRow;

/// A parsed indicator value, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Value(f64),
    Missing,
}

impl Reading {
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Reading::Missing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub label: String,
    pub value: Reading,
}

/// Parses one raw cell.
///
/// `"3,5"` and `"3.5"` both read 3.5. Empty text, words, `"1,2,3"` and
/// `"NaN"` read `Missing`; `"inf"` and `"-inf"` are values.
pub fn parse_reading(raw: &str) -> Reading {
    let text = raw.trim().replace(',', ".");
    match text.parse::<f64>() {
        Ok(v) if !v.is_nan() => Reading::Value(v),
        _ => Reading::Missing,
    }
}

pub fn normalize_row(row: &IndicatorRow) -> NormalizedRow {
    NormalizedRow {
        label: row.label.trim().to_string(),
        value: parse_reading(&row.raw_value),
    }
}

/// Same order and length as the input.
pub fn normalize(rows: &[IndicatorRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize_row).collect()
}
