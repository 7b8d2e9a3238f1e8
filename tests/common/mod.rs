#![allow(dead_code)]

use macrosignal::domain::dataset::{Dataset, IndicatorRow};
use macrosignal::domain::error::MacroSignalError;
use macrosignal::ports::data_port::DataPort;

pub struct MockDataPort {
    pub dataset: Option<Dataset>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            dataset: None,
            error: None,
        }
    }

    pub fn with_rows(mut self, pairs: &[(&str, &str)]) -> Self {
        self.dataset = Some(sheet(pairs));
        self
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_dataset(&self) -> Result<Dataset, MacroSignalError> {
        if let Some(reason) = &self.error {
            return Err(MacroSignalError::Source {
                reason: reason.clone(),
            });
        }
        Ok(self.dataset.clone().unwrap_or_default())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

/// Dataset with the default `Indicateur`/`Valeur` header.
pub fn sheet(pairs: &[(&str, &str)]) -> Dataset {
    Dataset::new(
        vec!["Indicateur".to_string(), "Valeur".to_string()],
        pairs
            .iter()
            .map(|(label, value)| vec![label.to_string(), value.to_string()])
            .collect(),
    )
}

pub fn rows(pairs: &[(&str, &str)]) -> Vec<IndicatorRow> {
    pairs
        .iter()
        .map(|(label, value)| IndicatorRow::new(*label, *value))
        .collect()
}

pub const SCENARIO_A: &[(&str, &str)] = &[
    ("PIB", "3,5"),
    ("Inflation", "2,0"),
    ("Taux Directeur", "2,5"),
    ("Chômage", "13,0"),
];

pub const SCENARIO_B: &[(&str, &str)] = &[("PIB", "1,0"), ("Inflation", "5,0")];

pub const SCENARIO_C: &[(&str, &str)] = &[("PIB", "3,0"), ("Taux Directeur", "4,0")];
