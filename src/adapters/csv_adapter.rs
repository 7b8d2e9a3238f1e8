//! CSV data adapter for local files and stdin.

use crate::domain::dataset::Dataset;
use crate::domain::error::MacroSignalError;
use crate::ports::data_port::DataPort;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    File(PathBuf),
    Stdin,
}

pub struct CsvAdapter {
    source: CsvSource,
    delimiter: u8,
}

impl CsvAdapter {
    pub fn new(source: CsvSource) -> Self {
        Self {
            source,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn read_content(&self) -> Result<String, MacroSignalError> {
        let bytes = match &self.source {
            CsvSource::File(path) => fs::read(path).map_err(|e| MacroSignalError::Source {
                reason: format!("failed to read {}: {}", path.display(), e),
            })?,
            CsvSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| MacroSignalError::Source {
                        reason: format!("failed to read stdin: {}", e),
                    })?;
                bytes
            }
        };
        decode_utf8(bytes, &self.describe())
    }
}

impl DataPort for CsvAdapter {
    fn fetch_dataset(&self) -> Result<Dataset, MacroSignalError> {
        let content = self.read_content()?;
        parse_csv(&content, self.delimiter)
    }

    fn describe(&self) -> String {
        match &self.source {
            CsvSource::File(path) => path.display().to_string(),
            CsvSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Invalid UTF-8 in bytes that were read successfully is `InvalidInput`.
pub fn decode_utf8(bytes: Vec<u8>, origin: &str) -> Result<String, MacroSignalError> {
    String::from_utf8(bytes).map_err(|e| {
        MacroSignalError::invalid_input(format!(
            "{} is not valid UTF-8 (byte offset {})",
            origin,
            e.utf8_error().valid_up_to()
        ))
    })
}

/// Parses CSV text whose first record is the header row.
///
/// Empty text yields an empty dataset (no headers, no records). Records may
/// be shorter or longer than the header.
pub fn parse_csv(content: &str, delimiter: u8) -> Result<Dataset, MacroSignalError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| MacroSignalError::invalid_input(format!("CSV header error: {}", e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result
            .map_err(|e| MacroSignalError::invalid_input(format!("CSV parse error: {}", e)))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::new(headers, records))
}
