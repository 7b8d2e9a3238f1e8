//! Remote CSV export adapter (requires the `http` feature).
//!
//! One GET per fetch. No retry and no caching: a failed request surfaces as
//! `MacroSignalError::Source` and the caller decides what to do.

use crate::adapters::csv_adapter::{decode_utf8, parse_csv};
use crate::domain::dataset::Dataset;
use crate::domain::error::MacroSignalError;
use crate::ports::data_port::DataPort;
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpAdapter {
    client: Client,
    url: String,
    delimiter: u8,
}

impl HttpAdapter {
    pub fn new(url: impl Into<String>) -> Result<Self, MacroSignalError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MacroSignalError::Source {
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            url: url.into(),
            delimiter: b',',
        })
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl DataPort for HttpAdapter {
    fn fetch_dataset(&self) -> Result<Dataset, MacroSignalError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| MacroSignalError::Source {
                reason: format!("request to {} failed: {}", self.url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MacroSignalError::Source {
                reason: format!("{} returned HTTP {}", self.url, status),
            });
        }

        let bytes = response.bytes().map_err(|e| MacroSignalError::Source {
            reason: format!("failed to read response body from {}: {}", self.url, e),
        })?;
        let body = decode_utf8(bytes.to_vec(), &self.url)?;

        parse_csv(&body, self.delimiter)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
