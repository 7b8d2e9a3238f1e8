//! Concrete adapter implementations for ports.

#[cfg(feature = "http")]
pub mod http_adapter;
pub mod csv_adapter;
pub mod csv_report;
pub mod file_config_adapter;
pub mod text_report;
