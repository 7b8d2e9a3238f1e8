//! Core domain types and logic.

pub mod dataset;
pub mod normalize;
pub mod category;
pub mod rules;
pub mod signal;
pub mod engine;
pub mod config_validation;
pub mod error;
