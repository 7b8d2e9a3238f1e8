//! Data source port trait.

use crate::domain::dataset::Dataset;
use crate::domain::error::MacroSignalError;

/// Supplies one snapshot of the indicator table per call.
pub trait DataPort {
    fn fetch_dataset(&self) -> Result<Dataset, MacroSignalError>;

    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
