//! Report rendering port trait.

use crate::domain::engine::Analysis;
use crate::domain::error::MacroSignalError;

/// Turns a finished analysis into text for a console or a file.
pub trait ReportPort {
    fn render(&self, analysis: &Analysis) -> Result<String, MacroSignalError>;
}
