//! Domain error types.
//!
//! Per-cell parse failures and unclassified labels are not errors: they are
//! recorded on the row as `Reading::Missing` and `Category::Unknown`.
//! Everything here aborts the whole run.

/// Top-level error type for macrosignal.
#[derive(Debug, thiserror::Error)]
pub enum MacroSignalError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("data source error: {reason}")]
    Source { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MacroSignalError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        MacroSignalError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Process exit status for this error kind.
    pub fn exit_status(&self) -> u8 {
        match self {
            MacroSignalError::Io(_) => 1,
            MacroSignalError::ConfigParse { .. }
            | MacroSignalError::ConfigMissing { .. }
            | MacroSignalError::ConfigInvalid { .. } => 2,
            MacroSignalError::Source { .. } => 3,
            MacroSignalError::InvalidInput { .. } => 4,
        }
    }
}

impl From<&MacroSignalError> for std::process::ExitCode {
    fn from(err: &MacroSignalError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
