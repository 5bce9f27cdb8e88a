use egs_relocate_lib::RelocateError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A relocation operation failed
    #[error("{0}")]
    Relocate(#[from] RelocateError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// What the operator can do about the error, if anything.
    pub(crate) fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Relocate(e) => e.hint(),
            _ => None,
        }
    }
}
