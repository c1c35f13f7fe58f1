//! Error types for the client-facing entry point.

use edgedb_params::ParamsError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for connection argument parsing.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Errors that can occur while turning connection arguments into targets.
#[derive(Error, Debug, Diagnostic)]
pub enum ConnectError {
    /// Parameter resolution failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Params(#[from] ParamsError),

    /// `command_timeout` is not a positive number.
    #[error("invalid command_timeout value: expected greater than 0 float (got {0})")]
    #[diagnostic(code(edgedb::connect::command_timeout))]
    InvalidCommandTimeout(String),

    /// A configuration document could not be read.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(edgedb::connect::io))]
    Io {
        /// Path of the document.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is not valid TOML for connection arguments.
    #[error("failed to parse configuration: {0}")]
    #[diagnostic(code(edgedb::connect::toml))]
    Toml(#[from] toml::de::Error),
}

impl ConnectError {
    /// Check if this is a configuration (interface usage) error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Params(e) if e.is_config_error())
    }

    /// Check if this is a malformed-value error.
    pub fn is_value_error(&self) -> bool {
        match self {
            Self::Params(e) => e.is_value_error(),
            Self::InvalidCommandTimeout(_) => true,
            Self::Io { .. } | Self::Toml(_) => false,
        }
    }
}
