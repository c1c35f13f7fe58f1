//! Error types for connection parameter resolution.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for parameter resolution.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// Errors that can occur while resolving connection parameters.
///
/// Every variant is fatal to the resolution call. Variants fall into two
/// classes: configuration errors (the inputs cannot be reconciled) and value
/// errors (an individual input is malformed). See [`ParamsError::is_config_error`]
/// and [`ParamsError::is_value_error`].
#[derive(Error, Debug, Diagnostic)]
pub enum ParamsError {
    /// The DSN does not use the expected scheme.
    #[error("invalid DSN: scheme is expected to be \"{expected}\", got {got:?}")]
    #[diagnostic(code(edgedb::params::scheme))]
    InvalidScheme {
        /// The required scheme.
        expected: &'static str,
        /// The scheme found in the DSN.
        got: String,
    },

    /// The DSN could not be split into its components.
    #[error("invalid DSN: {0}")]
    #[diagnostic(code(edgedb::params::dsn))]
    InvalidDsn(String),

    /// A list of ports does not line up with the list of hosts.
    #[error("could not match {ports} port numbers to {hosts} hosts")]
    #[diagnostic(code(edgedb::params::port_count))]
    PortCountMismatch {
        /// Number of ports supplied.
        ports: usize,
        /// Number of hosts resolved.
        hosts: usize,
    },

    /// No user name could be determined.
    #[error("could not determine user name to connect with")]
    #[diagnostic(
        code(edgedb::params::user),
        help("pass a user explicitly, put one in the DSN, or set EDGEDB_USER")
    )]
    MissingUser,

    /// No database name could be determined.
    #[error("could not determine database name to connect to")]
    #[diagnostic(
        code(edgedb::params::database),
        help("pass a database explicitly, put one in the DSN, or set EDGEDB_DATABASE")
    )]
    MissingDatabase,

    /// A port value is not a valid port number.
    #[error("invalid port {value:?} in {source_name}")]
    #[diagnostic(code(edgedb::params::port))]
    InvalidPort {
        /// The offending text.
        value: String,
        /// Where the value came from (DSN, environment variable, ...).
        source_name: String,
    },

    /// The DSN query string is malformed.
    #[error("bad query field: {0:?}")]
    #[diagnostic(code(edgedb::params::query))]
    InvalidQuery(String),

    /// `server_settings` is not a string-to-string mapping.
    #[error("server_settings is expected to be a mapping of strings to strings: {0}")]
    #[diagnostic(code(edgedb::params::server_settings))]
    InvalidServerSettings(String),

    /// Resolution produced no address at all.
    #[error("could not determine the database address to connect to")]
    #[diagnostic(code(edgedb::params::address))]
    NoAddresses,
}

impl ParamsError {
    /// Create a DSN error.
    pub fn dsn(message: impl Into<String>) -> Self {
        Self::InvalidDsn(message.into())
    }

    /// Create an invalid port error.
    pub fn port(value: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::InvalidPort {
            value: value.into(),
            source_name: source_name.into(),
        }
    }

    /// Create a server settings error.
    pub fn server_settings(message: impl Into<String>) -> Self {
        Self::InvalidServerSettings(message.into())
    }

    /// Check if this is a configuration (interface usage) error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidScheme { .. }
                | Self::PortCountMismatch { .. }
                | Self::MissingUser
                | Self::MissingDatabase
        )
    }

    /// Check if this is a malformed-value error.
    pub fn is_value_error(&self) -> bool {
        !self.is_config_error()
    }
}
