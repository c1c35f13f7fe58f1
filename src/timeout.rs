//! `command_timeout` validation.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConnectError, ConnectResult};

/// A `command_timeout` value as supplied by the caller, before validation.
///
/// Booleans are accepted here only so they can be rejected with a proper
/// message; they are never a valid timeout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CommandTimeout {
    /// A boolean, always rejected.
    Bool(bool),
    /// Whole seconds.
    Int(i64),
    /// Seconds.
    Float(f64),
    /// Seconds written as text.
    Text(String),
}

impl CommandTimeout {
    /// Validate and convert to seconds.
    ///
    /// ```rust
    /// use edgedb_connect::CommandTimeout;
    ///
    /// assert_eq!(CommandTimeout::from(1.5).seconds().unwrap(), 1.5);
    /// assert_eq!(CommandTimeout::from("10").seconds().unwrap(), 10.0);
    /// assert!(CommandTimeout::from(true).seconds().is_err());
    /// assert!(CommandTimeout::from(0).seconds().is_err());
    /// ```
    pub fn seconds(&self) -> ConnectResult<f64> {
        let seconds = match self {
            Self::Bool(_) => None,
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };

        // NaN fails the comparison too.
        match seconds {
            Some(s) if s > 0.0 => Ok(s),
            _ => Err(ConnectError::InvalidCommandTimeout(self.to_string())),
        }
    }
}

impl fmt::Display for CommandTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for CommandTimeout {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CommandTimeout {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CommandTimeout {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CommandTimeout {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Duration> for CommandTimeout {
    fn from(value: Duration) -> Self {
        Self::Float(value.as_secs_f64())
    }
}

/// Client-side settings that do not travel to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClientConfiguration {
    /// Per-command timeout in seconds; strictly positive when set.
    pub command_timeout: Option<f64>,
}

impl ClientConfiguration {
    /// Build a configuration, validating the timeout.
    pub fn new(command_timeout: Option<&CommandTimeout>) -> ConnectResult<Self> {
        Ok(Self {
            command_timeout: command_timeout.map(CommandTimeout::seconds).transpose()?,
        })
    }

    /// The command timeout as a [`Duration`].
    ///
    /// Returns `None` when unset or too large to represent.
    pub fn command_timeout_duration(&self) -> Option<Duration> {
        self.command_timeout
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
    }
}
