//! Connection settings loaded from a TOML document.
//!
//! ```toml
//! [connection]
//! dsn = "edgedb://alice@db.internal/app"
//! command_timeout = 30
//!
//! [connection.server_settings]
//! application_name = "reporting"
//! ```
//!
//! Every key of `[connection]` is optional and mirrors [`ConnectArgs`].

use std::path::Path;

use edgedb_params::{
    ConnectArgs, EnvSource, HostSpec, PortSpec, StdEnvSource, server_settings_from_toml,
};
use serde::Deserialize;
use tracing::info;

use crate::connect::{ConnectPlan, parse_connect_arguments_with};
use crate::error::{ConnectError, ConnectResult};
use crate::timeout::CommandTimeout;

/// Connection arguments plus the client timeout, as read from a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectConfig {
    /// Arguments for parameter resolution.
    pub args: ConnectArgs,
    /// Unvalidated command timeout.
    pub command_timeout: Option<CommandTimeout>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Document {
    connection: RawConnection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConnection {
    dsn: Option<String>,
    host: Option<HostSpec>,
    port: Option<PortSpec>,
    user: Option<String>,
    password: Option<String>,
    database: Option<String>,
    connect_timeout: Option<f64>,
    command_timeout: Option<CommandTimeout>,
    server_settings: Option<toml::Value>,
}

impl ConnectConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConnectResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConnectError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "Connection configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> ConnectResult<Self> {
        let Document { connection: raw } = toml::from_str(content)?;

        let server_settings = raw
            .server_settings
            .as_ref()
            .map(server_settings_from_toml)
            .transpose()?;

        Ok(Self {
            args: ConnectArgs {
                dsn: raw.dsn,
                host: raw.host,
                port: raw.port,
                user: raw.user,
                password: raw.password,
                database: raw.database,
                connect_timeout: raw.connect_timeout,
                server_settings,
            },
            command_timeout: raw.command_timeout,
        })
    }

    /// Resolve against the process environment.
    pub fn resolve(self) -> ConnectResult<ConnectPlan> {
        self.resolve_with(&StdEnvSource)
    }

    /// Resolve against the given environment.
    pub fn resolve_with(self, env: &impl EnvSource) -> ConnectResult<ConnectPlan> {
        parse_connect_arguments_with(self.args, self.command_timeout, env)
    }
}
