//! Call arguments for parameter resolution.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{ParamsError, ParamsResult};
use crate::hosts::HostSpec;
use crate::ports::PortSpec;

/// Explicitly supplied connection arguments.
///
/// Every field is optional. Set fields take precedence over the DSN, which
/// takes precedence over the environment and platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectArgs {
    /// Connection URI.
    pub dsn: Option<String>,
    /// Host(s) to connect to.
    pub host: Option<HostSpec>,
    /// Port(s) to connect to.
    pub port: Option<PortSpec>,
    /// User name.
    pub user: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Database name.
    pub database: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout: Option<f64>,
    /// Session settings forwarded to the server.
    pub server_settings: Option<HashMap<String, String>>,
}

impl ConnectArgs {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DSN.
    pub fn dsn(mut self, dsn: impl Into<String>) -> Self {
        self.dsn = Some(dsn.into());
        self
    }

    /// Set the host(s).
    pub fn host(mut self, host: impl Into<HostSpec>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port(s).
    pub fn port(mut self, port: impl Into<PortSpec>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the user name.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the connect timeout in seconds.
    pub fn connect_timeout(mut self, seconds: f64) -> Self {
        self.connect_timeout = Some(seconds);
        self
    }

    /// Add one server setting.
    pub fn server_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.server_settings
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace all server settings.
    pub fn server_settings(mut self, settings: HashMap<String, String>) -> Self {
        self.server_settings = Some(settings);
        self
    }
}

/// Convert an untyped TOML value into server settings.
///
/// The value must be a table whose values are all strings.
pub fn server_settings_from_toml(value: &toml::Value) -> ParamsResult<HashMap<String, String>> {
    let table = value.as_table().ok_or_else(|| {
        ParamsError::server_settings(format!("expected a table, got {}", value.type_str()))
    })?;

    table
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(s) => Ok((key.clone(), s.to_string())),
            None => Err(ParamsError::server_settings(format!(
                "value of {key:?} is a {}, not a string",
                value.type_str()
            ))),
        })
        .collect()
}
