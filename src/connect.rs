//! Client-facing entry point.

use edgedb_params::{
    ConnectArgs, ConnectionParameters, ConnectionTarget, EnvSource, StdEnvSource, resolve_with,
};
use tracing::debug;

use crate::error::ConnectResult;
use crate::timeout::{ClientConfiguration, CommandTimeout};

/// Everything a client needs to open a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectPlan {
    /// Targets in the order they should be tried.
    pub addrs: Vec<ConnectionTarget>,
    /// Session parameters.
    pub params: ConnectionParameters,
    /// Client-side settings.
    pub config: ClientConfiguration,
    /// Hosts to use when looking up stored credentials.
    pub auth_hosts: Vec<String>,
}

/// Parse connection arguments against the process environment.
pub fn parse_connect_arguments(
    args: ConnectArgs,
    command_timeout: Option<CommandTimeout>,
) -> ConnectResult<ConnectPlan> {
    parse_connect_arguments_with(args, command_timeout, &StdEnvSource)
}

/// Parse connection arguments against the given environment.
///
/// `command_timeout` is validated before anything else is resolved.
///
/// ```rust
/// use edgedb_connect::{CommandTimeout, ConnectArgs, parse_connect_arguments_with};
/// use edgedb_params::MapEnvSource;
///
/// let env = MapEnvSource::new().with_user("alice");
/// let plan = parse_connect_arguments_with(
///     ConnectArgs::new().dsn("edgedb://db.local/app"),
///     Some(CommandTimeout::from(30)),
///     &env,
/// )
/// .unwrap();
///
/// assert_eq!(plan.addrs[0].to_string(), "db.local:5656");
/// assert_eq!(plan.params.database, "app");
/// assert_eq!(plan.config.command_timeout, Some(30.0));
///
/// let err = parse_connect_arguments_with(ConnectArgs::new(), Some(true.into()), &env);
/// assert!(err.is_err());
/// ```
pub fn parse_connect_arguments_with(
    args: ConnectArgs,
    command_timeout: Option<CommandTimeout>,
    env: &impl EnvSource,
) -> ConnectResult<ConnectPlan> {
    let config = ClientConfiguration::new(command_timeout.as_ref())?;
    let resolved = resolve_with(args, env)?;

    debug!(
        targets = resolved.addrs.len(),
        command_timeout = ?config.command_timeout,
        "Connect arguments parsed"
    );

    Ok(ConnectPlan {
        addrs: resolved.addrs,
        params: resolved.params,
        config,
        auth_hosts: resolved.auth_hosts,
    })
}
