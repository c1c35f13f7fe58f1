//! Port specifications and the host/port parity check.

use serde::Deserialize;
use tracing::trace;

use crate::env::{EDGEDB_PORT, EnvSource};
use crate::error::{ParamsError, ParamsResult};

/// Port used when neither the caller, the DSN nor the environment names one.
pub const DEFAULT_PORT: u16 = 5656;

/// A port value that applies either to every host or to each host in turn.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    /// One port shared by all hosts.
    Single(u16),
    /// One port per host, in host order.
    List(Vec<u16>),
}

impl PortSpec {
    /// Parse a port spec: a single number or a comma-separated list.
    ///
    /// `source_name` names the origin of `text` in error messages.
    pub fn parse(text: &str, source_name: &str) -> ParamsResult<Self> {
        if text.contains(',') {
            text.split(',')
                .map(|p| parse_port(p, source_name))
                .collect::<ParamsResult<Vec<_>>>()
                .map(Self::List)
        } else {
            parse_port(text, source_name).map(Self::Single)
        }
    }

    /// Parse a comma-separated list, always yielding [`PortSpec::List`].
    pub fn parse_list(text: &str, source_name: &str) -> ParamsResult<Self> {
        text.split(',')
            .map(|p| parse_port(p, source_name))
            .collect::<ParamsResult<Vec<_>>>()
            .map(Self::List)
    }

    /// The default port spec: `EDGEDB_PORT` if set, else [`DEFAULT_PORT`].
    pub fn from_env(env: &impl EnvSource) -> ParamsResult<Self> {
        match env.get_non_empty(EDGEDB_PORT) {
            Some(spec) => {
                trace!(spec = %spec, "Port taken from EDGEDB_PORT");
                Self::parse(&spec, EDGEDB_PORT)
            }
            None => Ok(Self::Single(DEFAULT_PORT)),
        }
    }

    /// An empty list carries no port at all and counts as unset.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::List(ports) if ports.is_empty())
    }

    /// Expand to exactly one port per host.
    pub fn for_hosts<S: AsRef<str>>(&self, hosts: &[S]) -> ParamsResult<Vec<u16>> {
        validate_ports(hosts, self)
    }
}

impl From<u16> for PortSpec {
    fn from(port: u16) -> Self {
        Self::Single(port)
    }
}

impl From<Vec<u16>> for PortSpec {
    fn from(ports: Vec<u16>) -> Self {
        Self::List(ports)
    }
}

impl<const N: usize> From<[u16; N]> for PortSpec {
    fn from(ports: [u16; N]) -> Self {
        Self::List(ports.to_vec())
    }
}

/// Match a port spec against a host list.
///
/// A single port is repeated once per host. A list must hold exactly one
/// entry per host; anything else is an error naming both counts.
pub fn validate_ports<S: AsRef<str>>(hosts: &[S], port: &PortSpec) -> ParamsResult<Vec<u16>> {
    match port {
        PortSpec::Single(p) => Ok(vec![*p; hosts.len()]),
        PortSpec::List(ports) if ports.len() == hosts.len() => Ok(ports.clone()),
        PortSpec::List(ports) => Err(ParamsError::PortCountMismatch {
            ports: ports.len(),
            hosts: hosts.len(),
        }),
    }
}

pub(crate) fn parse_port(text: &str, source_name: &str) -> ParamsResult<u16> {
    text.trim()
        .parse()
        .map_err(|_| ParamsError::port(text, source_name))
}
