//! Host specifications and the host-list parser.

use serde::Deserialize;
use tracing::trace;

use crate::env::EnvSource;
use crate::error::ParamsResult;
use crate::ports::{PortSpec, parse_port};

/// Hosts given by the caller.
///
/// A single host is taken verbatim; it is never split on commas. Comma
/// separated lists only come from the DSN or the environment, and go
/// through [`parse_hostlist`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HostSpec {
    /// One host name or socket directory.
    Single(String),
    /// Several hosts, tried in order.
    List(Vec<String>),
}

impl HostSpec {
    /// An empty host string or list counts as unset.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(host) => host.is_empty(),
            Self::List(hosts) => hosts.is_empty(),
        }
    }

    /// Normalize to a list.
    pub fn into_hosts(self) -> Vec<String> {
        match self {
            Self::Single(host) => vec![host],
            Self::List(hosts) => hosts,
        }
    }
}

impl From<&str> for HostSpec {
    fn from(host: &str) -> Self {
        Self::Single(host.to_string())
    }
}

impl From<String> for HostSpec {
    fn from(host: String) -> Self {
        Self::Single(host)
    }
}

impl From<Vec<String>> for HostSpec {
    fn from(hosts: Vec<String>) -> Self {
        Self::List(hosts)
    }
}

impl<const N: usize> From<[&str; N]> for HostSpec {
    fn from(hosts: [&str; N]) -> Self {
        Self::List(hosts.iter().map(|h| (*h).to_string()).collect())
    }
}

/// Split a comma-separated host list into hosts and per-host ports.
///
/// Each entry may carry its own port as `host:port`. Entries without one take
/// the port at the same position of `port` (broadcast or validated against
/// the host count). When `port` is unset, the default comes from
/// `EDGEDB_PORT` and then [`DEFAULT_PORT`](crate::DEFAULT_PORT).
///
/// ```rust
/// use edgedb_params::{MapEnvSource, PortSpec, parse_hostlist};
///
/// let env = MapEnvSource::new();
/// let (hosts, ports) = parse_hostlist("a:1,b,c:3", None, &env).unwrap();
/// assert_eq!(hosts, ["a", "b", "c"]);
/// assert_eq!(ports, [1, 5656, 3]);
///
/// let (_, ports) = parse_hostlist("a,b", Some(&PortSpec::List(vec![7, 8])), &env).unwrap();
/// assert_eq!(ports, [7, 8]);
/// ```
pub fn parse_hostlist(
    hostlist: &str,
    port: Option<&PortSpec>,
    env: &impl EnvSource,
) -> ParamsResult<(Vec<String>, Vec<u16>)> {
    let hostspecs: Vec<&str> = hostlist.split(',').collect();

    let default_ports = match port.filter(|p| !p.is_empty()) {
        Some(port) => port.for_hosts(&hostspecs)?,
        None => PortSpec::from_env(env)?.for_hosts(&hostspecs)?,
    };

    let mut hosts = Vec::with_capacity(hostspecs.len());
    let mut ports = Vec::with_capacity(hostspecs.len());

    for (hostspec, default_port) in hostspecs.into_iter().zip(default_ports) {
        let (addr, inline_port) = match hostspec.split_once(':') {
            Some((addr, inline)) => (addr, inline),
            None => (hostspec, ""),
        };

        hosts.push(addr.to_string());
        if inline_port.is_empty() {
            ports.push(default_port);
        } else {
            ports.push(parse_port(inline_port, "host list")?);
        }
    }

    trace!(hosts = hosts.len(), ?ports, "Host list parsed");
    Ok((hosts, ports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EDGEDB_PORT, MapEnvSource};
    use crate::error::ParamsError;
    use crate::ports::DEFAULT_PORT;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_port_broadcast() {
        let env = MapEnvSource::new();
        let (hosts, ports) = parse_hostlist("a,b,c", None, &env).unwrap();
        assert_eq!(hosts, vec!["a", "b", "c"]);
        assert_eq!(ports, vec![DEFAULT_PORT; 3]);
    }

    #[test]
    fn test_single_host() {
        let env = MapEnvSource::new();
        let (hosts, ports) = parse_hostlist("db.example.com:1234", None, &env).unwrap();
        assert_eq!(hosts, vec!["db.example.com"]);
        assert_eq!(ports, vec![1234]);
    }

    #[test]
    fn test_inline_ports_override_default() {
        let env = MapEnvSource::new();
        let (hosts, ports) = parse_hostlist("a:1,b,c:3", None, &env).unwrap();
        assert_eq!(hosts, vec!["a", "b", "c"]);
        assert_eq!(ports, vec![1, DEFAULT_PORT, 3]);
    }

    #[test]
    fn test_env_port_scalar() {
        let env = MapEnvSource::new().set(EDGEDB_PORT, "6000");
        let (_, ports) = parse_hostlist("a,b:2", None, &env).unwrap();
        assert_eq!(ports, vec![6000, 2]);
    }

    #[test]
    fn test_env_port_list() {
        let env = MapEnvSource::new().set(EDGEDB_PORT, "10,20");
        let (_, ports) = parse_hostlist("a,b", None, &env).unwrap();
        assert_eq!(ports, vec![10, 20]);

        let err = parse_hostlist("a,b,c", None, &env).unwrap_err();
        assert!(matches!(
            err,
            ParamsError::PortCountMismatch { ports: 2, hosts: 3 }
        ));
    }

    #[test]
    fn test_explicit_port_skips_env() {
        let env = MapEnvSource::new().set(EDGEDB_PORT, "not-a-port");
        let (_, ports) = parse_hostlist("a,b:9", Some(&PortSpec::Single(42)), &env).unwrap();
        assert_eq!(ports, vec![42, 9]);
    }

    #[test]
    fn test_explicit_port_list_mismatch() {
        let env = MapEnvSource::new();
        let result = parse_hostlist("a,b", Some(&PortSpec::List(vec![1])), &env);
        assert!(matches!(
            result,
            Err(ParamsError::PortCountMismatch { ports: 1, hosts: 2 })
        ));
    }

    #[test]
    fn test_bad_inline_port() {
        let env = MapEnvSource::new();
        let err = parse_hostlist("a:http", None, &env).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidPort { .. }));
    }

    #[test]
    fn test_host_spec() {
        assert!(HostSpec::from("").is_empty());
        assert!(HostSpec::List(vec![]).is_empty());
        assert_eq!(HostSpec::from("a,b").into_hosts(), vec!["a,b"]);
        assert_eq!(HostSpec::from(["a", "b"]).into_hosts(), vec!["a", "b"]);
    }
}
