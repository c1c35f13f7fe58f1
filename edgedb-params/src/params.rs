//! Resolved connection targets and parameters.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Substring identifying a path that already names a socket file.
pub const SOCKET_INFIX: &str = ".s.EDGEDB.";

/// One address the client may try, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionTarget {
    /// A UNIX domain socket file.
    UnixSocket {
        /// Full path of the socket file.
        path: PathBuf,
    },
    /// A TCP endpoint.
    Tcp {
        /// Host name or IP address.
        host: String,
        /// Port number.
        port: u16,
    },
}

impl ConnectionTarget {
    /// Build the target for one resolved host/port pair.
    ///
    /// Hosts starting with `/` are socket directories and get the socket
    /// file name for `port` appended, unless they already name a socket file.
    ///
    /// ```rust
    /// use edgedb_params::ConnectionTarget;
    ///
    /// let target = ConnectionTarget::new("/run/edgedb", 5656);
    /// assert_eq!(target.to_string(), "/run/edgedb/.s.EDGEDB.5656");
    ///
    /// let target = ConnectionTarget::new("db.local", 5656);
    /// assert_eq!(target.to_string(), "db.local:5656");
    /// ```
    pub fn new(host: &str, port: u16) -> Self {
        if host.starts_with('/') {
            let path = if host.contains(SOCKET_INFIX) {
                PathBuf::from(host)
            } else {
                Path::new(host).join(format!("{SOCKET_INFIX}{port}"))
            };
            Self::UnixSocket { path }
        } else {
            Self::Tcp {
                host: host.to_string(),
                port,
            }
        }
    }

    /// Check if this target is a UNIX socket.
    pub fn is_unix_socket(&self) -> bool {
        matches!(self, Self::UnixSocket { .. })
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnixSocket { path } => write!(f, "{}", path.display()),
            Self::Tcp { host, port } => write!(f, "{host}:{port}"),
        }
    }
}

/// Session parameters shared by every target.
#[derive(Clone, PartialEq)]
pub struct ConnectionParameters {
    /// User to authenticate as. Never empty.
    pub user: String,
    /// Password, if any.
    pub password: Option<String>,
    /// Database to connect to. Never empty.
    pub database: String,
    /// Connect timeout in seconds, passed through as given.
    pub connect_timeout: Option<f64>,
    /// Session settings forwarded to the server.
    pub server_settings: Option<HashMap<String, String>>,
}

impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("connect_timeout", &self.connect_timeout)
            .field("server_settings", &self.server_settings)
            .finish()
    }
}

/// Output of a resolution call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection {
    /// Targets in the order they should be tried.
    pub addrs: Vec<ConnectionTarget>,
    /// Session parameters.
    pub params: ConnectionParameters,
    /// Hosts to use when looking up stored credentials. `["localhost"]` when
    /// the targets are the platform defaults.
    pub auth_hosts: Vec<String>,
}
