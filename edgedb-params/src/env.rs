//! Environment access for parameter resolution.
//!
//! The resolver never reads process state directly. It asks an [`EnvSource`]
//! for variables, the login user and the platform, so tests can run against
//! a [`MapEnvSource`] without touching the real environment.

use std::collections::HashMap;

use tracing::trace;

/// Host (or comma-separated host list) variable.
pub const EDGEDB_HOST: &str = "EDGEDB_HOST";
/// Port (or comma-separated port list) variable.
pub const EDGEDB_PORT: &str = "EDGEDB_PORT";
/// User name variable.
pub const EDGEDB_USER: &str = "EDGEDB_USER";
/// Password variable.
pub const EDGEDB_PASSWORD: &str = "EDGEDB_PASSWORD";
/// Database name variable.
pub const EDGEDB_DATABASE: &str = "EDGEDB_DATABASE";

/// Variables consulted for the login name, in order.
const LOGIN_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Operating system family, which decides the default host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows: only `localhost` is tried by default.
    Windows,
    /// Everything else: local socket directories first.
    Unix,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

/// Source for environment variables and the OS identity.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Get an environment variable, treating an empty value as unset.
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Name of the user the current process runs as.
    ///
    /// Login variables come first, then the OS user database.
    fn current_user(&self) -> Option<String> {
        LOGIN_VARS
            .iter()
            .find_map(|var| self.get_non_empty(var))
            .or_else(os_login_name)
    }

    /// Platform family used to pick default hosts.
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

/// Name of the real user ID's entry in the user database.
#[cfg(unix)]
pub fn os_login_name() -> Option<String> {
    use nix::unistd::{User, getuid};

    match User::from_uid(getuid()) {
        Ok(user) => user.map(|u| u.name).filter(|name| !name.is_empty()),
        Err(e) => {
            trace!(error = %e, "User database lookup failed");
            None
        }
    }
}

/// Name of the real user ID's entry in the user database.
#[cfg(not(unix))]
pub fn os_login_name() -> Option<String> {
    None
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
    user: Option<String>,
    platform: Platform,
}

impl Default for MapEnvSource {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            user: None,
            platform: Platform::Unix,
        }
    }
}

impl MapEnvSource {
    /// Create an empty source on a Unix platform with no login user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Add multiple variables.
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars.extend(vars);
        self
    }

    /// Set the login user reported by [`EnvSource::current_user`].
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_user(&self) -> Option<String> {
        self.user.clone().filter(|u| !u.is_empty())
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}
