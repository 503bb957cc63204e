//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the network document to load.
pub const NETWORK_DATA_VAR: &str = "NETWORK_DATA";

/// Environment variable holding the address to listen on.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// Error returned when the environment holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The bind address did not parse
    #[error("invalid BIND_ADDR {value:?}: expected host:port")]
    InvalidBindAddr { value: String },
}

/// Configuration parameters for the routing server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Network document to load at startup.
    /// With no document the server starts with an empty network.
    pub network_data: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, network_data: Option<PathBuf>) -> Self {
        Self {
            bind_addr,
            network_data,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(BIND_ADDR_VAR) {
            let parsed = value.trim().parse::<SocketAddr>();
            config.bind_addr = parsed.map_err(|_| ConfigError::InvalidBindAddr { value })?;
        }

        if let Some(value) = get(NETWORK_DATA_VAR) {
            config.network_data = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_data: None,
        }
    }
}
