//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "MRT_DATABASE_URL";

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "MRT_LISTEN_ADDR";

/// Environment variable naming an optional station/line seed file.
pub const SEED_FILE_VAR: &str = "MRT_SEED_FILE";

const DEFAULT_DATABASE_URL: &str = "sqlite://mrt.db";
const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    3000,
);

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address ({value}): {source}")]
    InvalidListenAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },
}

/// Settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite URL, e.g. `sqlite://mrt.db` or `sqlite::memory:`.
    pub database_url: String,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// JSON file of stations and lines loaded at startup, if set.
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = get(DATABASE_URL_VAR) {
            config.database_url = url;
        }

        if let Some(addr) = get(LISTEN_ADDR_VAR) {
            config.listen_addr = addr
                .parse()
                .map_err(|source| ConfigError::InvalidListenAddr {
                    var: LISTEN_ADDR_VAR,
                    value: addr.clone(),
                    source,
                })?;
        }

        config.seed_file = get(SEED_FILE_VAR).map(PathBuf::from);

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR,
            seed_file: None,
        }
    }
}
