// File: crates/tally-web/src/config.rs
// Summary: Environment-driven configuration (domain, store location, theme, bind address).

use std::net::SocketAddr;
use std::path::PathBuf;

use tally_core::domain::UnknownDomain;
use tally_core::theme::{self, Theme};
use tally_core::Domain;
use thiserror::Error;

pub const ENV_DOMAIN: &str = "TALLY_DOMAIN";
pub const ENV_DB: &str = "TALLY_DB";
pub const ENV_THEME: &str = "TALLY_THEME";
pub const ENV_ADDR: &str = "TALLY_ADDR";
pub const ENV_PORT: &str = "PORT";

const DEFAULT_DB: &str = "tally.db";
const DEFAULT_ADDR: &str = "127.0.0.1:5000";
/// `TALLY_DB` value selecting the non-persistent store.
const MEMORY_DB: &str = ":memory:";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Domain(#[from] UnknownDomain),

    #[error("unknown theme {0:?}")]
    Theme(String),

    #[error("invalid TALLY_ADDR {value:?}: {source}")]
    Addr { value: String, source: std::net::AddrParseError },

    #[error("invalid PORT {value:?}: {source}")]
    Port { value: String, source: std::num::ParseIntError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub domain: Domain,
    pub store: StoreLocation,
    pub theme: Theme,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let domain = match get(ENV_DOMAIN) {
            Some(name) => name.parse::<Domain>()?,
            None => Domain::default(),
        };

        let store = match get(ENV_DB).as_deref() {
            Some(MEMORY_DB) => StoreLocation::Memory,
            Some(path) => StoreLocation::File(PathBuf::from(path)),
            None => StoreLocation::File(PathBuf::from(DEFAULT_DB)),
        };

        let theme = match get(ENV_THEME) {
            Some(name) => theme::by_name(&name).ok_or(ConfigError::Theme(name))?,
            None => Theme::default(),
        };

        let raw_addr = get(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let mut addr: SocketAddr = raw_addr
            .parse()
            .map_err(|source| ConfigError::Addr { value: raw_addr.clone(), source })?;
        if let Some(port) = get(ENV_PORT) {
            let p = port
                .parse::<u16>()
                .map_err(|source| ConfigError::Port { value: port.clone(), source })?;
            addr.set_port(p);
        }

        Ok(Self { domain, store, theme, addr })
    }
}
