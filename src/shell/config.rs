//! Service configuration loaded from environment variables.
//!
//! - `ENTRIES_LISTEN_ADDR` - bind address (default: `0.0.0.0:8080`)
//! - `ENTRIES_SEED_PATH` - optional JSON array of raw entries to serve
//! - `RUST_LOG` - log filter, read by the tracing subscriber

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ENTRIES_LISTEN_ADDR is not a socket address: {0}")]
    InvalidListenAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("ENTRIES_LISTEN_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(raw_addr.clone()))?;

        let seed_path = lookup("ENTRIES_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            seed_path,
        })
    }
}
