//! Server configuration
//!
//! Every setting has a default, can be overridden through the environment
//! (`NRTR_HOST`, `NRTR_PORT`, `NRTR_DEBUG`, `NRTR_DATA_DIR`), and the
//! environment in turn loses to an explicit command line flag.

use std::env;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub data_dir: PathBuf,
}

impl ServerConfig {
    pub fn load() -> ServerResult<Self> {
        Ok(Self {
            host: try_load("NRTR_HOST", DEFAULT_HOST)?,
            port: try_load("NRTR_PORT", DEFAULT_PORT)?,
            debug: debug_enabled(),
            data_dir: PathBuf::from(
                env::var("NRTR_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.parse().expect("default host is a valid address"),
            port: DEFAULT_PORT.parse().expect("default port is a valid u16"),
            debug: false,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

/// Debug toggle, checked independently of the full config so logging can be
/// initialized before the config is loaded.
pub fn debug_enabled() -> bool {
    env::var("NRTR_DEBUG").map(|v| parse_bool(&v)).unwrap_or(false)
}

fn try_load<T: FromStr>(key: &str, default: &str) -> ServerResult<T>
where
    T::Err: Display,
{
    let raw = match env::var(key) {
        Ok(value) => value,
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    };

    raw.parse()
        .map_err(|e| ServerError::config(format!("Invalid {key} value {raw:?}: {e}")))
}

fn parse_bool(raw: &str) -> bool {
    !matches!(raw, "" | "0" | "false" | "False")
}
