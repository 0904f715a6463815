use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Request header the trusted fronting layer uses to convey the caller
    /// identity (40 hex characters, optional `0x` prefix).
    pub identity_header: String,
    /// Capacity of per-subscriber notice channels.
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:7411".parse().unwrap(),
            identity_header: "x-tally-caller".to_string(),
            channel_capacity: 1024,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults.
    pub fn from_toml_file(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
