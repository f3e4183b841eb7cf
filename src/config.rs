// src/config.rs
//! Bind address. The host (`DENTBOT_HOST`) is the only setting; the port is
//! always 5000.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServiceError;

pub const PORT: u16 = 5000;
pub const HOST_ENV: &str = "DENTBOT_HOST";
pub const DEFAULT_LOG_FILTER: &str = "dentbot_backend=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: PORT,
        }
    }
}

impl Config {
    /// Reads `DENTBOT_HOST`. The port is not configurable.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_host(std::env::var(HOST_ENV).ok().as_deref())
    }

    pub fn from_host(host: Option<&str>) -> Result<Self, ServiceError> {
        let mut config = Self::default();
        if let Some(value) = host.map(str::trim).filter(|v| !v.is_empty()) {
            config.host = value.parse().map_err(|source| ServiceError::InvalidHost {
                value: value.to_string(),
                source,
            })?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
