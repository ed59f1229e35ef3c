//! Server configuration, read from the environment.
//!
//! - `MATERIALS_ADDR`: full socket address to bind (e.g. `127.0.0.1:9000`)
//! - `PORT`: port to bind on all interfaces, used when `MATERIALS_ADDR` is unset
//!
//! With neither set the server binds `0.0.0.0:8080`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid MATERIALS_ADDR '{0}': expected host:port")]
    InvalidAddr(String),

    #[error("invalid PORT '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup("MATERIALS_ADDR") {
            let addr = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?;
            return Ok(Self { addr });
        }

        if let Some(raw) = lookup("PORT") {
            let port: u16 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
            return Ok(Self {
                addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            });
        }

        Ok(Self::default())
    }
}
