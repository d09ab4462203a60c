//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST: {value}")]
    InvalidHost { value: String },
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_host(std::env::var("HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_HOST);
    value
        .parse()
        .map_err(|_| ConfigError::InvalidHost { value: value.to_owned() })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
