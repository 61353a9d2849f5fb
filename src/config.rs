//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").filter(|v| !v.trim().is_empty());
        let bind_addr = bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: bind_addr.to_owned() })?;

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.bind_addr, self.port)
    }
}
