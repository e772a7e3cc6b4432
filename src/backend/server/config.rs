/**
 * Server Configuration
 *
 * This module loads the listen address of the login server from environment
 * variables, with defaults for local development.
 *
 * # Configuration Sources
 *
 * - `SERVER_HOST` - Interface to bind (default `0.0.0.0`)
 * - `SERVER_PORT` - Port to bind (default `3000`)
 *
 * A `.env` file is loaded by the binary before this runs.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::shared::ConfigError;

/// Default port, matching the one clients expect
pub const DEFAULT_PORT: u16 = 3000;

/// Listen configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `SERVER_HOST` or `SERVER_PORT`
    /// is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("SERVER_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL printed in startup logs
    pub fn display_url(&self) -> String {
        let host = if self.host.is_unspecified() {
            "localhost".to_string()
        } else {
            self.host.to_string()
        };
        format!("http://{}:{}", host, self.port)
    }
}
