//! Configuration management for the contact book server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind to (default: 127.0.0.1)
    pub host: IpAddr,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Directory served as static files (default: "public")
    pub public_dir: PathBuf,

    /// Whether to start with the built-in sample contacts (default: true)
    pub seed_contacts: bool,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_HOST`: Bind address (default: 127.0.0.1)
    /// - `CONTACTS_PORT`: Listen port (default: 3000)
    /// - `CONTACTS_PUBLIC_DIR`: Static file directory (default: "public")
    /// - `CONTACTS_SEED`: Load the sample contacts, `true`/`false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = match env::var("CONTACTS_HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CONTACTS_HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => defaults.host,
        };

        let port = Self::parse_env_u16("CONTACTS_PORT", defaults.port)?;
        let seed_contacts = Self::parse_env_bool("CONTACTS_SEED", defaults.seed_contacts)?;

        let public_dir = env::var("CONTACTS_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        if public_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_PUBLIC_DIR".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            public_dir,
            seed_contacts,
            log_level,
        })
    }

    /// The socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            public_dir: PathBuf::from("public"),
            seed_contacts: true,
            log_level: "info".to_string(),
        }
    }
}
