//! Service configuration, read from the environment (and `.env`, loaded in `main`).
//!
//! | Variable | Default |
//! |---|---|
//! | `STORE_BIND_ADDR` | `127.0.0.1:5000` |
//! | `STORE_CHANNEL_CAPACITY` | `32` |

use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STORE_BIND_ADDR";
pub const CHANNEL_CAPACITY_VAR: &str = "STORE_CHANNEL_CAPACITY";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 5000);
const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got {value}")]
    InvalidCapacity { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Mailbox size of each actor
    pub channel_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR).filter(|v| !v.trim().is_empty()) {
            config.channel_capacity = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidCapacity {
                    var: CHANNEL_CAPACITY_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (CHANNEL_CAPACITY_VAR, " 128 "),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.channel_capacity, 128);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let err = load(&[(CHANNEL_CAPACITY_VAR, "0")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "STORE_CHANNEL_CAPACITY must be a positive integer, got 0"
        );
    }

    #[test]
    fn test_bad_address_names_the_variable() {
        let err = load(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { var: BIND_ADDR_VAR, .. }));
    }
}
