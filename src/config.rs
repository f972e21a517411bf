//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cart context lifetime in seconds
    pub cart_ttl_secs: u64,
    /// Background reclamation sweep interval in seconds
    pub cleanup_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CART_TTL_SECS` - Cart context TTL in seconds (default: 900, i.e. 15 minutes)
    /// - `CLEANUP_INTERVAL_SECS` - Reclamation sweep interval in seconds (default: 2400, i.e. 40 minutes)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cart_ttl_secs: env::var("CART_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
            cleanup_interval_secs: env::var("CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2400),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cart_ttl_secs: 900,
            cleanup_interval_secs: 2400,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cart_ttl_secs, 900);
        assert_eq!(config.cleanup_interval_secs, 2400);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CART_TTL_SECS");
        env::remove_var("CLEANUP_INTERVAL_SECS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.cart_ttl_secs, 900);
        assert_eq!(config.cleanup_interval_secs, 2400);
        assert_eq!(config.server_port, 3000);
    }
}
