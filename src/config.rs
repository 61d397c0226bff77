//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated latency of login and signup (ms)
    pub latency_ms: u64,
    /// Simulated latency of an item submission (ms)
    pub submit_latency_ms: u64,
    /// Simulated latency of an admin moderation action (ms)
    pub admin_latency_ms: u64,
    /// Directory backing durable client storage
    pub storage_dir: PathBuf,
    /// HMAC key for session tokens (raw bytes)
    pub token_signing_key: Vec<u8>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            latency_ms: 0,
            submit_latency_ms: 0,
            admin_latency_ms: 0,
            storage_dir: env::temp_dir().join("rewear-test"),
            token_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            latency_ms: parse_ms("REWEAR_LATENCY_MS", 1000)?,
            submit_latency_ms: parse_ms("REWEAR_SUBMIT_LATENCY_MS", 2000)?,
            admin_latency_ms: parse_ms("REWEAR_ADMIN_LATENCY_MS", 500)?,
            storage_dir: env::var("REWEAR_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".rewear")),
            token_signing_key: env::var("REWEAR_TOKEN_KEY")
                .map(|v| v.trim().as_bytes().to_vec())
                .map_err(|_| ConfigError::Missing("REWEAR_TOKEN_KEY"))?,
        })
    }

    /// Zero-latency config for tests.
    pub fn test_default() -> Self {
        Self::default()
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn admin_latency(&self) -> Duration {
        Duration::from_millis(self.admin_latency_ms)
    }
}

fn parse_ms(name: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("REWEAR_TOKEN_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::set_var("REWEAR_LATENCY_MS", "250");
        env::set_var("REWEAR_STORAGE_DIR", "/tmp/rewear-config-test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.latency(), Duration::from_millis(250));
        assert_eq!(config.submit_latency_ms, 2000);
        assert_eq!(config.admin_latency_ms, 500);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/rewear-config-test"));
        assert_eq!(config.token_signing_key, b"test_jwt_key_32_bytes_minimum!!");

        env::set_var("REWEAR_LATENCY_MS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("REWEAR_LATENCY_MS", _))
        ));
        env::remove_var("REWEAR_LATENCY_MS");
    }
}
