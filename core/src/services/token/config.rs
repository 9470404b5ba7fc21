//! Configuration for the token service

use std::path::PathBuf;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Path to the PEM-encoded P-256 private key
    pub key_path: PathBuf,
    /// Token expiry in seconds
    pub token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from("keys/testkey.pem"),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates config from environment variables
    ///
    /// # Environment Variables
    ///
    /// - `TOKEN_KEY_PATH`: path to the PEM key file (default: keys/testkey.pem)
    /// - `TOKEN_EXPIRY_SECONDS`: token lifetime in seconds (default: 60)
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            key_path: std::env::var("TOKEN_KEY_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.key_path),
            token_expiry_seconds: std::env::var("TOKEN_EXPIRY_SECONDS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(default.token_expiry_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_dev_key() {
        let config = TokenServiceConfig::default();
        assert_eq!(config.key_path, PathBuf::from("keys/testkey.pem"));
        assert_eq!(config.token_expiry_seconds, 60);
    }

    #[test]
    fn from_env_overrides_and_recovers() {
        std::env::set_var("TOKEN_KEY_PATH", "/etc/qrpass/key.pem");
        std::env::set_var("TOKEN_EXPIRY_SECONDS", "120");
        let config = TokenServiceConfig::from_env();
        assert_eq!(config.key_path, PathBuf::from("/etc/qrpass/key.pem"));
        assert_eq!(config.token_expiry_seconds, 120);

        // A non-numeric lifetime falls back to the default
        std::env::set_var("TOKEN_EXPIRY_SECONDS", "not-a-number");
        assert_eq!(TokenServiceConfig::from_env().token_expiry_seconds, 60);

        std::env::remove_var("TOKEN_KEY_PATH");
        std::env::remove_var("TOKEN_EXPIRY_SECONDS");
    }
}
