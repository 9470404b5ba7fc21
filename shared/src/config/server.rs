//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Creates configuration from environment variables
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_HOST`: bind host (default: 127.0.0.1)
    /// - `SERVER_PORT`: bind port (default: 8080)
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(default.host),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(default.port),
        }
    }

    /// Address string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
