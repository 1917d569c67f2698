//! Global configuration types for Notely.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! listen address and CORS policy of the HTTP server.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Notely server.
///
/// Loaded from `~/.notely/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Interface to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port for the HTTP listener. The `PORT` env var overrides it.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin patterns accepted by CORS. `https://*` / `http://*` allow any
    /// origin with that scheme.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["https://*".to_string(), "http://*".to_string()]
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allowed_origins: default_cors_allowed_origins(),
        }
    }
}

impl GlobalConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
