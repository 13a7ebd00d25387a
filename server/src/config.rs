//! Server Configuration
//!
//! Environment-driven configuration with defaults suitable for local
//! development.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the todo server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// HTTP bind host
    pub host: String,
    /// HTTP bind port
    pub port: u16,
    /// Path of the persisted todo collection
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            data_file: PathBuf::from("todos.json"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `TODO_HOST`, `TODO_PORT`, `TODO_DATA_FILE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("TODO_HOST").unwrap_or(defaults.host),
            port: env::var("TODO_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            data_file: env::var("TODO_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
