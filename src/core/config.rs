//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated from environment variables (with `.env` support via dotenvy).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Honeybadger API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Honeybadger API credentials.
///
/// Both values are required at startup; they are kept optional here so that
/// `Config::from_env` never fails. `Session::from_config` turns a missing
/// value into a fatal configuration error before any transport starts.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// The Honeybadger project to query.
    pub project_id: Option<String>,

    /// API key authenticating against the Honeybadger API.
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "honeybadger-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Honeybadger credentials come from `HONEYBADGER_PROJECT_ID` and
    /// `HONEYBADGER_API_KEY`. Server-level settings use the `MCP_` prefix,
    /// e.g. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        match std::env::var("HONEYBADGER_PROJECT_ID") {
            Ok(project_id) if !project_id.is_empty() => {
                config.credentials.project_id = Some(project_id);
            }
            _ => warn!("HONEYBADGER_PROJECT_ID not set - startup will fail"),
        }

        match std::env::var("HONEYBADGER_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => {
                config.credentials.api_key = Some(api_key);
            }
            _ => warn!("HONEYBADGER_API_KEY not set - startup will fail"),
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HONEYBADGER_PROJECT_ID", "proj_42");
            std::env::set_var("HONEYBADGER_API_KEY", "hbp_test_key");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.project_id.as_deref(), Some("proj_42"));
        assert_eq!(config.credentials.api_key.as_deref(), Some("hbp_test_key"));
        unsafe {
            std::env::remove_var("HONEYBADGER_PROJECT_ID");
            std::env::remove_var("HONEYBADGER_API_KEY");
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HONEYBADGER_PROJECT_ID");
            std::env::remove_var("HONEYBADGER_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.project_id.is_none());
        assert!(config.credentials.api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            project_id: Some("proj_42".to_string()),
            api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "honeybadger-mcp");
    }
}
