//! HTTP server settings.

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Longest per-request timeout the server accepts, in seconds.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the listener binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed by CORS; unset allows any origin
    pub cors_origins: Option<String>,
}

/// Deployment environment.
///
/// Production switches log output to JSON; everything else is development.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn bind_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid bind address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Origins allowed by CORS, split out of the comma-separated setting.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|raw| raw.split(',').map(|origin| origin.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Validate server settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,orbit_navigator=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_everywhere_in_development() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.is_production());
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn production_environment_is_detected() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.is_production());
    }

    #[test]
    fn allowed_origins_splits_and_trims() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:4000, https://orbit.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_origins(),
            vec!["http://localhost:4000", "https://orbit.example.com"]
        );
    }

    #[test]
    fn allowed_origins_default_to_empty() {
        assert!(ServerConfig::default().allowed_origins().is_empty());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bounds_request_timeout() {
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_deserializes_from_lowercase() {
        let env: Environment = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(env, Environment::Production);
        assert!(serde_json::from_str::<Environment>("\"staging\"").is_err());
    }
}
