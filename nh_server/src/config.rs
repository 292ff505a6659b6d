//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Path of the client-state store; in-memory when unset
    pub store_path: Option<PathBuf>,
    /// Whether to seed the catalog with the sample requests
    pub seed_catalog: bool,
    /// Prometheus exporter bind address; disabled when unset
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `store_override` - Optional store path override (from CLI args)
    /// * `seed_override` - Optional seed toggle override (from CLI args)
    ///
    /// # Returns
    ///
    /// * `Result<ServerConfig, ConfigError>` - Loaded configuration or error
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        store_override: Option<PathBuf>,
        seed_override: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:8080"
                    .parse()
                    .expect("Default bind address is valid")
            });

        let store_path =
            store_override.or_else(|| std::env::var("STORE_PATH").ok().map(PathBuf::from));

        let seed_catalog = seed_override.unwrap_or_else(|| parse_env_or("SEED_CATALOG", true));

        let metrics_bind = match std::env::var("METRICS_BIND") {
            Ok(raw) => Some(raw.parse().map_err(|_| ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("'{raw}' is not a socket address"),
            })?),
            Err(_) => None,
        };

        Ok(ServerConfig {
            bind,
            store_path,
            seed_catalog,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(metrics_bind) = self.metrics_bind {
            if metrics_bind == self.bind {
                return Err(ConfigError::Invalid {
                    var: "METRICS_BIND".to_string(),
                    reason: format!("Must differ from the server bind address ({})", self.bind),
                });
            }
        }

        if let Some(path) = &self.store_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid {
                    var: "STORE_PATH".to_string(),
                    reason: "Must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "METRICS_BIND".to_string(),
            reason: "bad address".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("METRICS_BIND"));
        assert!(msg.contains("bad address"));
    }

    #[test]
    fn test_overrides_win() {
        let config = ServerConfig::from_env(
            Some("127.0.0.1:9999".parse().unwrap()),
            Some(PathBuf::from("/tmp/nh_state.json")),
            Some(false),
        )
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(
            config.store_path.as_deref(),
            Some(std::path::Path::new("/tmp/nh_state.json"))
        );
        assert!(!config.seed_catalog);
        config.validate().unwrap();
    }

    #[test]
    fn test_config_validation_metrics_bind_collision() {
        let bind: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let config = ServerConfig {
            bind,
            store_path: None,
            seed_catalog: true,
            metrics_bind: Some(bind),
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_empty_store_path() {
        let config = ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            store_path: Some(PathBuf::new()),
            seed_catalog: true,
            metrics_bind: None,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
