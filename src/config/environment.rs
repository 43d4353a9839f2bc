//! Environment configuration
//!
//! Reads the service settings from environment variables. Every key has a
//! default so the service starts with no configuration at all.

use std::env;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub seed_data: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            seed_data: true,
        }
    }
}

impl EnvironmentConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        let seed_data = match lookup("SEED_DATA") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidValue {
                key: "SEED_DATA",
                expected: "true or false",
                value,
            })?,
            None => defaults.seed_data,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            seed_data,
        })
    }

    /// Check whether we run in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Address the server binds to
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter used when `RUST_LOG` is not set. Development also logs
    /// request bodies.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "info,car_inventory=debug"
        } else {
            "info"
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<EnvironmentConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.default_log_filter(), "info,car_inventory=debug");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://localhost:3001, ,http://example.com"),
            ("SEED_DATA", "false"),
        ])
        .unwrap();

        assert_eq!(config.environment, "production");
        assert!(!config.is_development());
        assert_eq!(config.default_log_filter(), "info");
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3001".to_string(), "http://example.com".to_string()]
        );
        assert!(!config.seed_data);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("SEED_DATA", "maybe")]),
            Err(ConfigError::InvalidValue { key: "SEED_DATA", .. })
        ));
    }
}
