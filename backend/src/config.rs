//! Launcher configuration, read from the environment.
//!
//! | variable               | default     |
//! |------------------------|-------------|
//! | `HOST`                 | `127.0.0.1` |
//! | `PORT`                 | `8080`      |
//! | `OPEN_BROWSER`         | `true`      |
//! | `CANDIDATE_SCRIPT_URL` | unset       |
//! | `POLICY_SCRIPT_URL`    | unset       |
//!
//! The two script URLs are handed to the frontend through `GET /api/config`.
//! Leaving one unset disables the matching feature instead of failing startup.

use std::{env, fmt::Display, str::FromStr};

use common::model::config::EndpointConfig;
use log::{info, warn};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub endpoints: EndpointConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoints = EndpointConfig::new(
            optional(&lookup, "CANDIDATE_SCRIPT_URL"),
            optional(&lookup, "POLICY_SCRIPT_URL"),
        );

        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "8080")?,
            open_browser: try_load(&lookup, "OPEN_BROWSER", "true")?,
            endpoints,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse::<T>().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key).filter(|v| !v.trim().is_empty());
    if value.is_none() {
        warn!("{key} not set, the matching feature is disabled");
    }
    value
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.endpoints, EndpointConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("OPEN_BROWSER", "false"),
            ("CANDIDATE_SCRIPT_URL", "https://script/candidate"),
            ("POLICY_SCRIPT_URL", ""),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.endpoints.candidate_url(), Some("https://script/candidate"));
        assert_eq!(config.endpoints.policy_url(), None);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid PORT value \"eighty\""));
    }
}
