//! Process-environment configuration.
//!
//! Credentials are read once at startup into an explicit [`Config`] that is
//! handed to the provider constructors. No other component touches the
//! environment.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// API credentials for both ends of the migration.
pub struct Config {
    pub cloudflare_api_token: String,
    pub vultr_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let cloudflare_api_token = lookup("CLOUDFLARE_API_TOKEN")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar("CLOUDFLARE_API_TOKEN"))?;
        let vultr_api_key = lookup("VULTR_API_KEY")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar("VULTR_API_KEY"))?;

        Ok(Self {
            cloudflare_api_token,
            vultr_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> = vars
            .iter()
            .map(|(k, v)| (*k, (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn both_variables_present() {
        let result = Config::from_lookup(lookup_from(&[
            ("CLOUDFLARE_API_TOKEN", "cf-token"),
            ("VULTR_API_KEY", "vultr-key"),
        ]));
        let Ok(config) = result else {
            panic!("config should load");
        };
        assert_eq!(config.cloudflare_api_token, "cf-token");
        assert_eq!(config.vultr_api_key, "vultr-key");
    }

    #[test]
    fn missing_source_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("VULTR_API_KEY", "vultr-key")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("CLOUDFLARE_API_TOKEN"))
        ));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("CLOUDFLARE_API_TOKEN", "cf-token"),
            ("VULTR_API_KEY", ""),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingVar("VULTR_API_KEY"))));
    }
}
