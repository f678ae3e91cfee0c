use crate::api::sports_api::SPORTS_API_URL;
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to find the events feed and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: SPORTS_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Config {
    /// Load from `SPORTS_FEED_URL` and `SPORTS_FEED_TIMEOUT_SECS`, reading
    /// `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(
            env::var("SPORTS_FEED_URL").ok(),
            env::var("SPORTS_FEED_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(url: Option<String>, timeout_secs: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let feed_url = url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.feed_url);

        let timeout = match timeout_secs {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Invalid {
                        var: "SPORTS_FEED_TIMEOUT_SECS",
                        value: value.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self { feed_url, timeout })
    }
}
