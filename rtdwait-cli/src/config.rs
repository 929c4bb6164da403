//! Waiter configuration
//!
//! Defines the project/commit being watched, the API credentials and the
//! polling cadence.

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;
use rtdwait_client::DEFAULT_BASE_URL;

/// Default delay between two polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Default total wait budget
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Default upper bound for a single API request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Waiter configuration
#[derive(Clone)]
pub struct Config {
    /// ReadTheDocs project slug
    pub project: String,

    /// Revision whose builds are awaited
    pub commit: String,

    /// ReadTheDocs API token
    pub token: String,

    /// Base URL of the ReadTheDocs instance
    pub api_url: String,

    /// Delay before every poll, including the first one
    pub poll_interval: Duration,

    /// Total wall-clock budget
    pub timeout: Duration,

    /// Upper bound for a single request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        project: impl Into<String>,
        commit: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            commit: commit.into(),
            token: token.into(),
            api_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.token.trim().is_empty() {
            anyhow::bail!("RTD_API_TOKEN is not set; refusing to query the API unauthenticated");
        }

        if self.commit.trim().is_empty() {
            anyhow::bail!("commit cannot be empty");
        }

        if self.project.trim().is_empty() {
            anyhow::bail!("project cannot be empty");
        }

        if HeaderValue::from_str(&format!("Token {}", self.token)).is_err() {
            anyhow::bail!("RTD_API_TOKEN contains characters not allowed in an HTTP header");
        }

        let api_url = Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("api_url {:?} is not a valid URL: {}", self.api_url, e))?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!("api_url must start with http:// or https://");
        }
        if api_url.host_str().is_none() {
            anyhow::bail!("api_url must include a host");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("project", &self.project)
            .field("commit", &self.commit)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("poll_interval", &self.poll_interval)
            .field("timeout", &self.timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config::new("red-discordbot", "6b4ab3a1a1e4", "secret")
    }

    #[test]
    fn test_default_config() {
        let config = valid();
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.timeout, Duration::from_secs(900));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.api_url, "https://readthedocs.org");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let mut config = valid();
        config.token = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("RTD_API_TOKEN"));
    }

    #[test]
    fn test_token_with_control_characters_is_rejected() {
        let mut config = valid();
        config.token = "secret\nsecond-line".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("not allowed in an HTTP header"));
    }

    #[test]
    fn test_api_url_without_host_is_rejected() {
        let mut config = valid();

        config.api_url = "http://".to_string();
        assert!(config.validate().is_err());

        config.api_url = "ftp://readthedocs.org".to_string();
        assert!(config.validate().is_err());

        config.api_url = "https://readthedocs.example.com/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid();

        config.commit = String::new();
        assert!(config.validate().is_err());
        config.commit = "6b4ab3a1a1e4".to_string();

        config.project = String::new();
        assert!(config.validate().is_err());
        config.project = "red-discordbot".to_string();

        config.api_url = "readthedocs.org".to_string();
        assert!(config.validate().is_err());
        config.api_url = "http://localhost:8000".to_string();
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = DEFAULT_POLL_INTERVAL;

        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
        config.timeout = DEFAULT_TIMEOUT;

        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", valid());
        assert!(!debug.contains("secret"));
    }
}
