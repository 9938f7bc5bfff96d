//! Process configuration.
//!
//! Read once at startup from environment variables and passed explicitly
//! into the clients. Nothing re-reads the environment after this point.

use std::time::Duration;

/// Default chat-completion endpoint (local proxy).
pub const DEFAULT_AI_URL: &str = "http://localhost:3000/api/openai";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default Stack Exchange search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.stackexchange.com/2.3/search";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Chat-completion endpoint URL.
    pub ai_url: String,
    /// Optional bearer credential for the AI endpoint.
    pub ai_key: Option<String>,
    /// Completion model name.
    pub model: String,
    /// Search endpoint base URL.
    pub search_url: String,
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from `BUGSAGE_*` environment variables,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("BUGSAGE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            ai_url: std::env::var("BUGSAGE_AI_URL")
                .unwrap_or_else(|_| DEFAULT_AI_URL.to_string()),
            ai_key: std::env::var("BUGSAGE_AI_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("BUGSAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            search_url: std::env::var("BUGSAGE_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_url: DEFAULT_AI_URL.to_string(),
            ai_key: None,
            model: DEFAULT_MODEL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ai_url, DEFAULT_AI_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.ai_key.is_none());
    }
}
