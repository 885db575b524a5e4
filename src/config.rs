use crate::errors::AnalyzerError;
use crate::filter::UrlFilterConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides the configured User-Agent
pub const USER_AGENT_ENV: &str = "SERP_ANALYZER_USER_AGENT";

/// Configuration for the analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Search endpoint; the query is appended as the `q` parameter
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// CSS selector matching result containers (or anchors) on the listing page
    #[serde(default = "default_result_selector")]
    pub result_selector: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Number of keywords to report per page
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// Maximum number of pages fetched at once (1 = strictly sequential)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Newline-separated stop word list replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_words_file: Option<String>,

    /// Regex patterns a discovered result URL must match (empty = any)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for discovered result URLs to drop
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            result_selector: default_result_selector(),
            user_agent: default_user_agent(),
            top_keywords: default_top_keywords(),
            max_concurrency: default_max_concurrency(),
            timeout_secs: None,
            stop_words_file: None,
            include_patterns: Vec::new(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        ::log::debug!("Loaded configuration from {}", path.display());
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, AnalyzerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(user_agent) = std::env::var(USER_AGENT_ENV) {
            if !user_agent.is_empty() {
                self.user_agent = user_agent;
            }
        }
        self
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_concurrency == 0 {
            return Err(AnalyzerError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.top_keywords == 0 {
            return Err(AnalyzerError::Config(
                "top_keywords must be at least 1".to_string(),
            ));
        }
        if self.result_selector.trim().is_empty() {
            return Err(AnalyzerError::Config(
                "result_selector must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Filter settings for discovered result URLs
    pub fn url_filter_config(&self) -> UrlFilterConfig {
        UrlFilterConfig {
            include_patterns: self.include_patterns.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
        }
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Default search endpoint
fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

/// Default result link selector for the listing page
fn default_result_selector() -> String {
    "div.tF2Cxc".to_string()
}

/// Default desktop browser User-Agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

/// Default keyword count
fn default_top_keywords() -> usize {
    10
}

/// Default concurrency
fn default_max_concurrency() -> usize {
    1
}

/// Default exclusions for discovered result URLs
fn default_exclude_patterns() -> Vec<String> {
    vec![r"/search\?".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config.search_url, "https://www.google.com/search");
        assert_eq!(config.result_selector, "div.tF2Cxc");
        assert_eq!(config.top_keywords, 10);
        assert_eq!(config.max_concurrency, 1);
        assert!(config.timeout().is_none());
        assert!(config.stop_words_file.is_none());
        assert_eq!(config.exclude_patterns, vec![r"/search\?".to_string()]);
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{"top_keywords": 5, "timeout_secs": 30, "max_concurrency": 3}"#;
        let config = AnalyzerConfig::from_json(json).unwrap();
        assert_eq!(config.top_keywords, 5);
        assert_eq!(config.max_concurrency, 3);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = AnalyzerConfig::from_json(r#"{"max_concurrency": 0}"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = AnalyzerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AnalyzerError::Json(_)));
    }
}
