use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// Configuration for filtering URLs discovered on a result page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    /// Regex patterns for URLs to include (if empty, all URLs are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for URLs to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Decides which discovered result URLs get analyzed
#[derive(Debug, Default)]
pub struct UrlFilter {
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &UrlFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = compile(&config.include_patterns)?;
        let exclude_regexes = compile(&config.exclude_patterns)?;

        Ok(Self {
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if an absolute URL should be analyzed
    pub fn should_analyze(&self, url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        // Exclusions take precedence
        let url_str = url.as_str();
        if self.exclude_regexes.iter().any(|r| r.is_match(url_str)) {
            return false;
        }

        // If include patterns are specified, at least one must match
        self.include_regexes.is_empty() || self.include_regexes.iter().any(|r| r.is_match(url_str))
    }

    /// Resolve, filter and de-duplicate raw hrefs, keeping first-seen order.
    ///
    /// Relative hrefs are resolved against `base`. Absolute hrefs are
    /// returned as written so later link classification sees the same
    /// string the page used.
    pub fn select(&self, hrefs: &[String], base: Option<&Url>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();

        for href in hrefs {
            let href = href.trim();
            let (resolved, candidate) = match Url::parse(href) {
                Ok(url) => (url, href.to_string()),
                Err(url::ParseError::RelativeUrlWithoutBase) => {
                    match base.and_then(|b| b.join(href).ok()) {
                        Some(url) => {
                            let s = url.to_string();
                            (url, s)
                        }
                        None => {
                            ::log::debug!("Dropping unresolvable link: {}", href);
                            continue;
                        }
                    }
                }
                Err(e) => {
                    ::log::debug!("Dropping malformed link {}: {}", href, e);
                    continue;
                }
            };

            if !self.should_analyze(&resolved) {
                ::log::debug!("URL filter rejected: {}", resolved);
                continue;
            }

            if seen.insert(candidate.clone()) {
                selected.push(candidate);
            }
        }

        selected
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>, regex::Error> {
    patterns.iter().map(|p| Regex::new(p)).collect()
}
