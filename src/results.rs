use crate::errors::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where the analyzed URLs came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Source {
    /// A search query whose result page was scraped
    Query(String),
    /// URLs supplied directly by the user
    UrlList(Vec<String>),
}

/// SEO signals extracted from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL of the page
    pub url: String,

    /// Text of the `<title>` element, or a placeholder
    pub title: String,

    /// Character count of the raw title text
    pub title_length: usize,

    /// Text of the first `<h1>`, or a placeholder
    pub primary_heading: String,

    /// Texts of every `<h2>`, in document order
    pub secondary_headings: Vec<String>,

    /// Content of the description meta tag, or a placeholder
    pub meta_description: String,

    /// Character count of the description; 0 when the page has none
    pub description_length: usize,

    /// Character count of the full visible text
    pub visible_text_length: usize,

    /// Whitespace-separated token count of the visible text
    pub word_count: usize,

    /// Most frequent non-stop-words with their counts, most frequent first
    pub top_keywords: Vec<(String, usize)>,

    /// Links classified as internal to the page's site
    pub internal_links: BTreeSet<String>,

    /// Words shared by the title and the meta description
    pub similar_keywords: BTreeSet<String>,
}

/// Means over the successfully analyzed pages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub avg_title_length: f64,
    pub avg_description_length: f64,
    pub avg_content_length: f64,
}

/// Records for one query or URL list plus their aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub source: Source,
    pub records: Vec<PageRecord>,
    pub aggregate_stats: AggregateStats,
}

/// A page that could not be fetched and was left out of the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub url: String,
    pub error: FetchError,
}

impl From<FetchError> for FetchFailure {
    fn from(error: FetchError) -> Self {
        Self {
            url: error.url().to_string(),
            error,
        }
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// `None` when no page was fetched successfully
    pub result: Option<QueryResult>,

    /// Pages skipped because fetching failed, in input order
    pub failures: Vec<FetchFailure>,
}

impl AnalysisRun {
    /// True when there is nothing to report
    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }
}
