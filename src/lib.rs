//! SEO analysis of search result pages and user-supplied URLs.
//!
//! Pages are fetched, their title, headings, meta description, internal
//! links and word statistics are extracted, and the results are averaged
//! across all successfully fetched pages.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod errors;
pub mod export;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod serp;

// Re-export commonly used types for convenience
pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, FetchError};
pub use fetchers::{FetchedPage, Fetcher, HttpFetcher};
pub use results::{AggregateStats, AnalysisRun, FetchFailure, PageRecord, QueryResult, Source};
