use crate::aggregate;
use crate::config::AnalyzerConfig;
use crate::errors::AnalyzerError;
use crate::fetchers::Fetcher;
use crate::filter::UrlFilter;
use crate::parsers::PageParser;
use crate::parsers::stopwords::StopWords;
use crate::results::{AnalysisRun, FetchFailure, Source};
use crate::serp::{self, ResultDiscoverer};
use futures::stream::{self, StreamExt};

/// Runs the fetch → parse → aggregate pipeline
pub struct Analyzer<'a, F: Fetcher> {
    config: AnalyzerConfig,
    fetcher: F,
    stop_words: &'a StopWords,
    discoverer: ResultDiscoverer,
}

impl<'a, F: Fetcher> Analyzer<'a, F> {
    /// Create an analyzer from a validated configuration
    pub fn new(
        config: AnalyzerConfig,
        fetcher: F,
        stop_words: &'a StopWords,
    ) -> Result<Self, AnalyzerError> {
        config.validate()?;
        let filter = UrlFilter::new(&config.url_filter_config())?;
        let discoverer =
            ResultDiscoverer::new(&config.search_url, &config.result_selector, filter)?;

        Ok(Self {
            config,
            fetcher,
            stop_words,
            discoverer,
        })
    }

    /// Set the number of keywords reported per page
    pub fn with_top_keywords(mut self, top_keywords: usize) -> Self {
        self.config.top_keywords = top_keywords.max(1);
        self
    }

    /// Set the maximum number of concurrent fetches (1 = sequential)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scrape the result page for `query` and analyze every result
    pub async fn analyze_query(&self, query: &str) -> Result<AnalysisRun, AnalyzerError> {
        let urls = self.discoverer.discover(&self.fetcher, query).await?;
        if urls.is_empty() {
            ::log::warn!("No result URLs found for '{}'", query);
        }
        Ok(self.analyze_urls(Source::Query(query.to_string()), &urls).await)
    }

    /// Analyze URLs from a newline-separated list
    pub async fn analyze_list(&self, input: &str) -> AnalysisRun {
        let urls = serp::discover_from_list(input);
        self.analyze_urls(Source::UrlList(urls.clone()), &urls).await
    }

    /// Fetch and analyze `urls`, keeping results in input order.
    ///
    /// Failed fetches are logged and reported in [`AnalysisRun::failures`];
    /// they never contribute to the aggregate statistics.
    pub async fn analyze_urls(&self, source: Source, urls: &[String]) -> AnalysisRun {
        let parser = PageParser::new(self.stop_words, self.config.top_keywords);

        ::log::info!(
            "Analyzing {} URLs (max concurrency {})",
            urls.len(),
            self.config.max_concurrency
        );

        // `buffered` yields in input order regardless of completion order
        let outcomes = stream::iter(urls)
            .map(|url| self.fetcher.fetch(url))
            .buffered(self.config.max_concurrency)
            .collect::<Vec<_>>()
            .await;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(page) => {
                    ::log::info!("Analyzed {}", page.url);
                    records.push(parser.parse(&page.url, &page.body));
                }
                Err(error) => {
                    ::log::warn!("Skipping page: {}", error);
                    failures.push(FetchFailure::from(error));
                }
            }
        }

        ::log::info!(
            "Analysis complete - {} pages analyzed, {} skipped",
            records.len(),
            failures.len()
        );

        AnalysisRun {
            result: aggregate::aggregate(source, records),
            failures,
        }
    }
}
