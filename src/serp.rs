use crate::errors::AnalyzerError;
use crate::fetchers::Fetcher;
use crate::filter::UrlFilter;
use crate::parsers::html;
use scraper::Selector;
use url::Url;

/// Finds candidate URLs on a search engine result page
pub struct ResultDiscoverer {
    search_url: Url,
    selector: Selector,
    filter: UrlFilter,
}

impl ResultDiscoverer {
    /// Create a discoverer for `search_url`, matching results with the CSS `selector`
    pub fn new(search_url: &str, selector: &str, filter: UrlFilter) -> Result<Self, AnalyzerError> {
        let search_url = Url::parse(search_url)
            .map_err(|e| AnalyzerError::Config(format!("invalid search URL {}: {}", search_url, e)))?;
        let selector =
            Selector::parse(selector).map_err(|_| AnalyzerError::Selector(selector.to_string()))?;

        Ok(Self {
            search_url,
            selector,
            filter,
        })
    }

    /// URL of the result listing for `query`
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Candidate URLs found in a listing page, filtered and in page order
    pub fn extract(&self, markup: &str) -> Vec<String> {
        let hrefs = html::result_links(markup, &self.selector);
        self.filter.select(&hrefs, Some(&self.search_url))
    }

    /// Fetch the listing page for `query` and extract its result URLs
    pub async fn discover<F: Fetcher + ?Sized>(
        &self,
        fetcher: &F,
        query: &str,
    ) -> Result<Vec<String>, AnalyzerError> {
        let url = self.query_url(query);
        ::log::info!("Fetching result page: {}", url);

        let page = fetcher.fetch(url.as_str()).await?;
        let urls = self.extract(&page.body);

        ::log::info!("Discovered {} result URLs for '{}'", urls.len(), query);
        Ok(urls)
    }
}

/// Parse a newline-separated URL list; blank lines are skipped
pub fn discover_from_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
