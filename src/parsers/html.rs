use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;

pub const NO_TITLE: &str = "No title";
pub const NO_H1: &str = "No H1";
pub const NO_DESCRIPTION: &str = "No description";

/// Structural fields pulled out of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Title with whitespace collapsed, or a placeholder
    pub title: String,
    /// Character count of the raw title text (of the placeholder when absent)
    pub title_length: usize,
    pub primary_heading: String,
    pub secondary_headings: Vec<String>,
    /// Raw `content` of the description meta tag
    pub meta_description: Option<String>,
    pub internal_links: BTreeSet<String>,
    /// Concatenated text of every text node in the document
    pub visible_text: String,
}

impl ExtractedFields {
    /// Trimmed description, or a placeholder when absent or blank
    pub fn description_or_placeholder(&self) -> String {
        self.meta_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string()
    }

    /// Raw description text; empty when the page has none
    pub fn description_text(&self) -> &str {
        self.meta_description.as_deref().unwrap_or("")
    }

    /// Character count of the raw description, 0 when absent
    pub fn description_length(&self) -> usize {
        self.description_text().chars().count()
    }
}

/// Extract SEO fields from page markup fetched from `page_url`.
///
/// Missing title and headings become placeholders. The description is kept
/// optional so metrics never count a placeholder.
pub fn extract(markup: &str, page_url: &str) -> ExtractedFields {
    let doc = Html::parse_document(markup);

    let raw_title = raw_first_text(&doc, "title").filter(|t| !t.trim().is_empty());
    let (title, title_length) = match raw_title {
        Some(raw) => (collapse_whitespace(&raw), raw.chars().count()),
        None => (NO_TITLE.to_string(), NO_TITLE.chars().count()),
    };
    let primary_heading = first_text(&doc, "h1").unwrap_or_else(|| NO_H1.to_string());
    let secondary_headings = all_texts(&doc, "h2");
    let meta_description = meta_description(&doc);
    let internal_links = internal_links(&doc, page_url);
    let visible_text = doc.root_element().text().collect::<String>();

    ::log::debug!(
        "Extracted {} h2 headings and {} internal links from {}",
        secondary_headings.len(),
        internal_links.len(),
        page_url
    );

    ExtractedFields {
        title,
        title_length,
        primary_heading,
        secondary_headings,
        meta_description,
        internal_links,
        visible_text,
    }
}

/// Unmodified text of the first element matching `selector`
fn raw_first_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .map(|e| e.text().collect::<String>())
}

/// Text of the first element matching `selector`, if it has any
fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Non-empty texts of every element matching `selector`, in document order
fn all_texts(doc: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    doc.select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Element text with whitespace runs collapsed
fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Content of the first `<meta name="description">` (name compared case-insensitively)
fn meta_description(doc: &Html) -> Option<String> {
    let selector = Selector::parse("meta[name]").ok()?;
    doc.select(&selector)
        .find(|e| {
            e.value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|e| e.value().attr("content"))
        .map(str::to_string)
}

/// Hrefs classified as internal by [`is_internal_link`]
fn internal_links(doc: &Html, page_url: &str) -> BTreeSet<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return BTreeSet::new();
    };
    doc.select(&selector)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| is_internal_link(href, page_url))
        .map(|href| href.to_string())
        .collect()
}

/// A link is internal if it contains the page URL or starts with `/`.
///
/// This is a substring heuristic, not an authority comparison: protocol
/// relative links (`//cdn.example.com/x`) count as internal, while absolute
/// links to the same host that do not contain the full page URL do not.
pub fn is_internal_link(href: &str, page_url: &str) -> bool {
    href.starts_with('/') || (!page_url.is_empty() && href.contains(page_url))
}

/// Result links matching `selector` on a search listing page
pub fn result_links(markup: &str, selector: &Selector) -> Vec<String> {
    let doc = Html::parse_document(markup);
    let links = doc
        .select(selector)
        .filter_map(|e| {
            // The selector may match the result container or the anchor itself
            if e.value().name() == "a" {
                e.value().attr("href")
            } else {
                first_anchor_href(e)
            }
        })
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("Listing page yielded {} result links", links.len());
    links
}

fn first_anchor_href(element: ElementRef<'_>) -> Option<&str> {
    let anchor = Selector::parse("a[href]").ok()?;
    element
        .select(&anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
}
