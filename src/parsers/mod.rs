pub mod html;
pub mod stopwords;
pub mod text;

#[cfg(test)]
mod tests;

use crate::results::PageRecord;
use stopwords::StopWords;

/// Turns fetched markup into a [`PageRecord`]
pub struct PageParser<'a> {
    stop_words: &'a StopWords,
    top_n: usize,
}

impl<'a> PageParser<'a> {
    /// Create a parser using the given stop words and keyword count
    pub fn new(stop_words: &'a StopWords, top_n: usize) -> Self {
        Self { stop_words, top_n }
    }

    /// Extract fields and statistics from markup fetched from `url`
    pub fn parse(&self, url: &str, markup: &str) -> PageRecord {
        let fields = html::extract(markup, url);
        let stats = text::analyze(&fields.visible_text, self.stop_words, self.top_n);
        let similar_keywords = text::similar_keywords(&fields.title, fields.description_text());
        let meta_description = fields.description_or_placeholder();
        let description_length = fields.description_length();

        ::log::debug!(
            "Parsed {}: {} chars, {} words, {} keywords",
            url,
            stats.content_length,
            stats.word_count,
            stats.top_keywords.len()
        );

        PageRecord {
            url: url.to_string(),
            title: fields.title,
            title_length: fields.title_length,
            primary_heading: fields.primary_heading,
            secondary_headings: fields.secondary_headings,
            meta_description,
            description_length,
            visible_text_length: stats.content_length,
            word_count: stats.word_count,
            top_keywords: stats.top_keywords,
            internal_links: fields.internal_links,
            similar_keywords,
        }
    }
}
