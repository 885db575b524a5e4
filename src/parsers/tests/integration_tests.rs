use crate::parsers::PageParser;
use crate::parsers::html::NO_DESCRIPTION;
use crate::parsers::stopwords::StopWords;

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"<!doctype html>
<html>
<head>
    <title>Example Domain</title>
    <meta name="description" content="Example domain for illustrative examples">
</head>
<body>
<div>
    <h1>Example Domain</h1>
    <p>This domain is for use in illustrative examples in documents.</p>
    <p><a href="https://www.iana.org/domains/example">More information...</a></p>
    <p><a href="/about">About</a></p>
</div>
</body>
</html>"#;

    #[test]
    fn test_parse_builds_full_record() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 10);
        let record = parser.parse("https://example.com", EXAMPLE);

        assert_eq!(record.url, "https://example.com");
        assert_eq!(record.title, "Example Domain");
        assert_eq!(record.primary_heading, "Example Domain");
        assert_eq!(record.meta_description, "Example domain for illustrative examples");
        assert!(record.secondary_headings.is_empty());
        assert_eq!(record.title_length, 14);

        assert_eq!(record.top_keywords[0], ("domain".to_string(), 3));
        assert_eq!(record.top_keywords[1], ("example".to_string(), 2));
        assert!(record.top_keywords.len() <= 10);
        assert!(record.top_keywords.iter().all(|(w, _)| w != "for" && w != "is"));

        let links: Vec<&str> = record.internal_links.iter().map(String::as_str).collect();
        assert_eq!(links, vec!["/about"]);

        let shared: Vec<&str> = record.similar_keywords.iter().map(String::as_str).collect();
        assert_eq!(shared, vec!["domain", "example"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 10);
        let first = parser.parse("https://example.com", EXAMPLE);
        let second = parser.parse("https://example.com", EXAMPLE);
        assert_eq!(first, second);
        assert_ne!(first.visible_text_length, first.word_count);
    }

    #[test]
    fn test_parse_respects_keyword_limit() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 2);
        let record = parser.parse("https://example.com", EXAMPLE);
        assert_eq!(record.top_keywords.len(), 2);
    }

    #[test]
    fn test_parse_empty_document() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 10);
        let record = parser.parse("https://empty.example", "");
        assert_eq!(record.meta_description, NO_DESCRIPTION);
        assert_eq!(record.visible_text_length, 0);
        assert_eq!(record.word_count, 0);
        assert!(record.top_keywords.is_empty());
        assert!(record.internal_links.is_empty());
    }

    #[test]
    fn test_missing_description_adds_no_length_or_shared_words() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 10);
        let record = parser.parse(
            "https://bare.example",
            "<html><body>No title here</body></html>",
        );
        assert_eq!(record.title, "No title");
        assert_eq!(record.meta_description, NO_DESCRIPTION);
        assert_eq!(record.description_length, 0);
        assert!(record.similar_keywords.is_empty());
    }

    #[test]
    fn test_title_words_do_not_match_description_placeholder() {
        let stop_words = StopWords::english();
        let parser = PageParser::new(&stop_words, 10);
        let record = parser.parse(
            "https://bugs.example",
            "<html><head><title>No more bugs</title></head><body></body></html>",
        );
        assert_eq!(record.title_length, 12);
        assert_eq!(record.meta_description, NO_DESCRIPTION);
        assert!(record.similar_keywords.is_empty());
    }
}
