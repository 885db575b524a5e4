use crate::parsers::stopwords::StopWords;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Default number of keywords reported per page
pub const DEFAULT_TOP_N: usize = 10;

/// Word statistics computed from a page's visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    /// Character count of the raw text
    pub content_length: usize,
    /// Whitespace-separated token count of the raw text
    pub word_count: usize,
    /// Most frequent keywords, most frequent first
    pub top_keywords: Vec<(String, usize)>,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    // Words and runs of punctuation become separate tokens
    TOKEN.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("token pattern is valid"))
}

/// Split lowercased text into word and punctuation tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens that are purely alphanumeric and not stop words, in text order
pub fn keyword_tokens(text: &str, stop_words: &StopWords) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().all(char::is_alphanumeric))
        .filter(|t| !stop_words.contains(t))
        .collect()
}

/// Count tokens, returning `(word, count)` pairs in first-occurrence order
pub fn count_frequencies(tokens: &[String]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    counts
}

/// The `n` most frequent keywords; equal counts keep first-occurrence order
pub fn top_keywords(text: &str, stop_words: &StopWords, n: usize) -> Vec<(String, usize)> {
    let tokens = keyword_tokens(text, stop_words);
    let mut counts = count_frequencies(&tokens);
    // Stable sort preserves insertion order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Character count of the full text
pub fn content_length(text: &str) -> usize {
    text.chars().count()
}

/// Whitespace-separated token count of the full text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Compute all statistics for a page's visible text
pub fn analyze(text: &str, stop_words: &StopWords, top_n: usize) -> TextStats {
    TextStats {
        content_length: content_length(text),
        word_count: word_count(text),
        top_keywords: top_keywords(text, stop_words, top_n),
    }
}

/// Tokens appearing in both the title and the description
pub fn similar_keywords(title: &str, description: &str) -> BTreeSet<String> {
    let title_words: BTreeSet<String> = tokenize(title).into_iter().collect();
    let desc_words: BTreeSet<String> = tokenize(description).into_iter().collect();
    title_words.intersection(&desc_words).cloned().collect()
}
