use crate::errors::AnalyzerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static STOP_WORDS: OnceLock<StopWords> = OnceLock::new();

/// English stop words (the NLTK `english` corpus)
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A fixed set of words excluded from keyword statistics
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Build a set from arbitrary words; entries are trimmed and lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a newline-separated list from disk
    pub fn from_file(path: &Path) -> Result<Self, AnalyzerError> {
        let contents = fs::read_to_string(path).map_err(|source| AnalyzerError::StopWords {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_words(contents.lines()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load the process-wide stop word list once and return it.
///
/// The first successful call decides the list; later calls return the same
/// instance regardless of `path`. A failure leaves nothing loaded, so the
/// caller can abort startup.
pub fn ensure_loaded(path: Option<&Path>) -> Result<&'static StopWords, AnalyzerError> {
    if let Some(words) = STOP_WORDS.get() {
        return Ok(words);
    }

    let words = match path {
        Some(path) => {
            ::log::info!("Loading stop words from {}", path.display());
            StopWords::from_file(path)?
        }
        None => StopWords::english(),
    };
    ::log::debug!("Stop word list holds {} entries", words.len());

    Ok(STOP_WORDS.get_or_init(|| words))
}
