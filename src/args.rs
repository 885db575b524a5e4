use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serp-analyzer")]
#[command(about = "Extracts on-page SEO signals from search results or a list of URLs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Export the result table as CSV to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print the full result as JSON instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Number of keywords to report per page
    #[arg(long, global = true)]
    pub top: Option<usize>,

    /// Number of pages fetched at once (1 keeps fetching strictly sequential)
    #[arg(short, long, global = true)]
    pub concurrency: Option<usize>,

    /// Newline-separated stop word list replacing the built-in English list
    #[arg(long, global = true)]
    pub stop_words: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the pages listed on the search result page for a query
    Query {
        /// Search query
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },
    /// Analyze URLs given as arguments and/or read from a file
    Urls {
        /// URLs to analyze
        urls: Vec<String>,

        /// Newline-separated URL list ("-" reads standard input)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl Command {
    /// The query text, joining multiple words with spaces
    pub fn query(terms: &[String]) -> String {
        terms.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_subcommand() {
        let args = Args::parse_from(["serp-analyzer", "query", "best", "rust", "books", "--top", "5"]);
        match args.command {
            Command::Query { terms } => assert_eq!(Command::query(&terms), "best rust books"),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.top, Some(5));
        assert!(!args.json);
    }

    #[test]
    fn test_urls_subcommand_with_globals() {
        let args = Args::parse_from([
            "serp-analyzer",
            "--json",
            "urls",
            "https://a.com",
            "https://b.com",
            "--file",
            "list.txt",
            "-o",
            "out.csv",
        ]);
        match args.command {
            Command::Urls { urls, file } => {
                assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
                assert_eq!(file, Some(PathBuf::from("list.txt")));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(args.json);
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_query_requires_terms() {
        assert!(Args::try_parse_from(["serp-analyzer", "query"]).is_err());
    }
}
