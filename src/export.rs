use crate::errors::AnalyzerError;
use crate::results::{PageRecord, QueryResult};
use std::io::Write;

/// Column names of the tabular result set, in output order
pub const COLUMNS: [&str; 10] = [
    "url",
    "meta_title",
    "title_length",
    "meta_description",
    "description_length",
    "h1_tags",
    "h2_tags",
    "word_count",
    "basic_keywords",
    "internal_links",
];

const LIST_SEPARATOR: &str = ", ";

/// One table row for a record, with cells in [`COLUMNS`] order
pub fn row(record: &PageRecord) -> [String; 10] {
    let keywords = record
        .top_keywords
        .iter()
        .map(|(word, count)| format!("{} ({})", word, count))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);

    let internal_links = record
        .internal_links
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);

    [
        record.url.clone(),
        record.title.clone(),
        record.title_length.to_string(),
        record.meta_description.clone(),
        record.description_length.to_string(),
        record.primary_heading.clone(),
        record.secondary_headings.join(LIST_SEPARATOR),
        record.word_count.to_string(),
        keywords,
        internal_links,
    ]
}

/// Write the result set as CSV with a header row
pub fn write_csv<W: Write>(result: &QueryResult, writer: W) -> Result<(), AnalyzerError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;
    for record in &result.records {
        csv.write_record(row(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Render the result set as a CSV string
pub fn to_csv_string(result: &QueryResult) -> Result<String, AnalyzerError> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Write the result set as CSV to `path`
pub fn write_csv_file(
    result: &QueryResult,
    path: impl AsRef<std::path::Path>,
) -> Result<(), AnalyzerError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(result, file)?;
    ::log::info!("Exported {} rows to {}", result.records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{AggregateStats, Source};
    use std::collections::BTreeSet;

    fn sample() -> QueryResult {
        let record = PageRecord {
            url: "https://example.com".to_string(),
            title: "Example, Domain".to_string(),
            title_length: 15,
            primary_heading: "Welcome".to_string(),
            secondary_headings: vec!["One".to_string(), "Two".to_string()],
            meta_description: "No description".to_string(),
            description_length: 0,
            visible_text_length: 42,
            word_count: 7,
            top_keywords: vec![("example".to_string(), 3), ("domain".to_string(), 2)],
            internal_links: ["/about", "/contact"].iter().map(|s| s.to_string()).collect(),
            similar_keywords: BTreeSet::new(),
        };
        QueryResult {
            source: Source::Query("example".to_string()),
            records: vec![record],
            aggregate_stats: AggregateStats {
                avg_title_length: 15.0,
                avg_description_length: 0.0,
                avg_content_length: 42.0,
            },
        }
    }

    #[test]
    fn test_csv_header_matches_columns() {
        let csv = to_csv_string(&sample()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "url,meta_title,title_length,meta_description,description_length,h1_tags,h2_tags,word_count,basic_keywords,internal_links"
        );
    }

    #[test]
    fn test_csv_row_quotes_and_joins() {
        let csv = to_csv_string(&sample()).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "https://example.com,\"Example, Domain\",15,No description,0,Welcome,\"One, Two\",7,\"example (3), domain (2)\",\"/about, /contact\""
        );
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_csv_with_no_records_has_header_only() {
        let mut result = sample();
        result.records.clear();
        let csv = to_csv_string(&result).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_csv_file(&sample(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("url,meta_title"));
        assert_eq!(contents.lines().count(), 2);
    }
}
