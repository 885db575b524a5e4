use crate::results::{AggregateStats, PageRecord, QueryResult, Source};

/// Means over `records`, or `None` when there are no records
pub fn compute_stats(records: &[PageRecord]) -> Option<AggregateStats> {
    if records.is_empty() {
        return None;
    }

    let n = records.len() as f64;
    let mean = |f: fn(&PageRecord) -> usize| records.iter().map(f).sum::<usize>() as f64 / n;

    Some(AggregateStats {
        avg_title_length: mean(|r: &PageRecord| r.title_length),
        avg_description_length: mean(|r: &PageRecord| r.description_length),
        avg_content_length: mean(|r: &PageRecord| r.visible_text_length),
    })
}

/// Combine successfully analyzed pages into a [`QueryResult`].
///
/// Returns `None` ("no data") when `records` is empty.
pub fn aggregate(source: Source, records: Vec<PageRecord>) -> Option<QueryResult> {
    let aggregate_stats = compute_stats(&records)?;
    Some(QueryResult {
        source,
        records,
        aggregate_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn record(title: &str, description: &str, content_length: usize) -> PageRecord {
        let meta_description = if description.is_empty() {
            "No description".to_string()
        } else {
            description.to_string()
        };
        PageRecord {
            url: format!("https://{}.example", title.to_lowercase()),
            title: title.to_string(),
            title_length: title.chars().count(),
            primary_heading: "No H1".to_string(),
            secondary_headings: Vec::new(),
            meta_description,
            description_length: description.chars().count(),
            visible_text_length: content_length,
            word_count: 0,
            top_keywords: Vec::new(),
            internal_links: BTreeSet::new(),
            similar_keywords: BTreeSet::new(),
        }
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert!(compute_stats(&[]).is_none());
        assert!(aggregate(Source::Query("rust".to_string()), Vec::new()).is_none());
    }

    #[test]
    fn test_single_record_means() {
        let stats = compute_stats(&[record("Example Domain", "abc", 120)]).unwrap();
        assert_eq!(stats.avg_title_length, 14.0);
        assert_eq!(stats.avg_description_length, 3.0);
        assert_eq!(stats.avg_content_length, 120.0);
    }

    #[test]
    fn test_means_over_several_records() {
        let records = vec![
            record("ab", "abcd", 100),
            record("abcd", "", 200),
            record("abcdef", "ab", 301),
        ];
        let result = aggregate(Source::UrlList(vec![]), records).unwrap();
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.aggregate_stats.avg_title_length, 4.0);
        assert_eq!(result.aggregate_stats.avg_description_length, 2.0);
        assert_eq!(result.aggregate_stats.avg_content_length, 601.0 / 3.0);
    }

    #[test]
    fn test_missing_description_counts_as_zero() {
        let records = vec![record("abcd", "", 10), record("abcd", "", 10)];
        let stats = compute_stats(&records).unwrap();
        assert_eq!(records[0].meta_description, "No description");
        assert_eq!(stats.avg_description_length, 0.0);
        assert_eq!(stats.avg_title_length, 4.0);
    }

    #[test]
    fn test_aggregate_preserves_record_order() {
        let records = vec![record("Zeta", "", 1), record("Alpha", "", 1)];
        let result = aggregate(Source::Query("q".to_string()), records).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha"]);
    }
}
