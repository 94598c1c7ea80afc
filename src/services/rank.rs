// src/services/rank.rs

//! Temporal proximity ranking.

use crate::models::CaptureRecord;
use crate::utils::timestamp::timestamp_value;

/// Order records by absolute numeric distance from `target`, closest
/// first, keeping at most `limit`.
///
/// The sort is stable: same-distance records keep their feed order,
/// which the index uses for site-level deduplication. Ranking toward
/// the earliest sentinel degenerates into ascending timestamps, so
/// range listings reuse this routine instead of a second code path.
/// Truncation happens after ordering; trimming first could drop the
/// actual closest matches.
pub fn rank(mut records: Vec<CaptureRecord>, target: &str, limit: usize) -> Vec<CaptureRecord> {
    let target = timestamp_value(target);
    records.sort_by_key(|record| timestamp_value(&record.timestamp).abs_diff(target));
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::EARLIEST_DATE;

    fn record(timestamp: &str, digest: &str) -> CaptureRecord {
        CaptureRecord {
            urlkey: "com,example)/".to_string(),
            timestamp: timestamp.to_string(),
            original: "http://example.com/".to_string(),
            mime_primary: None,
            mime_sub: None,
            digest: Some(digest.to_string()),
            offset: None,
            filename: None,
        }
    }

    fn timestamps(records: &[CaptureRecord]) -> Vec<&str> {
        records.iter().map(|r| r.timestamp.as_str()).collect()
    }

    #[test]
    fn test_rank_orders_by_distance_from_target() {
        let records = vec![
            record("20091231120000", "a"),
            record("20100102000000", "b"),
            record("20150101000000", "c"),
        ];

        let ranked = rank(records, "20100101000000", 10);
        // 20100102000000 is 1_000_000 away, 20091231120000 is 8_869_880_000
        assert_eq!(
            timestamps(&ranked),
            vec!["20100102000000", "20091231120000", "20150101000000"]
        );
    }

    #[test]
    fn test_rank_ties_keep_feed_order() {
        let records = vec![
            record("20100101000000", "first"),
            record("20100101000000", "second"),
            record("20100101000000", "third"),
        ];

        let ranked = rank(records, "20100101000000", 10);
        let digests: Vec<_> = ranked.iter().map(|r| r.digest.as_deref().unwrap()).collect();
        assert_eq!(digests, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_toward_earliest_sentinel_is_chronological() {
        let records = vec![
            record("20150101000000", "a"),
            record("19990704120000", "b"),
            record("20100101000000", "c"),
        ];

        let ranked = rank(records, EARLIEST_DATE, 10);
        assert_eq!(
            timestamps(&ranked),
            vec!["19990704120000", "20100101000000", "20150101000000"]
        );
    }

    #[test]
    fn test_rank_truncates_after_ordering() {
        let records = vec![
            record("19970101000000", "far"),
            record("20100102000000", "near"),
        ];

        // With limit 1, the kept record must be the closest, not the first
        let ranked = rank(records, "20100101000000", 1);
        assert_eq!(timestamps(&ranked), vec!["20100102000000"]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(Vec::new(), EARLIEST_DATE, 10).is_empty());
    }
}
