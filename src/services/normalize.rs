// src/services/normalize.rs

//! Backend item normalization.

use crate::models::CaptureRecord;
use crate::services::feed::FeedItem;
use crate::utils::timestamp::normalize_timestamp;

/// Convert one backend result item into a capture record.
///
/// `urlkey` and `original` come from the request, computed once per
/// lookup; the backend's echo of the URL is not trusted. Absent fields
/// stay `None` and nothing here can fail, so one degenerate item never
/// sinks the rest of the batch.
pub fn normalize(item: &FeedItem, urlkey: &str, original: &str) -> CaptureRecord {
    CaptureRecord {
        urlkey: urlkey.to_string(),
        timestamp: normalize_timestamp(item.get("tstamp").unwrap_or_default()),
        original: original.to_string(),
        mime_primary: item.get("primaryType").map(str::to_string),
        mime_sub: item.get("subType").map(str::to_string),
        digest: item.get("digest").map(str::to_string),
        offset: item.get("arcoffset").map(str::to_string),
        filename: item.get("arcname").map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timestamp::EARLIEST_DATE;

    #[test]
    fn test_normalize_maps_all_fields() {
        let item = FeedItem::from_pairs(&[
            ("tstamp", "20100615123045"),
            ("primaryType", "text"),
            ("subType", "html"),
            ("digest", "sha1:ABCDEF"),
            ("arcoffset", "1024"),
            ("arcname", "IA-000123"),
        ]);

        let record = normalize(&item, "com,example)/", "http://example.com/");
        assert_eq!(record.urlkey, "com,example)/");
        assert_eq!(record.timestamp, "20100615123045");
        assert_eq!(record.original, "http://example.com/");
        assert_eq!(record.mime_primary.as_deref(), Some("text"));
        assert_eq!(record.mime_sub.as_deref(), Some("html"));
        assert_eq!(record.digest.as_deref(), Some("sha1:ABCDEF"));
        assert_eq!(record.offset.as_deref(), Some("1024"));
        assert_eq!(record.filename.as_deref(), Some("IA-000123"));
    }

    #[test]
    fn test_normalize_empty_item_still_yields_a_record() {
        let record = normalize(&FeedItem::default(), "com,example)/", "http://example.com/");
        assert_eq!(record.timestamp, EARLIEST_DATE);
        assert!(record.mime_primary.is_none());
        assert!(record.digest.is_none());
        assert_eq!(
            record.cdx_line(),
            "com,example)/ 19960101000000 http://example.com/ -/- - - - - -"
        );
    }

    #[test]
    fn test_normalize_reduces_sloppy_timestamps() {
        let item = FeedItem::from_pairs(&[("tstamp", "2010-06-15 12:30:45.000")]);
        let record = normalize(&item, "com,example)/", "http://example.com/");
        assert_eq!(record.timestamp, "20100615123045");

        let item = FeedItem::from_pairs(&[("tstamp", "20100615123045999")]);
        let record = normalize(&item, "com,example)/", "http://example.com/");
        assert_eq!(record.timestamp, "20100615123045");
    }
}
