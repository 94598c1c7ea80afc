// src/services/feed.rs

//! Result feed parsing.
//!
//! The index answers with an RSS-style feed: a `channel` holding `item`
//! elements whose children are flat metadata fields. One parsing seam
//! covers it; the html5ever tree builder is tolerant of stray markup and
//! namespace prefixes, which suits feeds assembled by the index.

use std::collections::HashMap;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// One backend result with named-field lookup.
///
/// Field names are matched case-insensitively with namespace prefixes
/// ignored, so `arq:tstamp`, `tstamp` and `TStamp` all answer
/// `get("tstamp")`.
#[derive(Debug, Clone, Default)]
pub struct FeedItem {
    fields: HashMap<String, String>,
}

impl FeedItem {
    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                .collect(),
        }
    }
}

/// Parsing seam between raw response bytes and result items.
pub trait FeedParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<FeedItem>>;
}

/// RSS feed parser over the html5ever tree builder.
#[derive(Debug, Default)]
pub struct RssFeedParser;

impl FeedParser for RssFeedParser {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<FeedItem>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AppError::backend(format!("response is not valid UTF-8: {e}")))?;
        let document = Html::parse_document(text);

        let channel_selector = parse_selector("channel")?;
        let item_selector = parse_selector("item")?;

        // The tree builder never fails outright; a response without a
        // channel element is how a broken body shows up
        let channel = document
            .select(&channel_selector)
            .next()
            .ok_or_else(|| AppError::backend("response has no channel element"))?;

        let mut items = Vec::new();
        for item in channel.select(&item_selector) {
            let mut fields = HashMap::new();
            for child in item.child_elements() {
                let name = local_name(child.value().name()).to_ascii_lowercase();
                let value = child.text().collect::<String>().trim().to_string();
                if !value.is_empty() {
                    fields.entry(name).or_insert(value);
                }
            }
            items.push(FeedItem { fields });
        }

        Ok(items)
    }
}

/// Element name with any namespace prefix removed.
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::backend(format!("invalid selector '{s}': {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:arq="http://archive.example/opensearchrss/1.0/">
  <channel>
    <description>3 results</description>
    <item>
      <arq:tstamp>20100615123045</arq:tstamp>
      <arq:primaryType>text</arq:primaryType>
      <arq:subType>html</arq:subType>
      <arq:digest>sha1:ABCDEF</arq:digest>
      <arq:arcoffset>1024</arq:arcoffset>
      <arq:arcname>IA-000123</arq:arcname>
    </item>
    <item>
      <arq:tstamp>20091231120000</arq:tstamp>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_extracts_items_in_feed_order() {
        let items = RssFeedParser.parse(FEED.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("tstamp"), Some("20100615123045"));
        assert_eq!(items[1].get("tstamp"), Some("20091231120000"));
    }

    #[test]
    fn test_parse_ignores_namespace_prefix_and_case() {
        let items = RssFeedParser.parse(FEED.as_bytes()).unwrap();
        assert_eq!(items[0].get("primaryType"), Some("text"));
        assert_eq!(items[0].get("subtype"), Some("html"));
        assert_eq!(items[0].get("arcname"), Some("IA-000123"));
    }

    #[test]
    fn test_parse_missing_fields_answer_none() {
        let items = RssFeedParser.parse(FEED.as_bytes()).unwrap();
        assert_eq!(items[1].get("digest"), None);
        assert_eq!(items[1].get("arcname"), None);
    }

    #[test]
    fn test_parse_empty_channel_yields_no_items() {
        let feed = "<rss><channel><description>0 results</description></channel></rss>";
        let items = RssFeedParser.parse(feed.as_bytes()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_without_channel_is_backend_error() {
        let result = RssFeedParser.parse(b"<html><body>502 Bad Gateway</body></html>");
        assert!(matches!(result, Err(AppError::Backend { .. })));
    }

    #[test]
    fn test_parse_non_utf8_is_backend_error() {
        let result = RssFeedParser.parse(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(AppError::Backend { .. })));
    }
}
