// src/services/query.rs

//! Backend query construction.
//!
//! The remote index only understands free-text queries with date
//! filters. A closest-date lookup becomes `closestdate:... exacturl:...`;
//! a range lookup becomes `exacturlexpand:... date:FROM-TO`.

use url::form_urlencoded;

use crate::models::LookupRequest;
use crate::utils::timestamp::{EARLIEST_DATE, LATEST_DATE, pad_timestamp, timestamp_now};

/// Parameter block every query URL carries. Paging and site-level
/// deduplication happen on the index side.
const FIXED_PARAMS: &str =
    "&hitsPerPage=10000&start=0&dedupField=site&hitsPerDup=10000&hitsPerSite=10000&waybackQuery=true";

/// Build the free-text query for a validated request.
///
/// `from`/`to` are only meaningful when `closest` is absent.
pub fn build_query(request: &LookupRequest) -> String {
    match &request.closest {
        Some(closest) => closest_query(&request.url, closest),
        None => range_query(request),
    }
}

/// Assemble the full backend URL for a query string.
pub fn query_url(endpoint: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{endpoint}?query={encoded}{FIXED_PARAMS}")
}

fn closest_query(url: &str, closest: &str) -> String {
    let closest = pad_timestamp(closest, EARLIEST_DATE);
    format!("closestdate:{closest} exacturl:{url}")
}

fn range_query(request: &LookupRequest) -> String {
    let from_ts = match &request.from {
        Some(from) => pad_timestamp(from, EARLIEST_DATE),
        None => EARLIEST_DATE.to_string(),
    };

    // An open upper bound ends at the present, not at the latest sentinel
    let to_ts = match &request.to {
        Some(to) => pad_timestamp(to, LATEST_DATE),
        None => timestamp_now(),
    };

    format!("exacturlexpand:{} date:{from_ts}-{to_ts}", request.url)
}
