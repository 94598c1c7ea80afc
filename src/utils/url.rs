// src/utils/url.rs

//! URL normalization and canonicalization.

use url::Url;

/// Ensure a request URL carries an explicit scheme.
///
/// Bare hosts and protocol-relative URLs default to plain http; archives
/// key captures on the exact URL, so the legacy default stays.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("http://{rest}")
    } else {
        format!("http://{url}")
    }
}

/// Canonical urlkey for grouping captures regardless of superficial
/// URL variation.
///
/// SURT form: lowercased host with any `www` prefix dropped, reversed
/// and comma-joined, then `)` and the path. Query parameters are
/// lowercased and sorted; session identifiers are dropped.
///
/// # Examples
/// ```
/// use cdxbridge::utils::url::canonicalize;
///
/// assert_eq!(
///     canonicalize("http://www.Example.com/Some/Path"),
///     "com,example)/some/path"
/// );
/// ```
pub fn canonicalize(url: &str) -> String {
    let parsed = match Url::parse(&ensure_scheme(url.trim())) {
        Ok(parsed) => parsed,
        Err(_) => return url.trim().to_lowercase(),
    };

    let host = parsed.host_str().unwrap_or_default().to_lowercase();
    let host = strip_www(&host);
    let surt_host: String = host.split('.').rev().collect::<Vec<_>>().join(",");

    let mut key = format!("{surt_host}){}", parsed.path().to_lowercase());

    if let Some(query) = parsed.query() {
        let mut pairs: Vec<String> = query
            .split('&')
            .filter(|pair| !pair.is_empty() && !is_session_param(pair))
            .map(str::to_lowercase)
            .collect();
        if !pairs.is_empty() {
            pairs.sort();
            key.push('?');
            key.push_str(&pairs.join("&"));
        }
    }

    key
}

fn strip_www(host: &str) -> String {
    match regex::Regex::new(r"^www\d*\.") {
        Ok(re) => re.replace(host, "").into_owned(),
        Err(_) => host.to_string(),
    }
}

fn is_session_param(pair: &str) -> bool {
    match regex::Regex::new(r"(?i)^(jsessionid|phpsessid|aspsessionid[a-z]*|cfid|cftoken)=") {
        Ok(re) => re.is_match(pair),
        Err(_) => false,
    }
}
