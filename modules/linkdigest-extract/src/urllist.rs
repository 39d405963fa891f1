//! Flat URL-list recovery from a digest document.
//!
//! Digests list every link on a `- URL: <value>` line; this module parses
//! those lines back out and filters down to URLs worth handing to the
//! crawler: no CDN image hosts, no bare domains.

use std::sync::LazyLock;

use regex::Regex;

static URL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*- URL:\s*(https?://\S+)\s*$").expect("valid URL-line regex")
});

/// Hosts with this prefix serve CDN image renditions, not pages.
const CDN_HOST_PREFIX: &str = "scontent";

/// Every URL on a `- URL:` line of a digest document, in document order,
/// filtered through [`is_crawlable`].
pub fn extract_report_urls(content: &str) -> Vec<String> {
    URL_LINE
        .captures_iter(content)
        .map(|cap| cap[1].to_string())
        .filter(|url| is_crawlable(url))
        .collect()
}

/// A URL is worth crawling when it parses, is not a CDN image host, and has
/// a non-root path.
pub fn is_crawlable(url: &str) -> bool {
    let Ok(parsed) = url::Url::parse(url) else {
        return false;
    };

    if parsed.host_str().is_some_and(|h| h.starts_with(CDN_HOST_PREFIX)) {
        return false;
    }

    let path = parsed.path();
    if path.is_empty() || path == "/" {
        return false;
    }

    path.split('/').any(|seg| !seg.is_empty())
}
