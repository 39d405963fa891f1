/// Rule set for URL extraction and classification.
///
/// Threaded explicitly into the cleaner, collector and merger so that two
/// runs (or two tests) can use different rules without touching any shared
/// state.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    /// Links whose host contains this domain go in the in-platform bucket.
    pub platform_domain: String,

    /// URLs containing this marker keep their query string untouched —
    /// CDN image links are only valid with all original parameters.
    pub cdn_marker: String,

    /// Substring markers (lowercase) for URLs that are never preferred as
    /// the canonical link of a merged post: CDN hosts, object storage,
    /// edge caches, CDN proxy paths.
    pub unclean_markers: Vec<String>,

    /// Key names scanned for direct link values at any nesting depth.
    pub url_keys: Vec<String>,

    /// Key name whose values are free text, scanned for embedded URLs.
    pub text_key: String,
}

impl Default for ExtractionRules {
    /// The Facebook-group export rule set.
    fn default() -> Self {
        Self {
            platform_domain: "facebook.com".to_string(),
            cdn_marker: "fbcdn.net".to_string(),
            unclean_markers: vec![
                "fbcdn.net".to_string(),
                "scontent".to_string(),
                "amazonaws.com".to_string(),
                "akamaized.net".to_string(),
                "cloudfront.net".to_string(),
                "/cdn-cgi/".to_string(),
            ],
            url_keys: vec![
                "url".to_string(),
                "link".to_string(),
                "uri".to_string(),
                "href".to_string(),
                "profileUrl".to_string(),
            ],
            text_key: "text".to_string(),
        }
    }
}
