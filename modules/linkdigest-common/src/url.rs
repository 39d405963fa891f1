use percent_encoding::percent_decode_str;

use crate::config::ExtractionRules;

/// Normalize a URL: percent-decode it, then rebuild as `scheme://host/path`,
/// dropping query string and fragment.
///
/// URLs containing the CDN marker are returned untouched — CDN image links
/// break without their full query string. Empty and unparseable input comes
/// back as-is (trimmed), never as an error.
pub fn clean_url(url: &str, rules: &ExtractionRules) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.contains(&rules.cdn_marker) {
        return url.to_string();
    }

    let decoded = percent_decode_str(url).decode_utf8_lossy();

    let Ok(parsed) = ::url::Url::parse(&decoded) else {
        return decoded.trim_end().to_string();
    };

    // The parser re-escapes characters it finds unpalatable in the path;
    // decode once more so the output stays in unescaped form.
    let path = percent_decode_str(parsed.path()).decode_utf8_lossy();

    let cleaned = format!(
        "{}://{}{}",
        parsed.scheme(),
        parsed.host_str().unwrap_or(""),
        path
    );

    cleaned.trim_end().to_string()
}

/// A URL is "clean" when it is a canonical page link rather than a CDN,
/// object-storage or edge-cache artifact. The merger prefers clean URLs when
/// collapsing records from the same post.
pub fn is_clean_url(url: &str, rules: &ExtractionRules) -> bool {
    if url.is_empty() {
        return false;
    }

    let lower = url.to_lowercase();
    !rules.unclean_markers.iter().any(|m| lower.contains(m.as_str()))
}

/// Extract the host from a URL (e.g. "https://www.example.com/path" ->
/// "www.example.com").
pub fn extract_domain(url: &str) -> String {
    url.split("://")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or("")
        .to_lowercase()
}
