//! URL collection and classification for one post, plus the global
//! cross-post dedup pass.

use std::collections::HashSet;

use serde_json::Value;

use linkdigest_common::{clean_url, extract_domain, ExtractionRules, LinkRecord};

use crate::metadata::PostMetadata;
use crate::scan::find_strings;

/// Extract every link in one post, returning `(platform, external)` record
/// lists.
///
/// The scanner is driven over each URL-bearing key in turn, then over the
/// post's free-text fields (whitespace tokens starting with `http`). Every
/// candidate is cleaned, deduplicated within the post on the cleaned string
/// (first discovery wins), and bucketed by host. Metadata is computed once
/// per post and attached to every record.
pub fn extract_post_links(
    post: &Value,
    rules: &ExtractionRules,
) -> (Vec<LinkRecord>, Vec<LinkRecord>) {
    let meta = PostMetadata::from_post(post);

    let mut candidates: Vec<String> = Vec::new();
    for key in &rules.url_keys {
        candidates.extend(find_strings(post, key).into_iter().map(String::from));
    }
    for text in find_strings(post, &rules.text_key) {
        candidates.extend(find_text_urls(text));
    }

    // Photo attachment links are metadata, not link candidates: the scanner
    // will hit `media[].url` and `photo_image.uri`, but those travel on the
    // record's image list instead of becoming records themselves.
    let image_urls: HashSet<&str> = meta
        .images
        .iter()
        .flat_map(|img| [img.platform_url.as_deref(), img.cdn_url.as_deref()])
        .flatten()
        .collect();

    let mut platform = Vec::new();
    let mut external = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for candidate in candidates {
        if !candidate.starts_with("http") || image_urls.contains(candidate.as_str()) {
            continue;
        }

        let cleaned = clean_url(&candidate, rules);
        if !seen.insert(cleaned.clone()) {
            continue;
        }

        let record = record_from_meta(cleaned, &meta);
        if extract_domain(&record.url).contains(&rules.platform_domain) {
            platform.push(record);
        } else {
            external.push(record);
        }
    }

    (platform, external)
}

/// Whitespace tokens that start with the `http` scheme prefix.
fn find_text_urls(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.starts_with("http"))
        .map(String::from)
        .collect()
}

/// Cross-post dedup: one record per distinct URL, first record encountered
/// in input order wins.
pub fn dedup_records(records: Vec<LinkRecord>) -> Vec<LinkRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.url.clone()))
        .collect()
}

fn record_from_meta(url: String, meta: &PostMetadata) -> LinkRecord {
    LinkRecord {
        url,
        date: meta.date.clone(),
        title: meta.title.clone(),
        description: meta.description.clone(),
        profile: meta.profile.clone(),
        shared_profile: meta.shared_profile.clone(),
        images: meta.images.clone(),
    }
}
