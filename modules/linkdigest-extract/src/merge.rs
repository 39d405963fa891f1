//! Cross-post merger: the same post found through several key paths yields
//! several records sharing one timestamp. Each timestamp group collapses to
//! a single record built around its cleanest URL.

use std::collections::HashMap;

use linkdigest_common::{is_clean_url, ExtractionRules, ImageDescriptor, LinkRecord};

/// Collapse records sharing a `date` into one record per group.
///
/// The base of each group is its first member with a clean URL (first member
/// outright when none are clean); image lists are unioned across the group
/// in member order with full-field dedup. Undated records are exempt from
/// grouping and follow the merged output in their original order. Running
/// the merger on its own output is a no-op.
pub fn merge_records(records: Vec<LinkRecord>, rules: &ExtractionRules) -> Vec<LinkRecord> {
    let mut group_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<LinkRecord>> = HashMap::new();
    let mut undated: Vec<LinkRecord> = Vec::new();

    for record in records {
        match &record.date {
            Some(date) if !date.is_empty() => {
                let key = date.clone();
                if !groups.contains_key(&key) {
                    group_order.push(key.clone());
                }
                groups.entry(key).or_default().push(record);
            }
            _ => undated.push(record),
        }
    }

    let mut merged: Vec<LinkRecord> = Vec::new();
    for date in &group_order {
        if let Some(group) = groups.remove(date) {
            merged.push(merge_group(group, rules));
        }
    }

    merged.extend(undated);
    merged
}

fn merge_group(mut group: Vec<LinkRecord>, rules: &ExtractionRules) -> LinkRecord {
    if group.len() == 1 {
        return group.remove(0);
    }

    let all_images = union_images(&group);

    let base_idx = group
        .iter()
        .position(|r| is_clean_url(&r.url, rules))
        .unwrap_or(0);

    let mut base = group.swap_remove(base_idx);
    base.images = all_images;
    base
}

/// Images across the whole group in member order, exact duplicates dropped.
fn union_images(group: &[LinkRecord]) -> Vec<ImageDescriptor> {
    let mut all: Vec<ImageDescriptor> = Vec::new();
    for record in group {
        for img in &record.images {
            if !all.contains(img) {
                all.push(img.clone());
            }
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ExtractionRules {
        ExtractionRules::default()
    }

    fn dated(url: &str, date: &str) -> LinkRecord {
        let mut r = LinkRecord::new(url.to_string());
        r.date = Some(date.to_string());
        r
    }

    fn image(platform_url: &str) -> ImageDescriptor {
        ImageDescriptor {
            platform_url: Some(platform_url.to_string()),
            cdn_url: None,
            width: None,
            height: None,
            description: None,
        }
    }

    #[test]
    fn clean_url_wins_over_storage_url() {
        let mut storage = dated("https://bucket.amazonaws.com/obj", "2025-01-01T00:00:00Z");
        storage.images.push(image("https://facebook.com/photo.php?fbid=1"));
        let clean = dated("https://news.com/x", "2025-01-01T00:00:00Z");

        let out = merge_records(vec![storage, clean], &rules());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://news.com/x");
        // The storage record's image is carried over.
        assert_eq!(out[0].images.len(), 1);
    }

    #[test]
    fn first_member_is_base_when_none_are_clean() {
        let a = dated("https://a.amazonaws.com/1", "2025-01-01T00:00:00Z");
        let b = dated("https://b.cloudfront.net/2", "2025-01-01T00:00:00Z");
        let out = merge_records(vec![a, b], &rules());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://a.amazonaws.com/1");
    }

    #[test]
    fn images_union_in_member_order_without_duplicates() {
        let mut a = dated("https://news.com/x", "2025-01-01T00:00:00Z");
        a.images.push(image("https://facebook.com/photo.php?fbid=1"));
        let mut b = dated("https://b.amazonaws.com/y", "2025-01-01T00:00:00Z");
        b.images.push(image("https://facebook.com/photo.php?fbid=1"));
        b.images.push(image("https://facebook.com/photo.php?fbid=2"));

        let out = merge_records(vec![a, b], &rules());
        assert_eq!(out.len(), 1);
        let urls: Vec<_> = out[0]
            .images
            .iter()
            .map(|i| i.platform_url.as_deref().unwrap())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://facebook.com/photo.php?fbid=1",
                "https://facebook.com/photo.php?fbid=2"
            ]
        );
    }

    #[test]
    fn undated_records_pass_through_after_dated_groups() {
        let undated = LinkRecord::new("https://nodate.com/x".to_string());
        let a = dated("https://a.com/1", "2025-01-02T00:00:00Z");
        let b = dated("https://b.com/2", "2025-01-01T00:00:00Z");

        let out = merge_records(vec![undated.clone(), a, b], &rules());
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].url, "https://nodate.com/x");
    }

    #[test]
    fn distinct_dates_do_not_merge() {
        let a = dated("https://a.com/1", "2025-01-01T00:00:00Z");
        let b = dated("https://b.com/2", "2025-01-02T00:00:00Z");
        let out = merge_records(vec![a, b], &rules());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn merging_twice_is_a_no_op() {
        let mut storage = dated("https://x.amazonaws.com/1", "2025-01-01T00:00:00Z");
        storage.images.push(image("https://facebook.com/photo.php?fbid=1"));
        let clean = dated("https://news.com/x", "2025-01-01T00:00:00Z");
        let undated = LinkRecord::new("https://nodate.com/x".to_string());

        let once = merge_records(vec![storage, clean, undated], &rules());
        let twice = merge_records(once.clone(), &rules());
        assert_eq!(once, twice);
    }

    #[test]
    fn groups_emit_in_first_seen_order() {
        let a = dated("https://late.com/x", "2025-03-01T00:00:00Z");
        let b = dated("https://early.com/y", "2025-01-01T00:00:00Z");
        let c = dated("https://late2.com/z", "2025-03-01T00:00:00Z");

        // Group for 2025-03-01 was seen first, so it emits first even though
        // ordering by date happens later, in the report writer.
        let out = merge_records(vec![a, b, c], &rules());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].url, "https://late.com/x");
        assert_eq!(out[1].url, "https://early.com/y");
    }
}
