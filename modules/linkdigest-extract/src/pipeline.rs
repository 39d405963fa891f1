//! End-to-end digest run: read and parse the export, extract per post,
//! dedup globally, merge per timestamp group, write both digests.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use linkdigest_common::{Bucket, ExtractionRules, LinkDigestError, LinkRecord};

use crate::collector::{dedup_records, extract_post_links};
use crate::merge::merge_records;
use crate::report::write_report;
use crate::stats::DigestStats;

/// Run the whole pipeline. Input errors and output errors abort; malformed
/// values inside individual posts are skipped by the extraction stages.
pub fn run(
    input: &Path,
    output_dir: &Path,
    rules: &ExtractionRules,
) -> Result<DigestStats, LinkDigestError> {
    let raw = fs::read_to_string(input)
        .map_err(|e| LinkDigestError::Input(format!("cannot read {}: {e}", input.display())))?;

    let parsed: Value = serde_json::from_str(&raw)
        .map_err(|e| LinkDigestError::Parse(format!("{} is not valid JSON: {e}", input.display())))?;

    let posts = match parsed {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(LinkDigestError::Input(format!(
                "expected a JSON array or object of posts, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut platform: Vec<LinkRecord> = Vec::new();
    let mut external: Vec<LinkRecord> = Vec::new();

    for post in &posts {
        let (fb, ext) = extract_post_links(post, rules);
        platform.extend(fb);
        external.extend(ext);
    }

    let platform = dedup_records(platform);
    let external = dedup_records(external);

    fs::create_dir_all(output_dir).map_err(|e| {
        LinkDigestError::Output(format!("cannot create {}: {e}", output_dir.display()))
    })?;

    let mut stats = DigestStats {
        posts_scanned: posts.len() as u32,
        ..Default::default()
    };

    stats.platform_before_merge = platform.len() as u32;
    let platform = merge_records(platform, rules);
    stats.platform_after_merge = platform.len() as u32;
    info!(
        before = stats.platform_before_merge,
        after = stats.platform_after_merge,
        "Facebook links merged"
    );
    write_report(output_dir, &platform, Bucket::Platform)?;

    stats.external_before_merge = external.len() as u32;
    let external = merge_records(external, rules);
    stats.external_after_merge = external.len() as u32;
    info!(
        before = stats.external_before_merge,
        after = stats.external_after_merge,
        "External links merged"
    );
    write_report(output_dir, &external, Bucket::External)?;

    Ok(stats)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
