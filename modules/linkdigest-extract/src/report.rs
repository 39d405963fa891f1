//! Digest rendering. The layout is a public contract: the URL-list
//! extractor downstream parses the `- URL:` lines, so spacing and labels
//! stay fixed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use linkdigest_common::{Bucket, LinkDigestError, LinkRecord};

/// Render one bucket's merged records as a digest document.
///
/// Dated records sort newest-first (lexicographic on the timestamp string,
/// stable for ties) and render as numbered blocks; undated records trail in
/// an unordered section.
pub fn render_report(records: &[LinkRecord], bucket: Bucket) -> String {
    let mut dated: Vec<&LinkRecord> = records.iter().filter(|r| r.date.is_some()).collect();
    let undated: Vec<&LinkRecord> = records.iter().filter(|r| r.date.is_none()).collect();

    dated.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::new();
    out.push_str(bucket.header());
    out.push_str("\n\n");

    for (i, record) in dated.into_iter().enumerate() {
        render_dated(&mut out, i + 1, record);
    }

    if !undated.is_empty() {
        out.push_str("\nAdditional URLs (No Date):\n");
        for record in undated {
            render_undated(&mut out, record);
        }
    }

    out
}

fn render_dated(out: &mut String, index: usize, record: &LinkRecord) {
    out.push_str(&format!("{}. Date: {}\n", index, record.date.as_deref().unwrap_or("")));
    out.push_str(&format!("   - URL: {}\n", record.url));

    if let Some(profile) = &record.profile {
        out.push_str(&format!("   - Profile: {profile}\n"));
    }
    if let Some(shared) = &record.shared_profile {
        out.push_str(&format!("   - ProfileShared: {shared}\n"));
    }
    if let Some(title) = &record.title {
        out.push_str(&format!("   - Title: \"{title}\"\n"));
    }
    if let Some(description) = &record.description {
        out.push_str(&format!("   - Description: \"{description}\"\n"));
    }

    if !record.images.is_empty() {
        out.push_str("   - Images:\n");
        for img in &record.images {
            out.push_str(&format!(
                "     * Facebook URL: {}\n",
                img.platform_url.as_deref().unwrap_or("")
            ));
            if let Some(desc) = &img.description {
                out.push_str(&format!("       Description: {desc}\n"));
            }
            if let (Some(w), Some(h)) = (img.width, img.height) {
                out.push_str(&format!("       Dimensions: {w}x{h}\n"));
            }
        }
    }

    out.push('\n');
}

fn render_undated(out: &mut String, record: &LinkRecord) {
    out.push_str(&format!("- {}", record.url));
    if let Some(profile) = &record.profile {
        out.push_str(&format!(" (Profile: {profile})"));
    }
    if let Some(shared) = &record.shared_profile {
        out.push_str(&format!(" (ProfileShared: {shared})"));
    }
    out.push('\n');
}

/// Render and write one bucket's digest into `output_dir`. Returns the file
/// path.
pub fn write_report(
    output_dir: &Path,
    records: &[LinkRecord],
    bucket: Bucket,
) -> Result<PathBuf, LinkDigestError> {
    let path = output_dir.join(bucket.file_name());
    let content = render_report(records, bucket);

    fs::write(&path, content)
        .map_err(|e| LinkDigestError::Output(format!("failed to write {}: {e}", path.display())))?;

    info!(path = %path.display(), records = records.len(), "Digest written");
    Ok(path)
}
