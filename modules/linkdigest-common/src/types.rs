use serde::{Deserialize, Serialize};

/// One image attached to a post: the permanent platform photo link plus the
/// temporary CDN rendition. Full-field equality drives duplicate suppression
/// when posts are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub platform_url: Option<String>,
    pub cdn_url: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    /// OCR text extracted from the image, when the export carries it.
    pub description: Option<String>,
}

/// The canonical extracted-URL entity.
///
/// `url` is unique within one bucket after global dedup. `date` is the merge
/// key: the same post scanned through several key paths yields several
/// records sharing one timestamp, which the merger collapses. Records with
/// no `date` are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Authoring identity of the post.
    pub profile: Option<String>,
    /// Original authoring identity, when the post is a reshare.
    pub shared_profile: Option<String>,
    /// Discovery order, deduplicated by full-field equality.
    pub images: Vec<ImageDescriptor>,
}

impl LinkRecord {
    pub fn new(url: String) -> Self {
        Self {
            url,
            date: None,
            title: None,
            description: None,
            profile: None,
            shared_profile: None,
            images: Vec::new(),
        }
    }
}

/// Which digest a record belongs to. Assigned once at record creation from
/// the URL's host and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Links pointing back into the platform the export came from.
    Platform,
    /// Everything else.
    External,
}

impl Bucket {
    /// Digest header line, fixed by the output contract.
    pub fn header(self) -> &'static str {
        match self {
            Bucket::Platform => "# Facebook Links (Newest First)",
            Bucket::External => "# External Links (Newest First)",
        }
    }

    /// Output file name, fixed by the output contract.
    pub fn file_name(self) -> &'static str {
        match self {
            Bucket::Platform => "facebook_links.md",
            Bucket::External => "external_links.md",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_equality_is_full_field() {
        let a = ImageDescriptor {
            platform_url: Some("https://facebook.com/photo.php?fbid=1".to_string()),
            cdn_url: None,
            width: Some(800),
            height: Some(600),
            description: None,
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.height = Some(601);
        assert_ne!(a, b);
    }

    #[test]
    fn bucket_contract_names() {
        assert_eq!(Bucket::Platform.file_name(), "facebook_links.md");
        assert_eq!(Bucket::External.file_name(), "external_links.md");
        assert!(Bucket::Platform.header().contains("Facebook Links"));
        assert!(Bucket::External.header().contains("External Links"));
    }
}
