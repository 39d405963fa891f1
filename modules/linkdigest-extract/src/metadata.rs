//! Per-post metadata: timestamp, title, description, authoring identities
//! and image attachments, derived with fixed precedence rules.

use serde_json::Value;

use linkdigest_common::ImageDescriptor;

use crate::scan::first_string;

/// Metadata shared by every link extracted from one post. Fixed per post:
/// two URLs found in the same post carry identical metadata.
#[derive(Debug, Clone, Default)]
pub struct PostMetadata {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub profile: Option<String>,
    pub shared_profile: Option<String>,
    pub images: Vec<ImageDescriptor>,
}

impl PostMetadata {
    pub fn from_post(post: &Value) -> Self {
        Self {
            date: post_date(post),
            title: first_string(post, "title"),
            description: first_string(post, "previewDescription"),
            profile: profile_name(post),
            shared_profile: shared_profile_name(post),
            images: extract_images(post),
        }
    }
}

/// The post's own `time` wins; a reshare falls back to the shared post's
/// `time`. Empty strings count as absent.
fn post_date(post: &Value) -> Option<String> {
    if let Some(time) = non_empty_str(post.get("time")) {
        return Some(time.to_string());
    }

    non_empty_str(post.get("sharedPost").and_then(|s| s.get("time"))).map(String::from)
}

fn profile_name(post: &Value) -> Option<String> {
    nested_name(post.get("user"))
}

/// For reshares: the original author's name, falling back to the shared
/// page's name when no user is attached.
fn shared_profile_name(post: &Value) -> Option<String> {
    let shared = post.get("sharedPost")?;
    nested_name(shared.get("user")).or_else(|| nested_name(shared.get("pageName")))
}

/// `name` field one level inside a nested author/page object. Anything that
/// is not an object holding a string `name` yields nothing.
fn nested_name(value: Option<&Value>) -> Option<String> {
    value?.get("name")?.as_str().map(String::from)
}

/// Photo attachments from the post's `media` array and, for reshares, the
/// shared post's. Each photo carries the permanent platform link and the
/// temporary CDN rendition; entries with neither URL are still kept.
fn extract_images(post: &Value) -> Vec<ImageDescriptor> {
    let mut images = Vec::new();

    collect_media(post.get("media"), &mut images);
    collect_media(post.get("sharedPost").and_then(|s| s.get("media")), &mut images);

    images
}

fn collect_media(media: Option<&Value>, out: &mut Vec<ImageDescriptor>) {
    let Some(items) = media.and_then(|m| m.as_array()) else {
        return;
    };

    for item in items {
        if item.get("__typename").and_then(|t| t.as_str()) != Some("Photo") {
            continue;
        }

        let photo_image = item.get("photo_image");
        out.push(ImageDescriptor {
            platform_url: item.get("url").and_then(|v| v.as_str()).map(String::from),
            cdn_url: photo_image
                .and_then(|p| p.get("uri"))
                .and_then(|v| v.as_str())
                .map(String::from),
            width: photo_image.and_then(|p| p.get("width")).and_then(|v| v.as_u64()),
            height: photo_image.and_then(|p| p.get("height")).and_then(|v| v.as_u64()),
            description: item.get("ocrText").and_then(|v| v.as_str()).map(String::from),
        });
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}
