//! Content kinds and resolved content records.

use serde::{Deserialize, Serialize};

/// Kind of uploaded asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Video upload
    Video,

    /// Document upload
    Document,
}

impl ContentKind {
    /// Path segment used when deriving asset locators.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Document => "document",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "video" => Ok(ContentKind::Video),
            "document" | "doc" => Ok(ContentKind::Document),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}

/// A lesson content reference resolved against the registry.
///
/// The `type` tag on the wire is `"video"`, `"document"`, or `"unknown"`.
/// Unresolved references are not an error: a name absent from the registry
/// produces an `Unknown` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedContent {
    /// Reference found among uploaded videos
    Video { id: String, locator: String },

    /// Reference found among uploaded documents
    Document { id: String, locator: String },

    /// Reference matching no uploaded asset
    Unknown { id: String, message: String },
}

impl ResolvedContent {
    /// The content identifier this record describes.
    pub fn id(&self) -> &str {
        match self {
            ResolvedContent::Video { id, .. } => id,
            ResolvedContent::Document { id, .. } => id,
            ResolvedContent::Unknown { id, .. } => id,
        }
    }
}

/// Resolved content for one lesson, in `content_ids` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    /// The lesson the records belong to
    pub lesson_id: i64,

    /// One record per `content_ids` entry, same order
    pub content: Vec<ResolvedContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_str() {
        assert_eq!("video".parse::<ContentKind>().unwrap(), ContentKind::Video);
        assert_eq!(
            "document".parse::<ContentKind>().unwrap(),
            ContentKind::Document
        );
        assert_eq!("doc".parse::<ContentKind>().unwrap(), ContentKind::Document);
        assert!("audio".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_resolved_content_type_tag() {
        let video = ResolvedContent::Video {
            id: "intro.mp4".to_string(),
            locator: "/path/to/video/intro.mp4".to_string(),
        };
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["id"], "intro.mp4");

        let unknown = ResolvedContent::Unknown {
            id: "missing.pdf".to_string(),
            message: "Content not found in uploads".to_string(),
        };
        let json = serde_json::to_value(&unknown).unwrap();
        assert_eq!(json["type"], "unknown");
        assert_eq!(json["message"], "Content not found in uploads");
    }
}
