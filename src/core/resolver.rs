//! Resolution of lesson content references against the registry.

use std::fmt;

use crate::core::registry::ContentRegistry;
use crate::domain::{ContentKind, ResolvedContent};
use crate::locator::{AssetLocator, PlaceholderLocator};

/// Message attached to references that match no uploaded asset.
pub const UNKNOWN_CONTENT_MESSAGE: &str = "Content not found in uploads";

/// Maps content identifiers to descriptive records.
///
/// Lookup order is fixed: videos first, then documents. The locator is
/// injected so deployments can route assets through a CDN; the default is a
/// placeholder path embedding the kind and the content id.
pub struct ContentResolver {
    locator: Box<dyn AssetLocator>,
}

impl Default for ContentResolver {
    fn default() -> Self {
        Self::new(Box::new(PlaceholderLocator))
    }
}

impl ContentResolver {
    /// Create a resolver with the given locator.
    pub fn new(locator: Box<dyn AssetLocator>) -> Self {
        Self { locator }
    }

    /// Resolve one content identifier. Reads the registry, never writes it.
    pub fn resolve(&self, registry: &ContentRegistry, content_id: &str) -> ResolvedContent {
        if registry.is_video(content_id) {
            ResolvedContent::Video {
                id: content_id.to_string(),
                locator: self.locator.locate(ContentKind::Video, content_id),
            }
        } else if registry.is_document(content_id) {
            ResolvedContent::Document {
                id: content_id.to_string(),
                locator: self.locator.locate(ContentKind::Document, content_id),
            }
        } else {
            ResolvedContent::Unknown {
                id: content_id.to_string(),
                message: UNKNOWN_CONTENT_MESSAGE.to_string(),
            }
        }
    }
}

impl fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentResolver").finish_non_exhaustive()
    }
}
